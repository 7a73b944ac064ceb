// ABOUTME: Root greeting, catch-all OPTIONS responder, and unmatched-path fallback
// ABOUTME: Every path answers OPTIONS with an empty 200; unknown paths otherwise get a JSON 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::messages;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Root and fallback routes
pub struct WelcomeRoutes;

impl WelcomeRoutes {
    /// GET / and OPTIONS /
    pub fn routes() -> Router {
        Router::new().route("/", get(Self::handle_welcome).options(handle_options))
    }

    /// GET /: plain text greeting
    async fn handle_welcome() -> &'static str {
        messages::WELCOME
    }
}

/// OPTIONS on any path: 200 with an empty body
pub async fn handle_options() -> StatusCode {
    StatusCode::OK
}

/// Fallback for paths no route matched
pub async fn handle_fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": messages::ROUTE_NOT_FOUND })),
    )
        .into_response()
}
