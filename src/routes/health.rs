// ABOUTME: Health check route for load balancers and service monitoring
// ABOUTME: Reports liveness with a timestamp; never touches the customer store
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// GET /health
    pub fn routes() -> axum::Router {
        use crate::constants::service_names;
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service_names::CUSTOMER_API,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
