// ABOUTME: Route module organization for the customer API HTTP endpoints
// ABOUTME: Groups route definitions by resource with thin handlers over the store gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the customer API
//!
//! Each module holds route definitions and thin handlers; persistence lives
//! in [`crate::database`] and input cleanup in [`crate::normalizer`].

/// Customer CRUD routes
pub mod customers;
/// Health check route
pub mod health;
/// Request body parsing for write endpoints
pub mod payload;
/// Root greeting, OPTIONS responder, and fallback
pub mod welcome;

/// Customer route handlers
pub use customers::CustomerRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// Parsed write-endpoint body
pub use payload::{CustomerFields, RawField};
/// Root and fallback handlers
pub use welcome::{handle_fallback, handle_options, WelcomeRoutes};
