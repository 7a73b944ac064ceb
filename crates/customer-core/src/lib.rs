// ABOUTME: Core types and constants for the customer records API
// ABOUTME: Foundation crate with error handling, the Customer model, and field limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Customer Core
//!
//! Foundation crate providing shared types and constants for the customer
//! records API. Kept separate from the server crate so route and gateway
//! changes do not force a rebuild of these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The `Customer` record as stored and returned over HTTP
//! - **constants**: Field limits, table layout, and response messages

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
