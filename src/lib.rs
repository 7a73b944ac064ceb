// ABOUTME: Main library entry point for the customer records API
// ABOUTME: Exposes routing, input normalization, and the SQLite-backed customer gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Customer API
//!
//! A small HTTP API for managing customer records (create, read by id, read
//! by name or email, partial update, delete) stored in a single SQLite file.
//!
//! ## Architecture
//!
//! A request flows through the layers in one linear pass:
//!
//! - **Routes**: map verb + path + query onto one gateway call and shape the
//!   JSON response
//! - **Normalizer**: trims, strips markup, escapes, and clips incoming fields
//!   before validation
//! - **Database**: the customer gateway; opens the store per call, runs one
//!   parameterized statement, and releases the connection on every path
//!
//! Nothing is cached between requests and no connection outlives the call
//! that opened it.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use customer_api::config::environment::ServerConfig;
//! use customer_api::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     customer_api::server::run(config).await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;
/// Application constants re-exported from the core crate
pub mod constants;
/// Customer store access and the persistence gateway
pub mod database;
/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;
/// Production logging and structured output
pub mod logging;
/// HTTP middleware for request tracing and CORS
pub mod middleware;
/// Customer data models
pub mod models;
/// Input normalization for incoming customer fields
pub mod normalizer;
/// `HTTP` routes for the customer API
pub mod routes;
/// Router assembly and server lifecycle
pub mod server;
