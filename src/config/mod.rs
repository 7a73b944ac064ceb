// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration: bind address, store path, CORS, and logging level
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration module
//!
//! All settings come from environment variables; there is no configuration
//! file. See [`environment::ServerConfig::from_env`] for the variables read.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseConfig, Environment, LogLevel, ServerConfig};
