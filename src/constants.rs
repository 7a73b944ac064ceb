// ABOUTME: Application constants re-exported from customer-core plus server defaults
// ABOUTME: Environment variable names and default values used by configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub use customer_core::constants::*;

/// Environment variable names read at startup
pub mod env_config {
    /// Listening port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Store file path
    pub const DATABASE_PATH: &str = "DATABASE_PATH";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default store file, relative to the working directory
    pub const DATABASE_PATH: &str = "./sqlite/customers.sqlite";
    /// Allow any origin unless configured otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Service identity used in logs
pub mod service_names {
    /// Name of this service
    pub const CUSTOMER_API: &str = "customer-api";
}
