// ABOUTME: Server binary for the customer records API
// ABOUTME: Loads environment configuration, applies CLI overrides, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Customer API Server Binary
//!
//! Starts the HTTP API over the configured `SQLite` store file.

use anyhow::Result;
use clap::Parser;
use customer_api::{config::environment::ServerConfig, logging, server};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "customer-api-server")]
#[command(about = "Customer records API over a single-file SQLite store")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the store file path
    #[arg(long)]
    database_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_path) = args.database_path {
        config.database.path = database_path;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Customer API");
    info!("{}", config.summary());

    server::run(config).await?;
    Ok(())
}
