// ABOUTME: Customer store access with per-call connections and idempotent schema setup
// ABOUTME: Opens the single SQLite file read-only or read-write and releases it on every path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Customer Store
//!
//! The store is a single `SQLite` file. [`CustomerStore`] holds only its
//! path: every gateway call opens its own connection, runs one statement
//! set, and releases the connection before returning. There is no pool and
//! no connection shared between requests; file-level locking is left to
//! `SQLite` itself.

/// Persistence gateway: CRUD statements against the customer table
pub mod customers;
/// Partial-update builder producing a single parameterized statement
pub mod update;

pub use customers::{CustomerLookup, MutationOutcome};
pub use update::{CustomerUpdate, SqlValue, TimestampedUpdate, UpdateColumn};

use crate::constants::store::{
    COLUMN_ANNUAL_SPEND, COLUMN_EMAIL, COLUMN_NAME, COLUMN_TIME, COLUMN_USER_ID, CUSTOMERS_TABLE,
};
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a connection is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Used by lookups; the store file is never written
    ReadOnly,
    /// Used by create, update, and delete
    ReadWrite,
}

impl AccessMode {
    /// Whether the connection must be opened read-only
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// An open connection scoped to a single gateway call
///
/// Call [`StoreConnection::release`] when done. Dropping the handle without
/// releasing it (an early `?` return) still closes the underlying file.
pub struct StoreConnection {
    inner: SqliteConnection,
    mode: AccessMode,
}

impl StoreConnection {
    /// Underlying connection for running statements
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.inner
    }

    /// Mode this connection was opened with
    #[must_use]
    pub const fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Close the connection; close failures are logged, not returned
    pub async fn release(self) {
        if let Err(e) = self.inner.close().await {
            warn!(error = %e, "Failed to close customer store connection cleanly");
        }
    }
}

/// Handle to the customer store file
#[derive(Debug, Clone)]
pub struct CustomerStore {
    path: PathBuf,
}

impl CustomerStore {
    /// Create a handle for the store at `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store file and customer table if they do not exist yet
    ///
    /// Run once at startup so that read-only requests against a fresh
    /// deployment see an empty table rather than a missing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be created,
    /// or if the schema statement fails
    pub async fn bootstrap(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create store directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let mut connection = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .connect()
            .await?;
        ensure_schema(&mut connection).await?;
        if let Err(e) = connection.close().await {
            warn!(error = %e, "Failed to close store connection after bootstrap");
        }

        info!(path = %self.path.display(), "Customer store ready");
        Ok(())
    }

    /// Open a connection for a single gateway call
    ///
    /// Read-write connections run the schema initializer before returning.
    ///
    /// # Errors
    ///
    /// Returns a database error if the file cannot be opened or the schema
    /// statement fails
    pub async fn open(&self, mode: AccessMode) -> AppResult<StoreConnection> {
        debug!(path = %self.path.display(), ?mode, "Opening customer store");

        let mut inner = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(mode.is_read_only())
            .create_if_missing(false)
            .connect()
            .await?;

        if !mode.is_read_only() {
            ensure_schema(&mut inner).await?;
        }

        Ok(StoreConnection { inner, mode })
    }
}

/// Storage initializer: create the customer table and lookup indexes if absent
///
/// Idempotent; safe to run on every read-write connection.
///
/// # Errors
///
/// Returns a database error if any statement fails
pub async fn ensure_schema(connection: &mut SqliteConnection) -> AppResult<()> {
    let create_table = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {CUSTOMERS_TABLE} (
            "{COLUMN_USER_ID}" TEXT PRIMARY KEY NOT NULL,
            "{COLUMN_NAME}" TEXT NOT NULL,
            "{COLUMN_EMAIL}" TEXT NOT NULL,
            "{COLUMN_ANNUAL_SPEND}" REAL NOT NULL,
            "{COLUMN_TIME}" INTEGER NOT NULL
        )
        "#
    );
    sqlx::query(&create_table).execute(&mut *connection).await?;

    for column in [COLUMN_NAME, COLUMN_EMAIL] {
        let create_index = format!(
            r#"CREATE INDEX IF NOT EXISTS idx_{CUSTOMERS_TABLE}_{column} ON {CUSTOMERS_TABLE} ("{column}")"#
        );
        sqlx::query(&create_index).execute(&mut *connection).await?;
    }

    Ok(())
}
