// ABOUTME: Customer persistence gateway with parameterized CRUD statements
// ABOUTME: Maps rows to Customer records and zero-row mutations to a not-found outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::update::{SqlValue, TimestampedUpdate};
use super::{AccessMode, CustomerStore};
use crate::constants::store::{
    COLUMN_ANNUAL_SPEND, COLUMN_EMAIL, COLUMN_NAME, COLUMN_TIME, COLUMN_USER_ID, CUSTOMERS_TABLE,
};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::Customer;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::time::Instant;
use tracing::debug;

/// Secondary lookup key for listing customers; exactly one is ever used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLookup {
    /// Exact match on the normalized name
    Name(String),
    /// Exact match on the normalized email
    Email(String),
}

impl CustomerLookup {
    const fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => COLUMN_NAME,
            Self::Email(_) => COLUMN_EMAIL,
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Name(value) | Self::Email(value) => value,
        }
    }
}

/// Outcome of a mutation keyed by `userId`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The statement touched this many rows
    Applied(u64),
    /// No row carried the requested id
    NotFound,
}

impl MutationOutcome {
    /// Classify a statement's affected-row count
    #[must_use]
    pub const fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied(rows)
        }
    }

    /// Whether no row matched
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

fn select_columns() -> String {
    format!(
        r#""{COLUMN_USER_ID}", "{COLUMN_NAME}", "{COLUMN_EMAIL}", "{COLUMN_ANNUAL_SPEND}", "{COLUMN_TIME}""#
    )
}

fn row_to_customer(row: &SqliteRow) -> AppResult<Customer> {
    Ok(Customer {
        user_id: row.try_get(COLUMN_USER_ID)?,
        name: row.try_get(COLUMN_NAME)?,
        email: row.try_get(COLUMN_EMAIL)?,
        annual_spend: row.try_get(COLUMN_ANNUAL_SPEND)?,
        time: row.try_get(COLUMN_TIME)?,
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl CustomerStore {
    /// Insert a fully normalized customer
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened or the insert fails
    pub async fn add_customer(&self, customer: &Customer) -> AppResult<Customer> {
        let started = Instant::now();
        let mut store = self.open(AccessMode::ReadWrite).await?;

        let sql = format!(
            "INSERT INTO {CUSTOMERS_TABLE} ({}) VALUES (?1, ?2, ?3, ?4, ?5)",
            select_columns()
        );
        let result = sqlx::query(&sql)
            .bind(customer.user_id.as_str())
            .bind(customer.name.as_str())
            .bind(customer.email.as_str())
            .bind(customer.annual_spend)
            .bind(customer.time)
            .execute(store.connection())
            .await;
        store.release().await;

        AppLogger::log_database_operation(
            "insert",
            CUSTOMERS_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        result?;

        debug!(user_id = %customer.user_id, "Customer inserted");
        Ok(customer.clone())
    }

    /// Fetch a customer by id; `None` when absent
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened or the query fails
    pub async fn get_customer(&self, user_id: &str) -> AppResult<Option<Customer>> {
        let started = Instant::now();
        let mut store = self.open(AccessMode::ReadOnly).await?;

        let sql = format!(
            r#"SELECT {} FROM {CUSTOMERS_TABLE} WHERE "{COLUMN_USER_ID}" = ?1"#,
            select_columns()
        );
        let row = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(store.connection())
            .await;
        store.release().await;

        AppLogger::log_database_operation(
            "select",
            CUSTOMERS_TABLE,
            row.is_ok(),
            elapsed_ms(started),
        );
        let row = row?;

        debug!(user_id, found = row.is_some(), "Customer lookup by id");
        row.as_ref().map(row_to_customer).transpose()
    }

    /// List every customer whose name or email exactly matches `lookup`
    ///
    /// Rows come back oldest write first, ties broken by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened or the query fails
    pub async fn get_customers_by(&self, lookup: &CustomerLookup) -> AppResult<Vec<Customer>> {
        let started = Instant::now();
        let mut store = self.open(AccessMode::ReadOnly).await?;

        let sql = format!(
            r#"SELECT {} FROM {CUSTOMERS_TABLE} WHERE "{}" = ?1 ORDER BY "{COLUMN_TIME}", "{COLUMN_USER_ID}""#,
            select_columns(),
            lookup.column()
        );
        let rows = sqlx::query(&sql)
            .bind(lookup.value())
            .fetch_all(store.connection())
            .await;
        store.release().await;

        AppLogger::log_database_operation(
            "select",
            CUSTOMERS_TABLE,
            rows.is_ok(),
            elapsed_ms(started),
        );
        let rows = rows?;

        debug!(
            column = lookup.column(),
            matches = rows.len(),
            "Customer lookup by field"
        );
        rows.iter().map(row_to_customer).collect()
    }

    /// Apply a partial update to the customer with `user_id`
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened or the statement fails
    pub async fn update_customer(
        &self,
        user_id: &str,
        update: &TimestampedUpdate,
    ) -> AppResult<MutationOutcome> {
        let started = Instant::now();
        let mut store = self.open(AccessMode::ReadWrite).await?;

        let sql = update.to_sql();
        let mut query = sqlx::query(&sql);
        for (_, value) in update.assignments() {
            query = match value {
                SqlValue::Text(text) => query.bind(text.as_str()),
                SqlValue::Real(real) => query.bind(*real),
                SqlValue::Integer(integer) => query.bind(*integer),
            };
        }
        let result = query.bind(user_id).execute(store.connection()).await;
        store.release().await;

        AppLogger::log_database_operation(
            "update",
            CUSTOMERS_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        let outcome = MutationOutcome::from_rows_affected(result?.rows_affected());

        debug!(
            user_id,
            ?outcome,
            fields = ?update.parameter_names(),
            "Customer update"
        );
        Ok(outcome)
    }

    /// Delete the customer with `user_id`
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened or the statement fails
    pub async fn delete_customer(&self, user_id: &str) -> AppResult<MutationOutcome> {
        let started = Instant::now();
        let mut store = self.open(AccessMode::ReadWrite).await?;

        let sql = format!(r#"DELETE FROM {CUSTOMERS_TABLE} WHERE "{COLUMN_USER_ID}" = ?1"#);
        let result = sqlx::query(&sql)
            .bind(user_id)
            .execute(store.connection())
            .await;
        store.release().await;

        AppLogger::log_database_operation(
            "delete",
            CUSTOMERS_TABLE,
            result.is_ok(),
            elapsed_ms(started),
        );
        let outcome = MutationOutcome::from_rows_affected(result?.rows_affected());

        debug!(user_id, ?outcome, "Customer delete");
        Ok(outcome)
    }
}
