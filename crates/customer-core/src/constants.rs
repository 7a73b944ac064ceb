// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field limits, store layout names, and user-facing response messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants grouped by domain rather than kept in one flat list.

/// Limits applied to incoming customer fields after normalization
pub mod limits {
    /// Maximum length of a customer name, in characters
    pub const NAME_MAX_CHARS: usize = 100;
    /// Maximum length of a customer email, in characters
    pub const EMAIL_MAX_CHARS: usize = 255;
}

/// Store layout: table and column names
pub mod store {
    /// The single table holding customer rows
    pub const CUSTOMERS_TABLE: &str = "customers";
    /// Primary key column
    pub const COLUMN_USER_ID: &str = "userId";
    /// Name column
    pub const COLUMN_NAME: &str = "name";
    /// Email column
    pub const COLUMN_EMAIL: &str = "email";
    /// Annual spend column
    pub const COLUMN_ANNUAL_SPEND: &str = "annualSpend";
    /// Last-write timestamp column
    pub const COLUMN_TIME: &str = "time";
}

/// Messages returned in response bodies
pub mod messages {
    /// Root route greeting
    pub const WELCOME: &str = "Welcome to our customer API";
    /// Creation succeeded
    pub const CUSTOMER_CREATED: &str = "Customer created successfully";
    /// Update succeeded
    pub const CUSTOMER_UPDATED: &str = "Customer updated successfully";
    /// Delete succeeded
    pub const CUSTOMER_DELETED: &str = "Customer deleted successfully";
    /// Single-customer lookup or mutation matched nothing
    pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
    /// Name/email lookup matched nothing
    pub const NO_CUSTOMERS_FOUND: &str = "No customers found";
    /// Neither `name` nor `email` supplied to the list endpoint
    pub const MISSING_QUERY_PARAMETER: &str = "Missing query parameter";
    /// Both `name` and `email` supplied to the list endpoint
    pub const CONFLICTING_QUERY_PARAMETERS: &str = "Conflicting query parameters";
    /// Update body carried none of the updatable fields
    pub const NO_FIELDS_TO_UPDATE: &str = "No valid fields provided for update";
    /// Path matched no route
    pub const ROUTE_NOT_FOUND: &str = "Not found";
    /// Validation rule for `name`
    pub const INVALID_NAME: &str = "\"name\" should be a non-empty string.";
    /// Validation rule for `email`
    pub const INVALID_EMAIL: &str = "\"email\" should be a non-empty string.";
    /// Validation rule for `annualSpend`
    pub const INVALID_ANNUAL_SPEND: &str = "\"annualSpend\" should be a non-empty numeric value.";
}
