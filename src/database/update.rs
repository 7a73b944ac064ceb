// ABOUTME: Partial-update builder for customer rows
// ABOUTME: Accumulates (column, typed value) pairs and renders one placeholder-only UPDATE
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::store::{
    COLUMN_ANNUAL_SPEND, COLUMN_EMAIL, COLUMN_NAME, COLUMN_TIME, COLUMN_USER_ID, CUSTOMERS_TABLE,
};

/// Columns an update may assign; the set is closed so no caller text reaches SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateColumn {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `annualSpend`
    AnnualSpend,
    /// `time`, only ever set by [`CustomerUpdate::with_timestamp`]
    Time,
}

impl UpdateColumn {
    /// Column name in the customer table
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => COLUMN_NAME,
            Self::Email => COLUMN_EMAIL,
            Self::AnnualSpend => COLUMN_ANNUAL_SPEND,
            Self::Time => COLUMN_TIME,
        }
    }

    /// Parameter label reported back to clients in `updatedFields`
    #[must_use]
    pub const fn parameter(self) -> &'static str {
        match self {
            Self::Name => ":name",
            Self::Email => ":email",
            Self::AnnualSpend => ":annualSpend",
            Self::Time => ":time",
        }
    }
}

/// A typed value bound to a placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// TEXT
    Text(String),
    /// REAL
    Real(f64),
    /// INTEGER
    Integer(i64),
}

/// Assignments collected from the fields a caller actually supplied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    assignments: Vec<(UpdateColumn, SqlValue)>,
}

impl CustomerUpdate {
    /// Start an empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a normalized name
    pub fn name(&mut self, name: String) -> &mut Self {
        self.assign(UpdateColumn::Name, SqlValue::Text(name))
    }

    /// Assign a normalized email
    pub fn email(&mut self, email: String) -> &mut Self {
        self.assign(UpdateColumn::Email, SqlValue::Text(email))
    }

    /// Assign a sanitized annual spend
    pub fn annual_spend(&mut self, annual_spend: f64) -> &mut Self {
        self.assign(UpdateColumn::AnnualSpend, SqlValue::Real(annual_spend))
    }

    /// Whether no field has been assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Append the `time` refresh, yielding an executable update
    ///
    /// Returns `None` when no field was assigned: an update that would only
    /// touch `time` is never issued.
    #[must_use]
    pub fn with_timestamp(mut self, time: i64) -> Option<TimestampedUpdate> {
        if self.is_empty() {
            return None;
        }
        self.assign(UpdateColumn::Time, SqlValue::Integer(time));
        Some(TimestampedUpdate {
            assignments: self.assignments,
        })
    }

    /// Set `column`, replacing any earlier value for it while keeping its position
    fn assign(&mut self, column: UpdateColumn, value: SqlValue) -> &mut Self {
        match self.assignments.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((column, value)),
        }
        self
    }
}

/// A non-empty update whose last assignment refreshes `time`
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedUpdate {
    assignments: Vec<(UpdateColumn, SqlValue)>,
}

impl TimestampedUpdate {
    /// Assignments in statement order; bind values in this order, then the id
    #[must_use]
    pub fn assignments(&self) -> &[(UpdateColumn, SqlValue)] {
        &self.assignments
    }

    /// Parameter labels in statement order, e.g. `[":name", ":time"]`
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.assignments
            .iter()
            .map(|(column, _)| column.parameter())
            .collect()
    }

    /// Render the statement with numbered placeholders only
    #[must_use]
    pub fn to_sql(&self) -> String {
        let set_clause = self
            .assignments
            .iter()
            .enumerate()
            .map(|(index, (column, _))| format!("\"{}\" = ?{}", column.column(), index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_placeholder = self.assignments.len() + 1;

        format!(
            "UPDATE {CUSTOMERS_TABLE} SET {set_clause} WHERE \"{COLUMN_USER_ID}\" = ?{id_placeholder}"
        )
    }
}
