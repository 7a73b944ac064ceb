// ABOUTME: Core data model for customer records
// ABOUTME: Defines the Customer row exactly as stored and returned in response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// A stored customer record
///
/// Field names serialize in camelCase (`userId`, `annualSpend`) so that the
/// JSON shape matches the column names of the `customers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-generated UUID v4, immutable once assigned
    pub user_id: String,
    /// Normalized name, at most 100 characters
    pub name: String,
    /// Normalized email, at most 255 characters; not checked for RFC compliance
    pub email: String,
    /// Sanitized annual spend
    pub annual_spend: f64,
    /// Unix timestamp of the most recent write
    pub time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_serializes_camel_case() {
        let customer = Customer {
            user_id: "2f1c".to_owned(),
            name: "Jane Doe".to_owned(),
            email: "jane@x.com".to_owned(),
            annual_spend: 1234.5,
            time: 1_700_000_000,
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["userId"], "2f1c");
        assert_eq!(value["annualSpend"], 1234.5);
        assert_eq!(value["time"], 1_700_000_000);
        assert!(value.get("user_id").is_none());
    }
}
