// ABOUTME: Route handlers for the customer records API
// ABOUTME: Normalizes and validates input, calls the gateway, and shapes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer routes
//!
//! Each handler maps one verb and path to exactly one gateway call. Write
//! paths normalize every supplied field before validating it, so the rules
//! are checked against what would actually be stored.

use super::payload::{CustomerFields, RawField};
use super::welcome::handle_options;
use crate::{
    constants::messages,
    database::{CustomerLookup, CustomerStore, CustomerUpdate, MutationOutcome},
    errors::{AppError, AppResult},
    models::Customer,
    normalizer::{normalize_email, normalize_name},
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Body for a single customer
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// Always `true`
    pub success: bool,
    /// The stored record
    pub data: Customer,
}

/// Body for a name or email lookup
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    /// Always `true`
    pub success: bool,
    /// Every matching record
    pub data: Vec<Customer>,
}

/// Body returned after a create
#[derive(Debug, Serialize)]
pub struct CustomerCreatedResponse {
    /// Always `true`
    pub success: bool,
    /// Human-readable outcome
    pub message: &'static str,
    /// The record as stored
    pub data: Customer,
}

/// Body returned after an update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdatedResponse {
    /// Always `true`
    pub success: bool,
    /// Human-readable outcome
    pub message: &'static str,
    /// Bound parameters in assignment order, `:time` last
    pub updated_fields: Vec<&'static str>,
}

/// Body returned after a delete
#[derive(Debug, Serialize)]
pub struct CustomerDeletedResponse {
    /// Always `true`
    pub success: bool,
    /// Human-readable outcome
    pub message: &'static str,
    /// Id of the removed record
    pub id: String,
}

/// Query string accepted by the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    /// Exact name to match
    pub name: Option<String>,
    /// Exact email to match
    pub email: Option<String>,
}

impl CustomerQuery {
    /// Resolve to exactly one lookup key
    ///
    /// Values are normalized the way stored fields are; a value that
    /// normalizes to nothing counts as absent.
    ///
    /// # Errors
    ///
    /// Returns 400 when neither or both keys are present
    pub fn into_lookup(self) -> AppResult<CustomerLookup> {
        let name = self.name.as_deref().map(normalize_name).filter(|v| !v.is_empty());
        let email = self.email.as_deref().map(normalize_email).filter(|v| !v.is_empty());

        match (name, email) {
            (Some(name), None) => Ok(CustomerLookup::Name(name)),
            (None, Some(email)) => Ok(CustomerLookup::Email(email)),
            (Some(_), Some(_)) => Err(AppError::invalid_input(
                messages::CONFLICTING_QUERY_PARAMETERS,
            )),
            (None, None) => Err(AppError::missing_field(messages::MISSING_QUERY_PARAMETER)),
        }
    }
}

fn text_of(field: Option<RawField>) -> String {
    field.map(RawField::into_text).unwrap_or_default()
}

/// Extract the `:id` segment, reporting a malformed one as invalid input
fn customer_id(path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Normalize a create body and check every rule, reporting all violations
///
/// # Errors
///
/// Returns a validation error listing each violated rule
pub fn validate_new_customer(fields: CustomerFields) -> AppResult<Customer> {
    let name = normalize_name(&text_of(fields.name));
    let email = normalize_email(&text_of(fields.email));
    let annual_spend = fields.annual_spend.and_then(RawField::into_amount);

    let mut violations = Vec::new();
    if name.is_empty() {
        violations.push(messages::INVALID_NAME.to_owned());
    }
    if email.is_empty() {
        violations.push(messages::INVALID_EMAIL.to_owned());
    }

    match annual_spend {
        Some(annual_spend) if violations.is_empty() => Ok(Customer {
            user_id: Uuid::new_v4().to_string(),
            name,
            email,
            annual_spend,
            time: Utc::now().timestamp(),
        }),
        Some(_) => Err(AppError::validation(violations)),
        None => {
            violations.push(messages::INVALID_ANNUAL_SPEND.to_owned());
            Err(AppError::validation(violations))
        }
    }
}

/// Normalize the supplied fields of an update body into assignments
///
/// # Errors
///
/// Returns 400 when no field was supplied or a supplied field normalizes to
/// an unusable value
pub fn build_update(fields: CustomerFields) -> AppResult<CustomerUpdate> {
    if fields.is_empty() {
        return Err(AppError::invalid_input(messages::NO_FIELDS_TO_UPDATE));
    }

    let mut update = CustomerUpdate::new();
    if let Some(raw) = fields.name {
        let name = normalize_name(&raw.into_text());
        if name.is_empty() {
            return Err(AppError::invalid_input(messages::INVALID_NAME));
        }
        update.name(name);
    }
    if let Some(raw) = fields.email {
        let email = normalize_email(&raw.into_text());
        if email.is_empty() {
            return Err(AppError::invalid_input(messages::INVALID_EMAIL));
        }
        update.email(email);
    }
    if let Some(raw) = fields.annual_spend {
        let annual_spend = raw
            .into_amount()
            .ok_or_else(|| AppError::invalid_input(messages::INVALID_ANNUAL_SPEND))?;
        update.annual_spend(annual_spend);
    }

    Ok(update)
}

/// Customer routes implementation
pub struct CustomerRoutes;

impl CustomerRoutes {
    /// Create all customer routes
    pub fn routes(store: Arc<CustomerStore>) -> Router {
        Router::new()
            .route(
                "/customers",
                get(Self::handle_list_customers)
                    .post(Self::handle_create_customer)
                    .options(handle_options),
            )
            .route(
                "/customers/:id",
                get(Self::handle_get_customer)
                    .put(Self::handle_update_customer)
                    .delete(Self::handle_delete_customer)
                    .options(handle_options),
            )
            .with_state(store)
    }

    /// POST /customers
    async fn handle_create_customer(
        State(store): State<Arc<CustomerStore>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let fields = CustomerFields::from_body(&headers, &body)?;
        let customer = validate_new_customer(fields)?;

        let stored = store.add_customer(&customer).await?;
        info!(user_id = %stored.user_id, "Customer created");

        Ok((
            StatusCode::OK,
            Json(CustomerCreatedResponse {
                success: true,
                message: messages::CUSTOMER_CREATED,
                data: stored,
            }),
        )
            .into_response())
    }

    /// GET /customers/:id
    async fn handle_get_customer(
        State(store): State<Arc<CustomerStore>>,
        path: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = customer_id(path)?;
        let customer = store
            .get_customer(&id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::CUSTOMER_NOT_FOUND))?;

        Ok((
            StatusCode::OK,
            Json(CustomerResponse {
                success: true,
                data: customer,
            }),
        )
            .into_response())
    }

    /// GET /customers?name=... or GET /customers?email=...
    async fn handle_list_customers(
        State(store): State<Arc<CustomerStore>>,
        query: Result<Query<CustomerQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) =
            query.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        let lookup = query.into_lookup()?;

        let customers = store.get_customers_by(&lookup).await?;
        if customers.is_empty() {
            return Err(AppError::not_found(messages::NO_CUSTOMERS_FOUND));
        }

        Ok((
            StatusCode::OK,
            Json(CustomerListResponse {
                success: true,
                data: customers,
            }),
        )
            .into_response())
    }

    /// PUT /customers/:id
    async fn handle_update_customer(
        State(store): State<Arc<CustomerStore>>,
        path: Result<Path<String>, PathRejection>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let id = customer_id(path)?;
        let fields = CustomerFields::from_body(&headers, &body)?;
        let update = build_update(fields)?
            .with_timestamp(Utc::now().timestamp())
            .ok_or_else(|| AppError::invalid_input(messages::NO_FIELDS_TO_UPDATE))?;

        if store.update_customer(&id, &update).await?.is_not_found() {
            return Err(AppError::not_found(messages::CUSTOMER_NOT_FOUND));
        }
        info!(user_id = %id, "Customer updated");

        Ok((
            StatusCode::OK,
            Json(CustomerUpdatedResponse {
                success: true,
                message: messages::CUSTOMER_UPDATED,
                updated_fields: update.parameter_names(),
            }),
        )
            .into_response())
    }

    /// DELETE /customers/:id
    async fn handle_delete_customer(
        State(store): State<Arc<CustomerStore>>,
        path: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = customer_id(path)?;
        match store.delete_customer(&id).await? {
            MutationOutcome::NotFound => Err(AppError::not_found(messages::CUSTOMER_NOT_FOUND)),
            MutationOutcome::Applied(_) => {
                info!(user_id = %id, "Customer deleted");
                Ok((
                    StatusCode::OK,
                    Json(CustomerDeletedResponse {
                        success: true,
                        message: messages::CUSTOMER_DELETED,
                        id,
                    }),
                )
                    .into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Option<RawField> {
        Some(RawField::Text(value.to_owned()))
    }

    #[test]
    fn test_create_reports_every_violation() {
        let error = validate_new_customer(CustomerFields::default()).unwrap_err();

        assert_eq!(
            error.details,
            vec![
                messages::INVALID_NAME.to_owned(),
                messages::INVALID_EMAIL.to_owned(),
                messages::INVALID_ANNUAL_SPEND.to_owned(),
            ]
        );
    }

    #[test]
    fn test_create_rejects_markup_only_name() {
        let fields = CustomerFields {
            name: text("<b></b>"),
            email: text("jane@x.com"),
            annual_spend: text("10"),
        };
        let error = validate_new_customer(fields).unwrap_err();

        assert_eq!(error.details, vec![messages::INVALID_NAME.to_owned()]);
    }

    #[test]
    fn test_create_accepts_zero_spend() {
        let fields = CustomerFields {
            name: text("Jane Doe"),
            email: text("jane@x.com"),
            annual_spend: text("0"),
        };
        let customer = validate_new_customer(fields).unwrap();

        assert!(customer.annual_spend.abs() < f64::EPSILON);
        assert!(Uuid::parse_str(&customer.user_id).is_ok());
    }

    #[test]
    fn test_create_keeps_json_number_exponent() {
        let fields = CustomerFields {
            name: text("N"),
            email: text("e@x"),
            annual_spend: Some(RawField::Number(
                serde_json::Number::from_f64(1.5e300).unwrap(),
            )),
        };
        let customer = validate_new_customer(fields).unwrap();

        assert!((customer.annual_spend - 1.5e300).abs() < 1e285);
    }

    #[test]
    fn test_update_keeps_only_supplied_fields() {
        let fields = CustomerFields {
            annual_spend: text("$2,000"),
            ..CustomerFields::default()
        };
        let update = build_update(fields).unwrap().with_timestamp(5).unwrap();

        assert_eq!(update.parameter_names(), vec![":annualSpend", ":time"]);
    }

    #[test]
    fn test_update_rejects_empty_and_non_numeric() {
        let empty = build_update(CustomerFields::default()).unwrap_err();
        assert_eq!(empty.message, messages::NO_FIELDS_TO_UPDATE);

        let fields = CustomerFields {
            annual_spend: text("lots"),
            ..CustomerFields::default()
        };
        let error = build_update(fields).unwrap_err();
        assert_eq!(error.message, messages::INVALID_ANNUAL_SPEND);
    }

    #[test]
    fn test_query_requires_exactly_one_key() {
        let neither = CustomerQuery::default().into_lookup().unwrap_err();
        assert_eq!(neither.message, messages::MISSING_QUERY_PARAMETER);

        let both = CustomerQuery {
            name: Some("Jane".to_owned()),
            email: Some("jane@x.com".to_owned()),
        }
        .into_lookup()
        .unwrap_err();
        assert_eq!(both.message, messages::CONFLICTING_QUERY_PARAMETERS);

        let blank_name = CustomerQuery {
            name: Some(String::new()),
            email: Some("jane@x.com".to_owned()),
        }
        .into_lookup()
        .unwrap();
        assert_eq!(blank_name, CustomerLookup::Email("jane@x.com".to_owned()));
    }
}
