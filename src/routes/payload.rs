// ABOUTME: Typed request body for customer write endpoints
// ABOUTME: Parses JSON or form-encoded bodies into optional raw fields before normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::normalizer::{parse_amount, sanitize_number};
use axum::body::Bytes;
use http::{header::CONTENT_TYPE, HeaderMap};
use serde::Deserialize;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single field value as the client sent it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// String value (every form field arrives this way)
    Text(String),
    /// JSON number
    Number(serde_json::Number),
    /// JSON boolean
    Flag(bool),
}

impl RawField {
    /// The value as text, ready for normalization
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
            Self::Flag(flag) => flag.to_string(),
        }
    }

    /// The value as a finite amount
    ///
    /// JSON numbers are taken as parsed; text is sanitized first.
    #[must_use]
    pub fn into_amount(self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64().filter(|value| value.is_finite()),
            other => parse_amount(&sanitize_number(&other.into_text())),
        }
    }
}

/// Customer fields carried by a create or update body
///
/// Absent fields and JSON `null` are both `None`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    /// Raw `name`
    pub name: Option<RawField>,
    /// Raw `email`
    pub email: Option<RawField>,
    /// Raw `annualSpend`
    #[serde(rename = "annualSpend")]
    pub annual_spend: Option<RawField>,
}

impl CustomerFields {
    /// Parse a request body according to its content type
    ///
    /// Form-encoded bodies are read as such; anything else is read as JSON
    /// and must be an object. A blank body yields no fields.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the body cannot be parsed
    pub fn from_body(headers: &HeaderMap, body: &Bytes) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let parsed = if is_form(headers) {
            serde_urlencoded::from_bytes(body).map_err(|e| e.to_string())
        } else {
            Self::from_json(body)
        };

        parsed.map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))
    }

    fn from_json(body: &[u8]) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
        if !value.is_object() {
            return Err("expected a JSON object".to_owned());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Whether none of the updatable fields were supplied
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.annual_spend.is_none()
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with(FORM_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        headers
    }

    #[test]
    fn test_json_body_with_mixed_types() {
        let body = Bytes::from_static(br#"{"name":"Jane","annualSpend":1234.5,"email":null}"#);
        let fields = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap();

        assert_eq!(fields.name, Some(RawField::Text("Jane".to_owned())));
        assert_eq!(fields.email, None);
        assert_eq!(fields.annual_spend.unwrap().into_text(), "1234.5");
    }

    #[test]
    fn test_form_body() {
        let body = Bytes::from_static(b"name=Jane+Doe&email=jane%40x.com&annualSpend=10");
        let fields = CustomerFields::from_body(&form_headers(), &body).unwrap();

        assert_eq!(fields.name.unwrap().into_text(), "Jane Doe");
        assert_eq!(fields.email.unwrap().into_text(), "jane@x.com");
        assert_eq!(fields.annual_spend.unwrap().into_text(), "10");
    }

    #[test]
    fn test_blank_body_has_no_fields() {
        let body = Bytes::from_static(b"  \n");
        let fields = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = Bytes::from_static(br#"{"userId":"forged","time":1}"#);
        let fields = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_json_numbers_keep_their_value() {
        let body = Bytes::from_static(br#"{"annualSpend":1.5e300}"#);
        let fields = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap();

        assert_eq!(fields.annual_spend.unwrap().into_amount(), Some(1.5e300));
    }

    #[test]
    fn test_text_amounts_are_sanitized() {
        let amount = RawField::Text("$1,234.50".to_owned()).into_amount();
        assert_eq!(amount, Some(1234.5));

        assert_eq!(RawField::Text("lots".to_owned()).into_amount(), None);
        assert_eq!(RawField::Flag(true).into_amount(), None);
    }

    #[test]
    fn test_non_object_json_is_invalid_input() {
        let bodies: [&[u8]; 3] = [br#"["Arr","arr@x.com","5"]"#, b"\"Jane\"", b"42"];
        for raw in bodies {
            let body = Bytes::copy_from_slice(raw);
            let error = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap_err();

            assert_eq!(error.http_status(), 400);
            assert!(error.message.contains("expected a JSON object"));
        }
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let body = Bytes::from_static(b"{not json");
        let error = CustomerFields::from_body(&HeaderMap::new(), &body).unwrap_err();

        assert_eq!(error.http_status(), 400);
        assert!(error.message.starts_with("Invalid request body:"));
    }
}
