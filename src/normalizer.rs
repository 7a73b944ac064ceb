// ABOUTME: Input normalization for customer fields before validation and storage
// ABOUTME: Trims, strips markup, HTML-escapes, clips by character count, and sanitizes numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input normalizer
//!
//! Pure transformations applied to raw request values. Nothing here rejects
//! input; emptiness and numeric checks happen in the route handlers after
//! normalization so that every violated rule can be reported at once.

use crate::constants::limits::{EMAIL_MAX_CHARS, NAME_MAX_CHARS};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Markup tag pattern: `<` through the next `>`, or to end of input when unterminated
///
/// A `<` followed by whitespace opens no tag and is left for escaping.
fn tag_regex() -> Option<&'static Regex> {
    static TAG_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TAG_REGEX
        .get_or_init(|| Regex::new(r"(?s)<[^\s>][^>]*(?:>|$)").ok())
        .as_ref()
}

/// Remove markup tags from `input`
#[must_use]
pub fn strip_tags(input: &str) -> Cow<'_, str> {
    match tag_regex() {
        Some(re) => re.replace_all(input, ""),
        None => Cow::Borrowed(input),
    }
}

/// Keep at most `max_chars` Unicode scalar values
#[must_use]
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => input[..byte_index].to_owned(),
        None => input.to_owned(),
    }
}

/// Full text pipeline: trim, strip tags, escape, then clip
///
/// Single quotes are written as `&#039;`, the decimal entity already present
/// in stored rows.
#[must_use]
pub fn normalize_text(raw: &str, max_chars: usize) -> String {
    let stripped = strip_tags(raw.trim());
    let escaped = html_escape::encode_quoted_attribute(&stripped).replace("&#x27;", "&#039;");
    truncate_chars(&escaped, max_chars)
}

/// Normalize a customer name (clipped to 100 characters)
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    normalize_text(raw, NAME_MAX_CHARS)
}

/// Normalize a customer email (clipped to 255 characters)
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    normalize_text(raw, EMAIL_MAX_CHARS)
}

/// Strip everything but digits, one leading sign, and one decimal point
///
/// A `+` or `-` survives only as the first kept character; only the first
/// `.` survives.
#[must_use]
pub fn sanitize_number(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut seen_point = false;

    for ch in raw.chars() {
        match ch {
            '0'..='9' => output.push(ch),
            '+' | '-' if output.is_empty() => output.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                output.push(ch);
            }
            _ => {}
        }
    }

    output
}

/// Parse a sanitized numeric string, accepting only finite values
#[must_use]
pub fn parse_amount(sanitized: &str) -> Option<f64> {
    sanitized.parse::<f64>().ok().filter(|value| value.is_finite())
}
