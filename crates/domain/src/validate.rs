//! Response validators
//!
//! Pure predicates over [`ResponseSpec`] values. Each validator either
//! returns `Ok(())` or a [`ValidationError`] carrying a diagnostic; no
//! side effects, no retries, no logging.

use thiserror::Error;

use crate::response::ResponseSpec;

/// The exact content-type the booking API uses for JSON responses.
///
/// The comparison is against the full literal, charset included. The
/// upstream API is consistent about it, and a prefix match would hide
/// regressions in the charset suffix.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The exact content-type the booking API uses for its XML-flavored
/// responses. The upstream API labels them `text/html`; that quirk is
/// part of the contract and is matched as-is.
pub const XML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Errors produced by the response validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The content-type header does not equal the expected literal.
    #[error(
        "content-type mismatch: expected {expected:?}, got {}",
        .actual.as_deref().unwrap_or("<missing>")
    )]
    ContentTypeMismatch {
        /// The literal header value the validator expects.
        expected: &'static str,
        /// The header value actually received, if any.
        actual: Option<String>,
    },

    /// The decoded body is not the expected container kind.
    #[error("shape mismatch: expected {expected}, body is {actual}")]
    ShapeMismatch {
        /// The container kind the validator expects.
        expected: &'static str,
        /// A short description of what the body actually is.
        actual: String,
    },
}

/// Checks that the response declares the exact JSON content-type.
///
/// # Errors
///
/// Returns [`ValidationError::ContentTypeMismatch`] unless the
/// `content-type` header equals [`JSON_CONTENT_TYPE`] exactly.
pub fn is_json(response: &ResponseSpec) -> Result<(), ValidationError> {
    expect_content_type(response, JSON_CONTENT_TYPE)
}

/// Checks that the response declares the content-type the booking API
/// uses for XML-flavored bodies.
///
/// # Errors
///
/// Returns [`ValidationError::ContentTypeMismatch`] unless the
/// `content-type` header equals [`XML_CONTENT_TYPE`] exactly.
pub fn is_xml(response: &ResponseSpec) -> Result<(), ValidationError> {
    expect_content_type(response, XML_CONTENT_TYPE)
}

/// Checks that the response body decodes as a JSON array.
///
/// # Errors
///
/// Returns [`ValidationError::ShapeMismatch`] if the body is any other
/// JSON kind, or is not decodable as JSON at all.
pub fn is_array(response: &ResponseSpec) -> Result<(), ValidationError> {
    match response.body_as_json() {
        Some(value) if value.is_array() => Ok(()),
        Some(value) => Err(ValidationError::ShapeMismatch {
            expected: "array",
            actual: json_kind(&value).to_string(),
        }),
        None => Err(ValidationError::ShapeMismatch {
            expected: "array",
            actual: "undecodable text".to_string(),
        }),
    }
}

fn expect_content_type(
    response: &ResponseSpec,
    expected: &'static str,
) -> Result<(), ValidationError> {
    match response.get_header("content-type") {
        Some(actual) if actual == expected => Ok(()),
        other => Err(ValidationError::ContentTypeMismatch {
            expected,
            actual: other.cloned(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
