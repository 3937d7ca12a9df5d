//! HTTP response type
//!
//! Contains the response representation shared by the validators and
//! the scenario layer: status code, headers, text body, and timing.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

/// An HTTP response as observed by the suite.
///
/// Bodies from the booking API are always text (JSON or the
/// HTML-flavored XML representation), so the body is stored as a
/// string and decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as received.
    pub headers: HashMap<String, String>,
    /// Response body text.
    pub body: String,
    /// Time from request start to the body being fully read.
    pub duration: Duration,
    /// Content-Type header value (extracted for convenience).
    pub content_type: Option<String>,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: impl Into<String>,
        duration: Duration,
    ) -> Self {
        let content_type = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.clone());

        Self {
            status,
            headers,
            body: body.into(),
            duration,
            content_type,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Attempts to parse the body as arbitrary JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the body does not match
    /// the target schema.
    pub fn decode_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
