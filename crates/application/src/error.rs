//! Scenario error types

use thiserror::Error;

use bookcheck_domain::validate::ValidationError;

use crate::ports::HttpClientError;

/// Errors that abort a single scenario.
///
/// Every variant propagates to the suite runner and is recorded in the
/// per-scenario report; nothing is caught or retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// A response validator rejected the response.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// The response carried an unexpected status code.
    #[error("unexpected status: expected {expected}, got {actual}")]
    Status {
        /// The status code the scenario expects.
        expected: u16,
        /// The status code actually received.
        actual: u16,
    },

    /// The body failed schema decoding.
    #[error("failed to decode {what}: {message}")]
    Decode {
        /// What was being decoded (e.g. "booking").
        what: &'static str,
        /// The rendered decoder error.
        message: String,
    },

    /// A value-level check failed.
    #[error("check failed: {0}")]
    Check(String),
}

/// Result type alias for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
