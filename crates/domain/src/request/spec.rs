//! Request specification type

use super::{Header, Headers, HttpMethod, QueryParam, QueryParams};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Complete specification for an HTTP request.
///
/// Specs are built programmatically by the scenario layer and handed to
/// an HTTP client adapter for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL without query string
    pub url: String,
    /// Query parameters, appended to the URL at execution time
    pub query: QueryParams,
    /// HTTP headers
    pub headers: Headers,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: QueryParams::new(),
            headers: Headers::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Adds a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.add(QueryParam::new(key, value));
        self
    }

    /// Sets a header, replacing any existing header of the same name
    /// (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the per-request timeout (builder pattern).
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Appends an already-built header (builder pattern).
    #[must_use]
    pub fn with_raw_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }
}
