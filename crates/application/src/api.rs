//! Booking API surface
//!
//! Builds request specifications for the booking API endpoints and
//! executes them through the [`HttpClient`] port. Requests are
//! GET-only and default to `Accept: application/json`; the XML-flavored
//! fetch overrides the accept header per call.

use std::sync::Arc;

use chrono::NaiveDate;

use bookcheck_domain::{RequestSpec, ResponseSpec};

use crate::ports::{HttpClient, HttpClientError};

/// The upstream booking API host.
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_XML: &str = "application/xml";

/// Optional query-parameter filter for the booking collection.
///
/// The upstream API also filters on `checkin`/`checkout`; those fields
/// are carried here for completeness even though no suite scenario
/// exercises them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Match bookings with this guest first name.
    pub firstname: Option<String>,
    /// Match bookings with this guest last name.
    pub lastname: Option<String>,
    /// Match bookings checking in on or after this date.
    pub checkin: Option<NaiveDate>,
    /// Match bookings checking out on or before this date.
    pub checkout: Option<NaiveDate>,
}

impl BookingFilter {
    /// An empty filter: list every booking.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter by first name only.
    #[must_use]
    pub fn by_firstname(firstname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            ..Self::default()
        }
    }

    /// Filter by last name only.
    #[must_use]
    pub fn by_lastname(lastname: impl Into<String>) -> Self {
        Self {
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }

    /// Filter by both name fields.
    #[must_use]
    pub fn by_full_name(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }

    fn apply(&self, mut request: RequestSpec) -> RequestSpec {
        if let Some(firstname) = &self.firstname {
            request = request.with_query("firstname", firstname);
        }
        if let Some(lastname) = &self.lastname {
            request = request.with_query("lastname", lastname);
        }
        if let Some(checkin) = self.checkin {
            request = request.with_query("checkin", checkin.to_string());
        }
        if let Some(checkout) = self.checkout {
            request = request.with_query("checkout", checkout.to_string());
        }
        request
    }
}

/// Client for the booking API, generic over the HTTP transport.
pub struct BookingApi<C: HttpClient> {
    client: Arc<C>,
    base_url: String,
}

impl<C: HttpClient> BookingApi<C> {
    /// Creates an API client against the default upstream host.
    #[must_use]
    pub fn new(client: Arc<C>) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Creates an API client against the given base URL.
    #[must_use]
    pub fn with_base_url(client: Arc<C>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /ping`: the liveness endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn ping(&self) -> Result<ResponseSpec, HttpClientError> {
        let request = RequestSpec::get(self.url_for("/ping")).with_header("Accept", ACCEPT_JSON);
        self.client.execute(&request).await
    }

    /// `GET /booking`: the collection listing, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn booking_ids(
        &self,
        filter: &BookingFilter,
    ) -> Result<ResponseSpec, HttpClientError> {
        let request = filter
            .apply(RequestSpec::get(self.url_for("/booking")))
            .with_header("Accept", ACCEPT_JSON);
        self.client.execute(&request).await
    }

    /// `GET /booking/{id}`: one booking, JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn booking(&self, id: u32) -> Result<ResponseSpec, HttpClientError> {
        let request = RequestSpec::get(self.url_for(&format!("/booking/{id}")))
            .with_header("Accept", ACCEPT_JSON);
        self.client.execute(&request).await
    }

    /// `GET /booking/{id}`: one booking, requesting the XML-flavored
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn booking_xml(&self, id: u32) -> Result<ResponseSpec, HttpClientError> {
        let request = RequestSpec::get(self.url_for(&format!("/booking/{id}")))
            .with_header("Accept", ACCEPT_XML);
        self.client.execute(&request).await
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
