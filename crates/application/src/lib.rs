//! Bookcheck Application - Scenario layer
//!
//! Builds booking API requests, executes them through the
//! [`ports::HttpClient`] port, and runs the end-to-end scenario suite
//! against the responses.

pub mod api;
pub mod error;
pub mod ports;
pub mod scenarios;

pub use api::{BookingApi, BookingFilter, DEFAULT_BASE_URL};
pub use error::{ScenarioError, ScenarioResult};
pub use ports::{HttpClient, HttpClientError};
pub use scenarios::{NameFilter, SuiteFixtures, SuiteRunner};
