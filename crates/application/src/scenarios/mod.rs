//! End-to-end scenarios
//!
//! Each scenario is an independent unit: it issues its HTTP calls,
//! applies validators, and asserts on the decoded body. Data captured
//! by an earlier scenario travels to later scenarios through
//! [`SuiteFixtures`], owned by the runner; there is no ambient shared
//! state, and the runner executes scenarios sequentially in
//! declaration order.

mod booking_ids;
mod booking_json;
mod booking_xml;
mod filter_by_name;
mod healthcheck;

pub use filter_by_name::NameFilter;

use std::time::Instant;

use serde::de::DeserializeOwned;

use bookcheck_domain::{Booking, BookingIdSummary, ResponseSpec, ScenarioReport, SuiteReport};

use crate::api::BookingApi;
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

/// Data captured by earlier scenarios for later ones.
///
/// Written once by the producing scenario, read by its dependents;
/// replaces the global fixture variables of a conventional test file.
#[derive(Debug, Clone, Default)]
pub struct SuiteFixtures {
    /// The ids returned by the listing scenario, if it completed.
    pub booking_ids: Option<Vec<BookingIdSummary>>,
    /// The booking fetched by the JSON scenario, used as the reference
    /// record for the filter scenarios.
    pub reference: Option<Booking>,
}

impl SuiteFixtures {
    /// The id the single-booking scenarios target.
    #[must_use]
    pub fn first_booking_id(&self) -> Option<u32> {
        self.booking_ids
            .as_ref()
            .and_then(|ids| ids.first())
            .map(|summary| summary.bookingid)
    }
}

/// Runs the scenario suite in declaration order, single-flight.
///
/// An assertion failure aborts only its own scenario. Scenarios whose
/// prerequisite fixture is missing are reported as skipped.
pub struct SuiteRunner<C: HttpClient> {
    api: BookingApi<C>,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Creates a runner over the given API client.
    #[must_use]
    pub const fn new(api: BookingApi<C>) -> Self {
        Self { api }
    }

    /// Executes every scenario and returns the aggregate report.
    pub async fn run(&self) -> SuiteReport {
        let mut reports = Vec::new();
        let mut fixtures = SuiteFixtures::default();

        reports.push(self.run_healthcheck().await);
        reports.push(self.run_booking_ids(&mut fixtures).await);
        reports.push(self.run_booking_json(&mut fixtures).await);
        reports.push(self.run_booking_xml(&fixtures).await);
        for mode in [NameFilter::First, NameFilter::Last, NameFilter::Both] {
            reports.push(self.run_filter(&fixtures, mode).await);
        }

        let report = SuiteReport::new(reports);
        tracing::info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "suite finished"
        );
        report
    }

    async fn run_healthcheck(&self) -> ScenarioReport {
        let started = Instant::now();
        finish(
            healthcheck::NAME,
            healthcheck::run(&self.api).await,
            started,
        )
    }

    async fn run_booking_ids(&self, fixtures: &mut SuiteFixtures) -> ScenarioReport {
        let started = Instant::now();
        match booking_ids::run(&self.api).await {
            Ok(ids) => {
                fixtures.booking_ids = Some(ids);
                finish(booking_ids::NAME, Ok(()), started)
            }
            Err(error) => finish(booking_ids::NAME, Err(error), started),
        }
    }

    async fn run_booking_json(&self, fixtures: &mut SuiteFixtures) -> ScenarioReport {
        let Some(id) = fixtures.first_booking_id() else {
            return skip(booking_json::NAME);
        };
        let started = Instant::now();
        match booking_json::run(&self.api, id).await {
            Ok(booking) => {
                fixtures.reference = Some(booking);
                finish(booking_json::NAME, Ok(()), started)
            }
            Err(error) => finish(booking_json::NAME, Err(error), started),
        }
    }

    async fn run_booking_xml(&self, fixtures: &SuiteFixtures) -> ScenarioReport {
        let Some(id) = fixtures.first_booking_id() else {
            return skip(booking_xml::NAME);
        };
        let started = Instant::now();
        finish(booking_xml::NAME, booking_xml::run(&self.api, id).await, started)
    }

    async fn run_filter(&self, fixtures: &SuiteFixtures, mode: NameFilter) -> ScenarioReport {
        let name = mode.scenario_name();
        let Some(reference) = &fixtures.reference else {
            tracing::warn!(scenario = name, "scenario skipped: no reference booking captured");
            return ScenarioReport::skipped(name, "no reference booking captured");
        };
        let started = Instant::now();
        finish(name, filter_by_name::run(&self.api, reference, mode).await, started)
    }
}

fn finish(name: &str, result: ScenarioResult<()>, started: Instant) -> ScenarioReport {
    let duration = started.elapsed();
    match result {
        Ok(()) => {
            tracing::info!(scenario = name, "scenario passed");
            ScenarioReport::passed(name, duration)
        }
        Err(error) => {
            tracing::warn!(scenario = name, %error, "scenario failed");
            ScenarioReport::failed(name, error, duration)
        }
    }
}

fn skip(name: &str) -> ScenarioReport {
    tracing::warn!(scenario = name, "scenario skipped: no booking ids captured");
    ScenarioReport::skipped(name, "no booking ids captured")
}

/// Asserts that the response carries the expected status code.
fn expect_status(response: &ResponseSpec, expected: u16) -> ScenarioResult<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(ScenarioError::Status {
            expected,
            actual: response.status,
        })
    }
}

/// Decodes the body into a typed value, labelling failures.
fn decode_json<T: DeserializeOwned>(
    response: &ResponseSpec,
    what: &'static str,
) -> ScenarioResult<T> {
    response
        .decode_json()
        .map_err(|error| ScenarioError::Decode {
            what,
            message: error.to_string(),
        })
}
