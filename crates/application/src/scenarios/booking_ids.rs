//! Booking listing scenario
//!
//! `GET /booking` must answer 200 with a JSON array of booking id
//! summaries. Every element must carry a non-zero `bookingid` and
//! nothing else; the decoded ids become the fixture for the
//! single-booking scenarios.

use bookcheck_domain::{BookingIdSummary, validate};

use crate::api::{BookingApi, BookingFilter};
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

use super::{decode_json, expect_status};

pub(crate) const NAME: &str = "get booking ids";

pub(crate) async fn run<C: HttpClient>(api: &BookingApi<C>) -> ScenarioResult<Vec<BookingIdSummary>> {
    let response = api.booking_ids(&BookingFilter::none()).await?;
    expect_status(&response, 200)?;
    validate::is_json(&response)?;
    validate::is_array(&response)?;

    let ids: Vec<BookingIdSummary> = decode_json(&response, "booking id list")?;
    for summary in &ids {
        if !summary.is_valid() {
            return Err(ScenarioError::Check(
                "every listed booking must have a non-zero bookingid".to_string(),
            ));
        }
    }
    Ok(ids)
}
