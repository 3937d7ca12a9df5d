//! Single booking scenario, JSON representation
//!
//! `GET /booking/{id}` must answer 200 with the JSON content-type and
//! a body that satisfies the booking schema (the decode is the
//! field-type contract). The decoded record becomes the reference
//! fixture for the filter scenarios.

use bookcheck_domain::{Booking, validate};

use crate::api::BookingApi;
use crate::error::ScenarioResult;
use crate::ports::HttpClient;

use super::{decode_json, expect_status};

pub(crate) const NAME: &str = "get booking (json)";

pub(crate) async fn run<C: HttpClient>(api: &BookingApi<C>, id: u32) -> ScenarioResult<Booking> {
    let response = api.booking(id).await?;
    expect_status(&response, 200)?;
    validate::is_json(&response)?;

    decode_json(&response, "booking")
}
