//! Name filter scenarios
//!
//! Filters the collection by the reference booking's name field(s),
//! then fetches every returned id individually and asserts the
//! corresponding field(s) match the reference record.

use bookcheck_domain::{Booking, BookingIdSummary, validate};

use crate::api::{BookingApi, BookingFilter};
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

use super::{decode_json, expect_status};

/// Which name field(s) the filter scenario matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFilter {
    /// Filter on `firstname` only.
    First,
    /// Filter on `lastname` only.
    Last,
    /// Filter on both name fields.
    Both,
}

impl NameFilter {
    /// The scenario name reported for this mode.
    #[must_use]
    pub const fn scenario_name(self) -> &'static str {
        match self {
            Self::First => "filter by first name",
            Self::Last => "filter by last name",
            Self::Both => "filter by first and last name",
        }
    }

    const fn checks_firstname(self) -> bool {
        matches!(self, Self::First | Self::Both)
    }

    const fn checks_lastname(self) -> bool {
        matches!(self, Self::Last | Self::Both)
    }

    fn to_filter(self, reference: &Booking) -> BookingFilter {
        match self {
            Self::First => BookingFilter::by_firstname(&reference.firstname),
            Self::Last => BookingFilter::by_lastname(&reference.lastname),
            Self::Both => BookingFilter::by_full_name(&reference.firstname, &reference.lastname),
        }
    }
}

pub(crate) async fn run<C: HttpClient>(
    api: &BookingApi<C>,
    reference: &Booking,
    mode: NameFilter,
) -> ScenarioResult<()> {
    let response = api.booking_ids(&mode.to_filter(reference)).await?;
    expect_status(&response, 200)?;
    validate::is_json(&response)?;
    validate::is_array(&response)?;

    let ids: Vec<BookingIdSummary> = decode_json(&response, "booking id list")?;
    for summary in ids {
        check_one(api, reference, mode, summary.bookingid).await?;
    }
    Ok(())
}

async fn check_one<C: HttpClient>(
    api: &BookingApi<C>,
    reference: &Booking,
    mode: NameFilter,
    id: u32,
) -> ScenarioResult<()> {
    let response = api.booking(id).await?;
    expect_status(&response, 200)?;
    validate::is_json(&response)?;
    let booking: Booking = decode_json(&response, "booking")?;

    if mode.checks_firstname() && booking.firstname != reference.firstname {
        return Err(ScenarioError::Check(format!(
            "booking {id} firstname {:?} does not match filter {:?}",
            booking.firstname, reference.firstname
        )));
    }
    if mode.checks_lastname() && booking.lastname != reference.lastname {
        return Err(ScenarioError::Check(format!(
            "booking {id} lastname {:?} does not match filter {:?}",
            booking.lastname, reference.lastname
        )));
    }
    Ok(())
}
