//! Single booking scenario, XML-flavored representation
//!
//! Same target as the JSON scenario, requested with an XML accept
//! header. The upstream answers 200 with a `text/html` content-type
//! (a known quirk, asserted as-is) and a body that decodes as an XML
//! booking, with `depositpaid` as the literal strings
//! `"true"`/`"false"` and a numeric `totalprice`.

use bookcheck_domain::{XmlBooking, validate};

use crate::api::BookingApi;
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

use super::expect_status;

pub(crate) const NAME: &str = "get booking (xml)";

pub(crate) async fn run<C: HttpClient>(api: &BookingApi<C>, id: u32) -> ScenarioResult<()> {
    let response = api.booking_xml(id).await?;
    expect_status(&response, 200)?;
    validate::is_xml(&response)?;

    let booking = XmlBooking::from_xml(&response.body).map_err(|error| ScenarioError::Decode {
        what: "xml booking",
        message: error.to_string(),
    })?;

    if booking.totalprice_value().is_none() {
        return Err(ScenarioError::Check(format!(
            "totalprice should be numeric, got {:?}",
            booking.totalprice
        )));
    }
    if booking.depositpaid_value().is_none() {
        return Err(ScenarioError::Check(format!(
            "depositpaid should be \"true\" or \"false\", got {:?}",
            booking.depositpaid
        )));
    }
    Ok(())
}
