//! Healthcheck scenario
//!
//! `GET /ping` must answer 201 with the literal body `Created`.

use crate::api::BookingApi;
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

use super::expect_status;

pub(crate) const NAME: &str = "healthcheck";

pub(crate) async fn run<C: HttpClient>(api: &BookingApi<C>) -> ScenarioResult<()> {
    let response = api.ping().await?;
    expect_status(&response, 201)?;

    if response.body != "Created" {
        return Err(ScenarioError::Check(format!(
            "ping body should be \"Created\", got {:?}",
            response.body
        )));
    }
    Ok(())
}
