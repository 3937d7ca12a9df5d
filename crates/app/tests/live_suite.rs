//! Live end-to-end tests against the real booking API.
//!
//! Ignored by default; run with `cargo test -p bookcheck -- --ignored`
//! when the upstream API is reachable. `BOOKCHECK_BASE_URL` redirects
//! the suite at a different deployment.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use bookcheck_application::{BookingApi, SuiteRunner};
use bookcheck_infrastructure::ReqwestHttpClient;

fn api() -> BookingApi<ReqwestHttpClient> {
    let client = Arc::new(ReqwestHttpClient::new().expect("client should build"));
    match std::env::var("BOOKCHECK_BASE_URL") {
        Ok(base_url) => BookingApi::with_base_url(client, base_url),
        Err(_) => BookingApi::new(client),
    }
}

#[tokio::test]
#[ignore = "requires network access to the booking API"]
async fn ping_answers_created() {
    let response = api().ping().await.expect("ping should succeed");
    assert_eq!(response.status, 201);
    assert_eq!(response.body, "Created");
}

#[tokio::test]
#[ignore = "requires network access to the booking API"]
async fn full_suite_passes() {
    let report = SuiteRunner::new(api()).run().await;
    for scenario in &report.scenarios {
        println!("{scenario}");
    }
    assert!(report.all_passed(), "suite failed: {report:?}");
}
