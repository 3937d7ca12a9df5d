//! Offline integration tests for the scenario suite.
//!
//! These tests drive the full runner through a scripted `HttpClient`
//! serving canned responses, verifying the fixture chain and the skip
//! semantics without touching the network.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use bookcheck_application::ports::{HttpClient, HttpClientError};
use bookcheck_application::{BookingApi, SuiteRunner};
use bookcheck_domain::{RequestSpec, ResponseSpec, ScenarioStatus, SuiteReport};

const BASE_URL: &str = "http://stub";
const JSON_CT: &str = "application/json; charset=utf-8";
const HTML_CT: &str = "text/html; charset=utf-8";

const SALLY_JSON: &str = r#"{
    "firstname": "Sally",
    "lastname": "Brown",
    "totalprice": 111,
    "depositpaid": true,
    "bookingdates": {"checkin": "2018-01-01", "checkout": "2019-01-01"},
    "additionalneeds": "Breakfast"
}"#;

const TOM_JSON: &str = r#"{
    "firstname": "Tom",
    "lastname": "Brown",
    "totalprice": 54,
    "depositpaid": false,
    "bookingdates": {"checkin": "2020-06-01", "checkout": "2020-06-03"}
}"#;

const SALLY_XML: &str = "<booking>\
    <firstname>Sally</firstname>\
    <lastname>Brown</lastname>\
    <totalprice>111</totalprice>\
    <depositpaid>true</depositpaid>\
    <bookingdates>\
        <checkin>2018-01-01</checkin>\
        <checkout>2019-01-01</checkout>\
    </bookingdates>\
    <additionalneeds>Breakfast</additionalneeds>\
</booking>";

struct Route {
    accept: &'static str,
    path_and_query: String,
    response: ResponseSpec,
}

/// Serves canned responses keyed on accept header and path+query.
#[derive(Default)]
struct ScriptedClient {
    routes: Vec<Route>,
}

impl ScriptedClient {
    fn new() -> Self {
        Self::default()
    }

    fn route(
        mut self,
        accept: &'static str,
        path_and_query: &str,
        response: ResponseSpec,
    ) -> Self {
        self.routes.push(Route {
            accept,
            path_and_query: path_and_query.to_string(),
            response,
        });
        self
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let accept = request.headers.get("Accept").unwrap_or("");
        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let query = request
            .query
            .as_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let path_and_query = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        };

        self.routes
            .iter()
            .find(|r| r.accept == accept && r.path_and_query == path_and_query)
            .map_or_else(
                || {
                    Err(HttpClientError::Other(format!(
                        "no scripted route for {accept} {path_and_query}"
                    )))
                },
                |r| Ok(r.response.clone()),
            )
    }
}

fn respond(status: u16, content_type: Option<&str>, body: &str) -> ResponseSpec {
    let mut headers = HashMap::new();
    if let Some(ct) = content_type {
        headers.insert("Content-Type".to_string(), ct.to_string());
    }
    ResponseSpec::new(status, headers, body, Duration::from_millis(3))
}

fn happy_path_client() -> ScriptedClient {
    ScriptedClient::new()
        .route("application/json", "/ping", respond(201, None, "Created"))
        .route(
            "application/json",
            "/booking",
            respond(200, Some(JSON_CT), r#"[{"bookingid": 1}, {"bookingid": 2}]"#),
        )
        .route(
            "application/json",
            "/booking/1",
            respond(200, Some(JSON_CT), SALLY_JSON),
        )
        .route(
            "application/json",
            "/booking/2",
            respond(200, Some(JSON_CT), TOM_JSON),
        )
        .route(
            "application/xml",
            "/booking/1",
            respond(200, Some(HTML_CT), SALLY_XML),
        )
        .route(
            "application/json",
            "/booking?firstname=Sally",
            respond(200, Some(JSON_CT), r#"[{"bookingid": 1}]"#),
        )
        .route(
            "application/json",
            "/booking?lastname=Brown",
            respond(200, Some(JSON_CT), r#"[{"bookingid": 1}, {"bookingid": 2}]"#),
        )
        .route(
            "application/json",
            "/booking?firstname=Sally&lastname=Brown",
            respond(200, Some(JSON_CT), r#"[{"bookingid": 1}]"#),
        )
}

async fn run_suite(client: ScriptedClient) -> SuiteReport {
    let api = BookingApi::with_base_url(Arc::new(client), BASE_URL);
    SuiteRunner::new(api).run().await
}

fn status_of<'a>(report: &'a SuiteReport, name: &str) -> &'a ScenarioStatus {
    &report
        .scenarios
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("scenario {name} missing from report"))
        .status
}

#[tokio::test]
async fn full_suite_passes_against_conforming_api() {
    let report = run_suite(happy_path_client()).await;

    let names: Vec<&str> = report.scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "healthcheck",
            "get booking ids",
            "get booking (json)",
            "get booking (xml)",
            "filter by first name",
            "filter by last name",
            "filter by first and last name",
        ]
    );
    assert!(report.all_passed(), "unexpected failures: {report:?}");
    assert_eq!(report.passed, 7);
}

#[tokio::test]
async fn listing_failure_skips_dependent_scenarios() {
    // Only the ping route exists; the listing call hits no route and
    // fails at the transport level.
    let client =
        ScriptedClient::new().route("application/json", "/ping", respond(201, None, "Created"));
    let report = run_suite(client).await;

    assert_eq!(*status_of(&report, "healthcheck"), ScenarioStatus::Passed);
    assert!(matches!(
        status_of(&report, "get booking ids"),
        ScenarioStatus::Failed(_)
    ));
    for name in [
        "get booking (json)",
        "get booking (xml)",
        "filter by first name",
        "filter by last name",
        "filter by first and last name",
    ] {
        assert!(
            matches!(status_of(&report, name), ScenarioStatus::Skipped(_)),
            "{name} should be skipped"
        );
    }
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 5);
}

#[tokio::test]
async fn charset_free_content_type_fails_the_listing() {
    let client = ScriptedClient::new()
        .route("application/json", "/ping", respond(201, None, "Created"))
        .route(
            "application/json",
            "/booking",
            respond(200, Some("application/json"), r#"[{"bookingid": 1}]"#),
        );
    let report = run_suite(client).await;

    match status_of(&report, "get booking ids") {
        ScenarioStatus::Failed(message) => {
            assert!(
                message.contains("content-type mismatch"),
                "unexpected failure message: {message}"
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn extra_key_in_id_summary_fails_the_listing() {
    let client = ScriptedClient::new()
        .route("application/json", "/ping", respond(201, None, "Created"))
        .route(
            "application/json",
            "/booking",
            respond(
                200,
                Some(JSON_CT),
                r#"[{"bookingid": 1, "extra": true}]"#,
            ),
        );
    let report = run_suite(client).await;

    assert!(matches!(
        status_of(&report, "get booking ids"),
        ScenarioStatus::Failed(_)
    ));
    assert_eq!(report.skipped, 5);
}

#[tokio::test]
async fn wrong_healthcheck_body_fails_only_the_healthcheck() {
    let mut client = happy_path_client();
    client.routes.retain(|r| r.path_and_query != "/ping");
    let client = client.route("application/json", "/ping", respond(201, None, "OK"));
    let report = run_suite(client).await;

    match status_of(&report, "healthcheck") {
        ScenarioStatus::Failed(message) => {
            assert!(message.contains("Created"), "message was: {message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    // The rest of the suite is unaffected.
    assert_eq!(report.failed, 1);
    assert_eq!(report.passed, 6);
}

#[tokio::test]
async fn filter_result_with_mismatched_name_fails_that_scenario() {
    // The first-name filter returns booking 2, whose firstname differs
    // from the reference record's.
    let mut client = happy_path_client();
    client
        .routes
        .retain(|r| r.path_and_query != "/booking?firstname=Sally");
    let client = client.route(
        "application/json",
        "/booking?firstname=Sally",
        respond(200, Some(JSON_CT), r#"[{"bookingid": 2}]"#),
    );
    let report = run_suite(client).await;

    match status_of(&report, "filter by first name") {
        ScenarioStatus::Failed(message) => {
            assert!(
                message.contains("does not match filter"),
                "message was: {message}"
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(*status_of(&report, "filter by last name"), ScenarioStatus::Passed);
    assert_eq!(
        *status_of(&report, "filter by first and last name"),
        ScenarioStatus::Passed
    );
}

#[tokio::test]
async fn non_literal_xml_deposit_flag_fails_the_xml_scenario() {
    let mut client = happy_path_client();
    client.routes.retain(|r| r.accept != "application/xml");
    let client = client.route(
        "application/xml",
        "/booking/1",
        respond(200, Some(HTML_CT), &SALLY_XML.replace("true", "yes")),
    );
    let report = run_suite(client).await;

    match status_of(&report, "get booking (xml)") {
        ScenarioStatus::Failed(message) => {
            assert!(message.contains("depositpaid"), "message was: {message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(report.failed, 1);
}

#[tokio::test]
async fn empty_listing_passes_but_dependents_are_skipped() {
    let client = ScriptedClient::new()
        .route("application/json", "/ping", respond(201, None, "Created"))
        .route("application/json", "/booking", respond(200, Some(JSON_CT), "[]"));
    let report = run_suite(client).await;

    assert_eq!(*status_of(&report, "get booking ids"), ScenarioStatus::Passed);
    assert!(matches!(
        status_of(&report, "get booking (json)"),
        ScenarioStatus::Skipped(_)
    ));
    assert_eq!(report.passed, 2);
    assert_eq!(report.skipped, 5);
}
