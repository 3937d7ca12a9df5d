//! Bookcheck - Main Entry Point
//!
//! Wires the reqwest adapter to the scenario runner and executes the
//! booking API suite against the configured base URL.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bookcheck_application::{BookingApi, DEFAULT_BASE_URL, SuiteRunner};
use bookcheck_infrastructure::ReqwestHttpClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let base_url =
        std::env::var("BOOKCHECK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    tracing::info!(
        "Starting bookcheck v{} against {base_url}",
        env!("CARGO_PKG_VERSION")
    );

    let client = Arc::new(ReqwestHttpClient::new()?);
    let api = BookingApi::with_base_url(client, base_url);
    let report = SuiteRunner::new(api).run().await;

    for scenario in &report.scenarios {
        println!("{scenario}");
    }
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed, report.failed, report.skipped
    );

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
