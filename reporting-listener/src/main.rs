//! Reporting Data Listener Main Entry Point
//!
//! Consumes entity-change notifications, fetches the changed entity from
//! its upstream API and publishes a schema-conformant Avro record to the
//! reporting topics.

use dotenv::dotenv;
use reporting_listener::{Dependencies, ListenerError};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("reporting_listener=info,reporting_kafka=info,avro_record=info")
    });

    let json_logs = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        // JSON format for structured log shipping
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "reporting-listener",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        // Pretty console output for local development
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "reporting-listener",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), ListenerError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting reporting data listener");

    let deps = match Dependencies::new() {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    // A fatal processing error stops the loop with the offset
    // uncommitted; the hosting runtime's restart and the broker's
    // redelivery take over from there.
    match deps.listener.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(error = %e, "Listener stopped with error");
            Err(e)
        }
    }
}
