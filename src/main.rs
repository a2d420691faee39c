//! Smoke-test entry point: builds one fixed example event and emits it.
//!
//! Not part of the durable contract — the library API is the interface.

use eyre::{Context, Result};
use indexmap::IndexMap;
use log::info;

use fc_telemetry::{EventBuilder, EventEmitter, TelemetryConfig};

fn setup_logging() {
    // Logs go to stderr; stdout is reserved for the event line itself.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    setup_logging();

    let config = TelemetryConfig::default();
    info!("Emitting smoke-test event (timezone: {})", config.timezone);

    let event = EventBuilder::new("slack-mcp", "telemetry_init", true, 200)
        .route("health")
        .module("fc-mesh")
        .mandate("Proof & Trust")
        .metrics_json(IndexMap::from([(
            "build".to_string(),
            serde_json::json!("fc-mesh-001"),
        )]))
        .build(&config)
        .context("Failed to build smoke-test event")?;

    EventEmitter::new().emit(&event).context("Failed to emit event")?;

    Ok(())
}
