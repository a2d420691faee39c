//! The telemetry event record and its builder.

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::TelemetryConfig;
use crate::error::TelemetryError;

/// Result codes accepted by [`EventBuilder::build`]. 200 signals success,
/// 422 signals a validation failure in the reporting application.
pub const VALID_RESULT_CODES: [u16; 2] = [200, 422];

/// A single telemetry event describing the outcome of an application action.
///
/// Field declaration order is the wire order. Optional fields are skipped
/// entirely when absent, never serialized as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Wall-clock timestamp at construction time (ISO 8601, UTC, `Z` suffix)
    pub ts: String,
    /// Correlation identifier, caller-supplied or generated (UUID v4)
    pub trace_id: String,
    /// Name of the emitting application
    pub app: String,
    /// Name of the occurrence being reported
    pub signal: String,
    /// Whether the reported action succeeded
    pub ok: bool,
    /// Closed-set status indicator, 200 or 422
    pub result_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capsule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate: Option<String>,
    /// Free-form metrics mapping; key order is preserved as supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_json: Option<IndexMap<String, serde_json::Value>>,
}

/// Builds a validated [`Event`] from named inputs, filling defaults for the
/// timestamp and correlation identifier.
///
/// Required fields are taken by [`EventBuilder::new`]; optional fields are
/// chained. Empty optional strings and an empty metrics map are treated as
/// absent, matching the leniency of the wire consumers.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    app: String,
    signal: String,
    ok: bool,
    result_code: u16,
    latency_ms: Option<f64>,
    route: Option<String>,
    capsule: Option<String>,
    module: Option<String>,
    mandate: Option<String>,
    metrics_json: Option<IndexMap<String, serde_json::Value>>,
    trace_id: Option<String>,
}

impl EventBuilder {
    /// Start a builder with the required fields.
    pub fn new(app: impl Into<String>, signal: impl Into<String>, ok: bool, result_code: u16) -> Self {
        Self {
            app: app.into(),
            signal: signal.into(),
            ok,
            result_code,
            latency_ms: None,
            route: None,
            capsule: None,
            module: None,
            mandate: None,
            metrics_json: None,
            trace_id: None,
        }
    }

    /// Wall-clock latency of the reported action in milliseconds.
    pub fn latency_ms(mut self, latency_ms: f64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    /// Route or endpoint the action was handled on.
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn capsule(mut self, capsule: impl Into<String>) -> Self {
        self.capsule = Some(capsule.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn mandate(mut self, mandate: impl Into<String>) -> Self {
        self.mandate = Some(mandate.into());
        self
    }

    /// Free-form metrics attached to the event.
    pub fn metrics_json(mut self, metrics: IndexMap<String, serde_json::Value>) -> Self {
        self.metrics_json = Some(metrics);
        self
    }

    /// Correlation identifier; when not supplied a UUID v4 is generated.
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Validate and produce the immutable [`Event`].
    ///
    /// Fails with [`TelemetryError::InvalidArgument`] when `result_code` is
    /// outside {200, 422}. No other field is validated.
    pub fn build(self, config: &TelemetryConfig) -> Result<Event, TelemetryError> {
        if !VALID_RESULT_CODES.contains(&self.result_code) {
            return Err(TelemetryError::InvalidArgument(format!(
                "result_code must be 200 or 422, got {}",
                self.result_code
            )));
        }

        let trace_id = self
            .trace_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let event = Event {
            ts: now_iso(config),
            trace_id,
            app: self.app,
            signal: self.signal,
            ok: self.ok,
            result_code: self.result_code,
            latency_ms: self.latency_ms,
            route: self.route.filter(|s| !s.is_empty()),
            capsule: self.capsule.filter(|s| !s.is_empty()),
            module: self.module.filter(|s| !s.is_empty()),
            mandate: self.mandate.filter(|s| !s.is_empty()),
            metrics_json: self.metrics_json.filter(|m| !m.is_empty()),
        };

        log::debug!("built event app={} signal={} trace_id={}", event.app, event.signal, event.trace_id);

        Ok(event)
    }
}

/// Current wall-clock time as an unambiguous ISO 8601 string.
///
/// Always rendered in UTC with an explicit `Z` suffix; non-UTC zone names in
/// the config fall back to UTC rather than producing an offset-local form.
fn now_iso(config: &TelemetryConfig) -> String {
    if config.timezone != "UTC" {
        log::debug!("timezone {:?} not supported, rendering UTC", config.timezone);
    }
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
