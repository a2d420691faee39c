use serde::{Deserialize, Serialize};

/// Telemetry formatting configuration.
///
/// A pure value passed to the builder rather than process-wide state. There
/// is no config file; callers construct this directly or take the default.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Time zone for rendered timestamps. Only "UTC" is supported; any other
    /// value falls back to UTC with an explicit Z suffix.
    pub timezone: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}
