use thiserror::Error;

/// Errors raised while constructing a telemetry event.
///
/// Construction has exactly one locally-rejected condition: an out-of-range
/// `result_code`. Everything downstream (serialization, stdout writes)
/// propagates through `eyre` at the call site instead.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A caller-supplied field failed validation; no event is produced.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
