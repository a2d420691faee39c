//! fc-telemetry: builds and emits single-line JSON telemetry event records.
//!
//! Two components make up the whole system:
//! - [`EventBuilder`] constructs a validated [`Event`], defaulting the
//!   timestamp and correlation identifier.
//! - [`EventEmitter`] serializes the event to one compact JSON line on
//!   stdout.
//!
//! The emitter accepts any [`Event`], so the two never depend on each other
//! at construction time. Downstream ingestion (log shippers, collectors) is
//! out of scope; the line format on stdout is the only contract.

pub mod config;
pub mod emitter;
pub mod error;
pub mod event;

pub use config::TelemetryConfig;
pub use emitter::EventEmitter;
pub use error::TelemetryError;
pub use event::{Event, EventBuilder};
