//! Structured logging, per-step log records and Prometheus metrics.
//!
//! - `init_logging`: tracing subscriber (JSON in production, pretty otherwise)
//! - `StepLogger`: compact, length-bounded JSON record of each step
//! - `Metrics`: step, order and error counters

pub mod error;
pub mod logging;
pub mod metrics;
pub mod step_log;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
pub use step_log::StepLogger;
