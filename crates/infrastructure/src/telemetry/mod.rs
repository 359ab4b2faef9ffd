//! Logging and tracing infrastructure
//!
//! Provides `tracing-subscriber` setup shared by the server and CLI binaries.

mod logging;

pub use logging::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
