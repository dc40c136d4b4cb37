//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Rolling JSON log files
//! - Credential scrubbing for messages sent through the `Logger` port

pub mod config;
pub mod logger;
pub mod secret_scrubbing;
pub mod tracing_logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
pub use tracing_logger::TracingLogger;
