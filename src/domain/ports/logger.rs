use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Log level enumeration for structured logging
///
/// Levels are ordered from most verbose (Trace) to most severe (Error).
///
/// # Examples
///
/// ```
/// use servicenow_adapter::domain::ports::Level;
///
/// assert!(Level::Error > Level::Info);
/// assert!(Level::Trace < Level::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Most verbose level - detailed trace information
    Trace,
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
}

impl Level {
    /// Returns the string representation of the log level
    ///
    /// # Examples
    ///
    /// ```
    /// use servicenow_adapter::domain::ports::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "INFO");
    /// assert_eq!(Level::Error.as_str(), "ERROR");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port trait for leveled logging.
///
/// The adapter and connector receive an `Arc<dyn Logger>` at construction
/// and only ever produce calls into it; configuring the backend is the
/// host's job. The production implementation forwards to `tracing`
/// (see `infrastructure::logging::TracingLogger`); tests substitute a
/// recording logger to assert on emitted lines.
///
/// # Structured Logging
///
/// The `log` method accepts structured fields as a `HashMap<String, Value>`.
/// Convenience methods cover the plain leveled messages.
///
/// # Examples
///
/// ```
/// use servicenow_adapter::domain::ports::{Logger, Level};
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// async fn report(logger: &dyn Logger, adapter_id: &str) {
///     let mut fields = HashMap::new();
///     fields.insert("adapter_id".to_string(), json!(adapter_id));
///     logger.log(Level::Info, "Healthcheck started", fields).await;
///
///     logger.warn("Instance answered slowly").await;
/// }
/// ```
#[async_trait]
pub trait Logger: Send + Sync {
    /// Log a message with a specific level and structured fields
    ///
    /// # Arguments
    ///
    /// * `level` - The severity level of the log message
    /// * `message` - The human-readable log message
    /// * `fields` - Structured key-value pairs providing additional context
    async fn log(&self, level: Level, message: &str, fields: HashMap<String, Value>);

    /// Log a trace-level message
    async fn trace(&self, message: &str) {
        self.log(Level::Trace, message, HashMap::new()).await;
    }

    /// Log a debug-level message
    async fn debug(&self, message: &str) {
        self.log(Level::Debug, message, HashMap::new()).await;
    }

    /// Log an info-level message
    async fn info(&self, message: &str) {
        self.log(Level::Info, message, HashMap::new()).await;
    }

    /// Log a warning-level message
    async fn warn(&self, message: &str) {
        self.log(Level::Warn, message, HashMap::new()).await;
    }

    /// Log an error-level message
    ///
    /// Errors indicate failure conditions that prevent normal operation,
    /// such as a failed healthcheck.
    async fn error(&self, message: &str) {
        self.log(Level::Error, message, HashMap::new()).await;
    }
}
