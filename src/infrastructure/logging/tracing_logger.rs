//! `tracing`-backed implementation of the domain [`Logger`] port.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::secret_scrubbing::SecretScrubber;
use crate::domain::ports::{Level, Logger};

/// Forwards port calls to `tracing` events, scrubbing credentials first.
///
/// Structured fields are rendered as one JSON object in the `fields`
/// event attribute, since `tracing` field names must be static.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    scrubber: SecretScrubber,
}

impl TracingLogger {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            scrubber: SecretScrubber::new()?,
        })
    }
}

#[async_trait]
impl Logger for TracingLogger {
    async fn log(&self, level: Level, message: &str, fields: HashMap<String, Value>) {
        let message = self.scrubber.scrub_message(message);
        let fields = if fields.is_empty() {
            String::new()
        } else {
            self.scrubber
                .scrub_message(&serde_json::to_string(&fields).unwrap_or_default())
        };

        match level {
            Level::Trace => tracing::trace!(target: "servicenow_adapter", fields = %fields, "{message}"),
            Level::Debug => tracing::debug!(target: "servicenow_adapter", fields = %fields, "{message}"),
            Level::Info => tracing::info!(target: "servicenow_adapter", fields = %fields, "{message}"),
            Level::Warn => tracing::warn!(target: "servicenow_adapter", fields = %fields, "{message}"),
            Level::Error => tracing::error!(target: "servicenow_adapter", fields = %fields, "{message}"),
        }
    }
}
