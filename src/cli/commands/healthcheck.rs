//! `healthcheck` command: one check, one status event.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::adapters::plugins::servicenow::ServiceNowAdapter;
use crate::cli::output::table::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AdapterStatus, ChangeTicket};

#[derive(Debug, Serialize)]
pub struct HealthcheckOutput {
    pub adapter_id: String,
    pub status: AdapterStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<ChangeTicket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl CommandOutput for HealthcheckOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut lines = vec![formatter.format_status(&self.adapter_id, self.status)];
        if let Some(ref error) = self.error {
            lines.push(format!("  Error: {error}"));
        }
        if let Some(status) = self.http_status {
            lines.push(format!("  HTTP status: {status}"));
        }
        match self.tickets {
            Some(ref tickets) if !tickets.is_empty() => {
                lines.push(formatter.format_tickets(tickets));
            }
            Some(_) => lines.push("  No change tickets returned.".to_string()),
            None if self.error.is_none() => lines.push("  Empty response body.".to_string()),
            None => {}
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run one healthcheck and report the status event it produced.
///
/// Returns `Err` when the adapter went OFFLINE so the process exits non-zero.
pub async fn execute(adapter: &ServiceNowAdapter, json_mode: bool) -> Result<()> {
    let mut events = adapter.subscribe();
    let outcome = adapter.healthcheck().await;
    let status = events
        .try_recv()
        .context("healthcheck published no status event")?
        .status;

    let result = match outcome {
        Ok(tickets) => HealthcheckOutput {
            adapter_id: adapter.id().to_string(),
            status,
            tickets,
            error: None,
            http_status: None,
        },
        Err(ref err) => HealthcheckOutput {
            adapter_id: adapter.id().to_string(),
            status,
            tickets: None,
            error: Some(err.to_string()),
            http_status: err.response().map(|r| r.status),
        },
    };
    output(&result, json_mode);

    if status == AdapterStatus::Offline {
        anyhow::bail!("adapter '{}' is OFFLINE", adapter.id());
    }
    Ok(())
}
