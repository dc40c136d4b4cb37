//! `get` and `post` commands.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::adapters::plugins::servicenow::ServiceNowAdapter;
use crate::cli::output::table::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::GetArgs;
use crate::domain::models::ChangeTicket;
use crate::domain::ports::HttpMethod;

#[derive(Debug, Serialize)]
pub struct TicketsOutput {
    pub method: HttpMethod,
    pub path: String,
    pub tickets: Option<Vec<ChangeTicket>>,
}

impl CommandOutput for TicketsOutput {
    fn to_human(&self) -> String {
        match self.tickets {
            Some(ref tickets) if tickets.is_empty() => {
                format!("{} {}: no change tickets returned.", self.method, self.path)
            }
            Some(ref tickets) => format!(
                "{} {}: {} change ticket(s)\n{}",
                self.method,
                self.path,
                tickets.len(),
                TableFormatter::new().format_tickets(tickets)
            ),
            None => format!("{} {}: empty response body.", self.method, self.path),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Fetch change tickets, optionally filtered by an encoded query.
pub async fn get(adapter: &ServiceNowAdapter, args: GetArgs, json_mode: bool) -> Result<()> {
    let connector = adapter.connector();
    let path = connector.build_uri(args.query.as_deref());

    let tickets = match args.query {
        Some(ref query) => connector.get_with_query(query).await,
        None => adapter.get_record().await,
    }
    .with_context(|| format!("GET {path} failed"))?;

    output(
        &TicketsOutput {
            method: HttpMethod::Get,
            path,
            tickets,
        },
        json_mode,
    );
    Ok(())
}

/// Issue a POST against the configured table.
pub async fn post(adapter: &ServiceNowAdapter, json_mode: bool) -> Result<()> {
    let path = adapter.connector().build_uri(None);

    let tickets = adapter
        .post_record()
        .await
        .with_context(|| format!("POST {path} failed"))?;

    output(
        &TicketsOutput {
            method: HttpMethod::Post,
            path,
            tickets,
        },
        json_mode,
    );
    Ok(())
}
