//! `uri` command: show where requests go without sending one.

use anyhow::Result;
use serde::Serialize;

use crate::adapters::plugins::servicenow::ServiceNowAdapter;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::UriArgs;

#[derive(Debug, Serialize)]
pub struct UriOutput {
    pub base_url: String,
    pub path: String,
}

impl CommandOutput for UriOutput {
    fn to_human(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(adapter: &ServiceNowAdapter, args: &UriArgs, json_mode: bool) -> Result<()> {
    let result = UriOutput {
        base_url: adapter.properties().url.clone(),
        path: adapter.connector().build_uri(args.query.as_deref()),
    };
    output(&result, json_mode);
    Ok(())
}
