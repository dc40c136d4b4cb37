//! ServiceNow table API payloads.
//!
//! These structs map to the REST table API JSON envelope. They are used
//! internally by the connector and are not part of the public domain model.

use serde::Deserialize;

use crate::domain::models::RawRecord;

/// Marker text of the static page served by a hibernating instance.
pub const HIBERNATING_MARKER: &str = "Instance Hibernating page";

/// Tag that distinguishes the HTML page from a JSON body that merely
/// mentions the marker text.
pub const HTML_TAG: &str = "<html>";

/// Base path of the table API.
pub const TABLE_API_PATH: &str = "/api/now/table";

/// Envelope of every table API response: `{ "result": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableResponse {
    /// Query results (list) or the affected record (single object).
    pub result: TableResult,
}

/// The `result` member, which is a list for queries and a single
/// object for record creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TableResult {
    Many(Vec<RawRecord>),
    One(RawRecord),
}

impl TableResult {
    /// Flatten into a list of records.
    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![record],
        }
    }
}
