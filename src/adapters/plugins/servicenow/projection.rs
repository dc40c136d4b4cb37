//! Field projection for change-request records.
//!
//! Downstream consumers depend on this exact shape: `number` and `sys_id`
//! are renamed, and only the fields in [`KEPT_FIELDS`] survive. Every other
//! change-request field (state, risk, approval, assignment, audit and
//! workflow metadata, custom `u_*` columns) is removed.

use crate::domain::models::{ChangeTicket, RawRecord, TICKET_KEY_FIELD, TICKET_NUMBER_FIELD};

/// Upstream field renamed to [`TICKET_NUMBER_FIELD`].
pub const NUMBER_FIELD: &str = "number";

/// Upstream field renamed to [`TICKET_KEY_FIELD`].
pub const SYS_ID_FIELD: &str = "sys_id";

/// Fields present on a projected ticket, after renaming. Kept sorted.
pub const KEPT_FIELDS: &[&str] = &[
    "active",
    TICKET_KEY_FIELD,
    TICKET_NUMBER_FIELD,
    "description",
    "end_date",
    "priority",
    "short_description",
    "start_date",
    "work_end",
    "work_start",
];

/// Whether `field` survives projection.
pub fn is_kept_field(field: &str) -> bool {
    KEPT_FIELDS.binary_search(&field).is_ok()
}

/// Project one raw record into a [`ChangeTicket`].
pub fn project_record(mut record: RawRecord) -> ChangeTicket {
    if let Some(number) = record.remove(NUMBER_FIELD) {
        record.insert(TICKET_NUMBER_FIELD.to_string(), number);
    }
    if let Some(sys_id) = record.remove(SYS_ID_FIELD) {
        record.insert(TICKET_KEY_FIELD.to_string(), sys_id);
    }
    record.retain(|field, _| is_kept_field(field));
    ChangeTicket::from_fields(record)
}

/// Project every record of a `result` list.
pub fn project_records(records: Vec<RawRecord>) -> Vec<ChangeTicket> {
    records.into_iter().map(project_record).collect()
}
