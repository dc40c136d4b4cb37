//! Change-request record models.
//!
//! Raw records are whatever the table API returned in its `result` member.
//! A [`ChangeTicket`] is a raw record after field projection: the two
//! identifying fields are renamed and the metadata fields are gone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An upstream record: field name to value, no fixed schema.
pub type RawRecord = Map<String, Value>;

/// Field holding the human-readable ticket number after projection.
pub const TICKET_NUMBER_FIELD: &str = "change_ticket_number";

/// Field holding the ticket's system key after projection.
pub const TICKET_KEY_FIELD: &str = "change_ticket_key";

/// A normalized change-request record.
///
/// Serializes as the plain field map so that downstream consumers see
/// the same document shape the table API produced, minus projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeTicket(RawRecord);

impl ChangeTicket {
    /// Wrap an already projected field map.
    pub const fn from_fields(fields: RawRecord) -> Self {
        Self(fields)
    }

    /// The ticket number (`CHG0001234`), when present.
    pub fn number(&self) -> Option<&str> {
        self.0.get(TICKET_NUMBER_FIELD).and_then(Value::as_str)
    }

    /// The ticket's system key, when present.
    pub fn key(&self) -> Option<&str> {
        self.0.get(TICKET_KEY_FIELD).and_then(Value::as_str)
    }

    /// Look up any remaining field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the field survived projection.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub const fn fields(&self) -> &RawRecord {
        &self.0
    }

    pub fn into_fields(self) -> RawRecord {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let mut fields = RawRecord::new();
        fields.insert(TICKET_NUMBER_FIELD.to_string(), json!("CHG001"));
        fields.insert(TICKET_KEY_FIELD.to_string(), json!("abc"));
        let ticket = ChangeTicket::from_fields(fields);

        assert_eq!(ticket.number(), Some("CHG001"));
        assert_eq!(ticket.key(), Some("abc"));
        assert!(!ticket.contains("number"));
    }

    #[test]
    fn test_serializes_transparently() {
        let mut fields = RawRecord::new();
        fields.insert(TICKET_NUMBER_FIELD.to_string(), json!("CHG001"));
        let ticket = ChangeTicket::from_fields(fields);

        assert_eq!(
            serde_json::to_value(&ticket).unwrap(),
            json!({ "change_ticket_number": "CHG001" })
        );
    }
}
