//! Table output for change tickets using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::{
    AdapterStatus, ChangeTicket, TICKET_KEY_FIELD, TICKET_NUMBER_FIELD,
};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Create a new table formatter with explicit color support
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format change tickets, one row per ticket.
    pub fn format_tickets(&self, tickets: &[ChangeTicket]) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Number").add_attribute(Attribute::Bold),
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Other fields").add_attribute(Attribute::Bold),
        ]);

        for ticket in tickets {
            let others: Vec<&str> = ticket
                .fields()
                .keys()
                .map(String::as_str)
                .filter(|k| *k != TICKET_NUMBER_FIELD && *k != TICKET_KEY_FIELD)
                .collect();
            let others = if others.is_empty() {
                "-".to_string()
            } else {
                truncate(&others.join(", "), 60)
            };

            table.add_row(vec![
                Cell::new(ticket.number().unwrap_or("-")),
                Cell::new(ticket.key().unwrap_or("-")),
                Cell::new(others),
            ]);
        }

        table.to_string()
    }

    /// Format the adapter's status as a one-row table.
    pub fn format_status(&self, adapter_id: &str, status: AdapterStatus) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Adapter").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        let status_cell = if self.use_colors {
            Cell::new(status.as_str())
                .fg(status_color(status))
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(status.as_str())
        };
        table.add_row(vec![Cell::new(adapter_id), status_cell]);

        table.to_string()
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map adapter status to color
const fn status_color(status: AdapterStatus) -> Color {
    match status {
        AdapterStatus::Online => Color::Green,
        AdapterStatus::Offline => Color::Red,
    }
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket(value: serde_json::Value) -> ChangeTicket {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_format_tickets_lists_numbers_and_keys() {
        let formatter = TableFormatter::with_colors(false);
        let out = formatter.format_tickets(&[
            ticket(json!({ "change_ticket_number": "CHG001", "change_ticket_key": "abc" })),
            ticket(json!({
                "change_ticket_number": "CHG002",
                "change_ticket_key": "def",
                "short_description": "Patch"
            })),
        ]);

        assert!(out.contains("CHG001"));
        assert!(out.contains("abc"));
        assert!(out.contains("CHG002"));
        assert!(out.contains("short_description"));
    }

    #[test]
    fn test_status_color_mapping() {
        assert_eq!(status_color(AdapterStatus::Online), Color::Green);
        assert_eq!(status_color(AdapterStatus::Offline), Color::Red);
    }

    #[test]
    fn test_format_status_table() {
        for use_colors in [false, true] {
            let formatter = TableFormatter::with_colors(use_colors);
            let out = formatter.format_status("sn-1", AdapterStatus::Offline);
            assert!(out.contains("Adapter"));
            assert!(out.contains("sn-1"));
            assert!(out.contains("OFFLINE"));
        }
    }
}
