//! Domain models.

pub mod config;
pub mod record;
pub mod status;

pub use config::{AdapterConfig, AdapterProperties, Config, Credentials, HttpConfig, LoggingConfig};
pub use record::{ChangeTicket, RawRecord, TICKET_KEY_FIELD, TICKET_NUMBER_FIELD};
pub use status::{AdapterStatus, StatusPayload};
