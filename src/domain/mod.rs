//! Domain layer for the ServiceNow adapter
//!
//! Models, port traits and error types. Nothing here performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConnectorError, ConnectorResult, TransportError};
