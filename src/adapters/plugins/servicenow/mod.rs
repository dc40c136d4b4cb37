//! ServiceNow native adapter.
//!
//! Polls and creates change-request records through the ServiceNow REST
//! table API. The connector owns the HTTP contract and response
//! normalization; the adapter owns the host lifecycle and status events.

pub mod adapter;
pub mod connector;
pub mod models;
pub mod projection;

pub use adapter::ServiceNowAdapter;
pub use connector::{CallOptions, CallOutcome, ServiceNowConnector};
