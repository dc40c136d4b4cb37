//! ServiceNow change-request adapter
//!
//! An adapter/connector pair that lets an orchestration platform poll and
//! create change-request records through the ServiceNow REST table API.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, port traits, error types
//! - **Service Layer** (`services`): the status event bus
//! - **Adapters** (`adapters`): the ServiceNow connector and adapter
//! - **Infrastructure Layer** (`infrastructure`): reqwest transport, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use servicenow_adapter::{
//!     AdapterProperties, Credentials, HttpConfig, ReqwestHttpClient, ServiceNowAdapter,
//!     TracingLogger,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let properties = AdapterProperties::new(
//!     "https://dev1234.service-now.com",
//!     Credentials::new("admin", "secret"),
//!     "change_request",
//! );
//! let http = Arc::new(ReqwestHttpClient::with_config(&HttpConfig::default())?);
//! let logger = Arc::new(TracingLogger::new()?);
//! let adapter = ServiceNowAdapter::new("sn-prod", properties, http, logger);
//!
//! let mut events = adapter.subscribe();
//! adapter.connect().await;
//! let event = events.recv().await?;
//! println!("{} {}", event.name(), event.payload.id);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::plugins::servicenow::{
    CallOptions, CallOutcome, ServiceNowAdapter, ServiceNowConnector,
};
pub use domain::errors::{ConnectorError, ConnectorResult, TransportError};
pub use domain::models::{
    AdapterProperties, AdapterStatus, ChangeTicket, Config, Credentials, HttpConfig,
};
pub use domain::ports::{HttpClient, HttpMethod, HttpResponse, Level, Logger, RequestOptions};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::ReqwestHttpClient;
pub use infrastructure::logging::TracingLogger;
pub use services::event_bus::{AdapterEvent, EventBus};
