//! Native adapter plugins.
//!
//! Each sub-module corresponds to an external system and provides an
//! adapter built on the domain ports. Only ServiceNow is implemented.

pub mod servicenow;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::domain::ports::Logger;
use crate::infrastructure::http::ReqwestHttpClient;

use self::servicenow::ServiceNowAdapter;

/// Create a ServiceNow adapter from loaded configuration.
///
/// Wires the production HTTP client with the configured timeouts and
/// hands the given logger to both the adapter and its connector.
///
/// # Errors
///
/// Returns `Err` if the HTTP client cannot be constructed.
pub fn create_native_adapter(config: &Config, logger: Arc<dyn Logger>) -> Result<ServiceNowAdapter> {
    let http = ReqwestHttpClient::with_config(&config.http)
        .context("Failed to create HTTP client for ServiceNow adapter")?;

    Ok(ServiceNowAdapter::new(
        config.adapter.id.clone(),
        config.adapter.properties.clone(),
        Arc::new(http),
        logger,
    ))
}
