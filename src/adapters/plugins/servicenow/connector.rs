//! ServiceNow table API connector.
//!
//! Turns one logical operation (`get` or `post`) into exactly one HTTP
//! request through the [`HttpClient`] port and resolves the outcome into
//! either projected change tickets or a [`ConnectorError`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::json;

use crate::domain::errors::{ConnectorError, ConnectorResult, TransportError};
use crate::domain::models::{AdapterProperties, ChangeTicket};
use crate::domain::ports::{HttpClient, HttpMethod, HttpResponse, Level, Logger, RequestOptions};

use super::models::{TableResponse, HIBERNATING_MARKER, HTML_TAG, TABLE_API_PATH};
use super::projection::project_records;

/// Result of one connector call.
///
/// `Ok(Some(tickets))` for a parsed body, `Ok(None)` for an empty body,
/// `Err(_)` for every failure.
pub type CallOutcome = ConnectorResult<Option<Vec<ChangeTicket>>>;

/// Per-call options layered over the stored connection properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOptions {
    /// Request method.
    pub method: HttpMethod,
    /// Encoded query appended to the table path, if any.
    pub query: Option<String>,
}

impl CallOptions {
    pub const fn new(method: HttpMethod) -> Self {
        Self {
            method,
            query: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Connector for one ServiceNow instance and table.
///
/// Holds the immutable connection properties plus the injected HTTP and
/// logging collaborators. Cloning is cheap and shares all three.
#[derive(Clone)]
pub struct ServiceNowConnector {
    properties: Arc<AdapterProperties>,
    http: Arc<dyn HttpClient>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for ServiceNowConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceNowConnector")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

impl ServiceNowConnector {
    /// Create a connector from connection properties and collaborators.
    pub fn new(
        properties: AdapterProperties,
        http: Arc<dyn HttpClient>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            properties: Arc::new(properties),
            http,
            logger,
        }
    }

    /// The connection properties this connector was built with.
    pub fn properties(&self) -> &AdapterProperties {
        &self.properties
    }

    /// Table API path, optionally suffixed with `?<query>`.
    ///
    /// The query is appended verbatim.
    pub fn build_uri(&self, query: Option<&str>) -> String {
        let path = format!("{TABLE_API_PATH}/{}", self.properties.service_now_table);
        match query {
            Some(query) => format!("{path}?{query}"),
            None => path,
        }
    }

    /// Whether the response is the hibernation page served with status 200.
    pub fn is_degraded(response: &HttpResponse) -> bool {
        response.body.contains(HIBERNATING_MARKER)
            && response.body.contains(HTML_TAG)
            && response.status == 200
    }

    /// Resolve a transport outcome into a [`CallOutcome`].
    ///
    /// Checks run in order: transport failure, hibernating instance,
    /// non-2xx status, then body parsing. A failure short-circuits the
    /// checks after it.
    pub async fn normalize_response(
        &self,
        outcome: Result<HttpResponse, TransportError>,
    ) -> CallOutcome {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                self.logger
                    .error(&format!("ServiceNow request failed: {err}"))
                    .await;
                return Err(ConnectorError::Transport(err));
            }
        };

        if Self::is_degraded(&response) {
            self.logger.error("Service-Now instance is hibernating").await;
            return Err(ConnectorError::Hibernating);
        }

        if !response.is_success() {
            self.logger
                .error(&format!(
                    "ServiceNow responded with status {}",
                    response.status
                ))
                .await;
            return Err(ConnectorError::Status(response));
        }

        if response.body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<TableResponse>(&response.body) {
            Ok(table) => Ok(Some(project_records(table.result.into_records()))),
            Err(err) => {
                self.logger
                    .error(&format!("ServiceNow response body is not a table result: {err}"))
                    .await;
                Err(ConnectorError::from(err))
            }
        }
    }

    /// Build the request from stored properties plus `call`, issue it once,
    /// and normalize the outcome.
    pub async fn send(&self, call: CallOptions) -> CallOutcome {
        let options = RequestOptions {
            method: call.method,
            base_url: self.properties.url.clone(),
            path: self.build_uri(call.query.as_deref()),
            auth: self.properties.auth.clone(),
        };

        let mut fields = HashMap::new();
        fields.insert("method".to_string(), json!(options.method.as_str()));
        fields.insert("path".to_string(), json!(options.path));
        self.logger
            .log(Level::Debug, "Sending ServiceNow table request", fields)
            .await;

        let outcome = self.http.request(options).await;
        self.normalize_response(outcome).await
    }

    /// GET the configured table.
    pub async fn get(&self) -> CallOutcome {
        self.send(CallOptions::new(HttpMethod::Get)).await
    }

    /// GET the configured table filtered by an encoded query
    /// (e.g. `sysparm_query=active=true`).
    pub async fn get_with_query(&self, query: &str) -> CallOutcome {
        self.send(CallOptions::new(HttpMethod::Get).with_query(query))
            .await
    }

    /// POST to the configured table. No request body is sent.
    pub async fn post(&self) -> CallOutcome {
        self.send(CallOptions::new(HttpMethod::Post)).await
    }
}
