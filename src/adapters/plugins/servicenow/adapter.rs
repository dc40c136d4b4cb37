//! ServiceNow adapter.
//!
//! Lifecycle wrapper around [`ServiceNowConnector`] matching the host's
//! plugin contract: `connect`, `healthcheck`, record operations, and
//! `ONLINE` / `OFFLINE` status events published on an owned [`EventBus`].

use std::fmt;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::models::{AdapterProperties, AdapterStatus};
use crate::domain::ports::{HttpClient, Logger};
use crate::services::event_bus::{AdapterEvent, EventBus, EventBusConfig};

use super::connector::{CallOutcome, ServiceNowConnector};

/// Adapter instance for one ServiceNow table.
///
/// The adapter never stores a status. Each healthcheck publishes a fresh
/// `ONLINE` or `OFFLINE` event, so the host observes
/// UNKNOWN → ONLINE | OFFLINE and may see either again on every check.
pub struct ServiceNowAdapter {
    /// Instance id carried by every status event.
    id: String,
    /// Connector built from the adapter's properties.
    connector: ServiceNowConnector,
    /// Status event channel.
    events: EventBus,
    /// Injected logging collaborator.
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for ServiceNowAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceNowAdapter")
            .field("id", &self.id)
            .field("connector", &self.connector)
            .finish_non_exhaustive()
    }
}

impl ServiceNowAdapter {
    /// Create an adapter from the host's construction contract:
    /// an instance id and the connection properties.
    pub fn new(
        id: impl Into<String>,
        properties: AdapterProperties,
        http: Arc<dyn HttpClient>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let connector = ServiceNowConnector::new(properties, http, Arc::clone(&logger));
        Self {
            id: id.into(),
            connector,
            events: EventBus::new(EventBusConfig::default()),
            logger,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The properties the connector was built with.
    pub fn properties(&self) -> &AdapterProperties {
        self.connector.properties()
    }

    pub const fn connector(&self) -> &ServiceNowConnector {
        &self.connector
    }

    /// Receive every status event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.events.subscribe()
    }

    /// Start the adapter: run one healthcheck and discard its result.
    pub async fn connect(&self) {
        let _ = self.healthcheck().await;
    }

    /// Fetch the table once and announce the outcome.
    ///
    /// Publishes `OFFLINE` and logs at error severity on failure, or
    /// publishes `ONLINE` and logs at debug severity on success. The call
    /// outcome is returned unchanged for callers that want it.
    pub async fn healthcheck(&self) -> CallOutcome {
        let outcome = self.get_record().await;

        match &outcome {
            Err(err) => {
                self.emit_offline().await;
                self.logger
                    .error(&format!("{}: healthcheck failed: {err}", self.id))
                    .await;
            }
            Ok(_) => {
                self.emit_online().await;
                self.logger
                    .debug(&format!("{}: healthcheck succeeded", self.id))
                    .await;
            }
        }

        outcome
    }

    /// Publish `ONLINE` with this adapter's id.
    pub async fn emit_online(&self) -> AdapterEvent {
        self.emit(AdapterStatus::Online).await
    }

    /// Publish `OFFLINE` with this adapter's id.
    pub async fn emit_offline(&self) -> AdapterEvent {
        self.emit(AdapterStatus::Offline).await
    }

    async fn emit(&self, status: AdapterStatus) -> AdapterEvent {
        let event = self.events.publish(AdapterEvent::new(status, &self.id));
        self.logger
            .info(&format!("{}: emitted {status}", self.id))
            .await;
        event
    }

    /// Fetch change tickets from the configured table.
    pub async fn get_record(&self) -> CallOutcome {
        self.connector.get().await
    }

    /// Issue a POST against the configured table.
    pub async fn post_record(&self) -> CallOutcome {
        self.connector.post().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ConnectorError, TransportError};
    use crate::domain::models::Credentials;
    use crate::domain::ports::{HttpMethod, HttpResponse, Level, RequestOptions};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Pops one scripted outcome per request.
    struct SequencedHttp {
        outcomes: Mutex<Vec<Result<HttpResponse, TransportError>>>,
        methods: Mutex<Vec<HttpMethod>>,
    }

    impl SequencedHttp {
        fn new(mut outcomes: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
            outcomes.reverse();
            Arc::new(Self {
                outcomes: Mutex::new(outcomes),
                methods: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpClient for SequencedHttp {
        async fn request(&self, options: RequestOptions) -> Result<HttpResponse, TransportError> {
            self.methods.lock().unwrap().push(options.method);
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingLogger {
        fn has(&self, level: Level, needle: &str) -> bool {
            self.lines
                .lock()
                .unwrap()
                .iter()
                .any(|(l, line)| *l == level && line.contains(needle))
        }
    }

    #[async_trait]
    impl Logger for RecordingLogger {
        async fn log(&self, level: Level, message: &str, _fields: HashMap<String, Value>) {
            self.lines.lock().unwrap().push((level, message.to_string()));
        }
    }

    fn adapter(
        outcomes: Vec<Result<HttpResponse, TransportError>>,
    ) -> (ServiceNowAdapter, Arc<SequencedHttp>, Arc<RecordingLogger>) {
        let http = SequencedHttp::new(outcomes);
        let logger = Arc::new(RecordingLogger::default());
        let properties = AdapterProperties::new(
            "https://dev1234.service-now.com",
            Credentials::new("admin", "secret"),
            "change_request",
        );
        let adapter = ServiceNowAdapter::new("sn-test", properties, http.clone(), logger.clone());
        (adapter, http, logger)
    }

    fn ok_body() -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse::new(
            200,
            r#"{"result":[{"number":"CHG001","sys_id":"abc","risk":"high"}]}"#,
        ))
    }

    #[tokio::test]
    async fn test_healthcheck_success_emits_online() {
        let (adapter, _, logger) = adapter(vec![ok_body()]);
        let mut rx = adapter.subscribe();

        let tickets = adapter.healthcheck().await.unwrap().unwrap();

        assert_eq!(tickets[0].number(), Some("CHG001"));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.status, AdapterStatus::Online);
        assert_eq!(event.payload.id, "sn-test");
        assert!(logger.has(Level::Debug, "healthcheck succeeded"));
    }

    #[tokio::test]
    async fn test_healthcheck_failure_emits_offline_and_logs_error() {
        let (adapter, _, logger) = adapter(vec![Ok(HttpResponse::new(500, "oops"))]);
        let mut rx = adapter.subscribe();

        let err = adapter.healthcheck().await.unwrap_err();

        assert!(matches!(err, ConnectorError::Status(_)));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.status, AdapterStatus::Offline);
        assert!(logger.has(Level::Error, "sn-test: healthcheck failed"));
    }

    #[tokio::test]
    async fn test_empty_body_counts_as_online() {
        let (adapter, _, _) = adapter(vec![Ok(HttpResponse::new(200, ""))]);
        let mut rx = adapter.subscribe();

        assert!(adapter.healthcheck().await.unwrap().is_none());
        assert_eq!(rx.recv().await.unwrap().status, AdapterStatus::Online);
    }

    #[tokio::test]
    async fn test_status_flips_between_healthchecks() {
        let (adapter, _, _) = adapter(vec![
            ok_body(),
            Err(TransportError::Timeout("30s".to_string())),
            ok_body(),
        ]);
        let mut rx = adapter.subscribe();

        adapter.connect().await;
        adapter.connect().await;
        adapter.connect().await;

        let statuses: Vec<AdapterStatus> = vec![
            rx.recv().await.unwrap().status,
            rx.recv().await.unwrap().status,
            rx.recv().await.unwrap().status,
        ];
        assert_eq!(
            statuses,
            vec![AdapterStatus::Online, AdapterStatus::Offline, AdapterStatus::Online]
        );
    }

    #[tokio::test]
    async fn test_record_operations_delegate_to_connector() {
        let (adapter, http, _) = adapter(vec![ok_body(), Ok(HttpResponse::new(201, ""))]);

        assert!(adapter.get_record().await.unwrap().is_some());
        assert!(adapter.post_record().await.unwrap().is_none());
        assert_eq!(
            *http.methods.lock().unwrap(),
            vec![HttpMethod::Get, HttpMethod::Post]
        );
    }

    #[tokio::test]
    async fn test_emit_helpers_carry_instance_id() {
        let (adapter, _, logger) = adapter(vec![]);
        let online = adapter.emit_online().await;
        let offline = adapter.emit_offline().await;

        assert_eq!(online.name(), "ONLINE");
        assert_eq!(offline.name(), "OFFLINE");
        assert_eq!(offline.payload.id, "sn-test");
        assert!(online.sequence < offline.sequence);
        assert!(logger.has(Level::Info, "emitted OFFLINE"));
    }
}
