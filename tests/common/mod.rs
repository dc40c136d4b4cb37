//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files:
//! a recording logger and adapter/connector builders pointed at a
//! mock server.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use servicenow_adapter::{
    AdapterProperties, Credentials, HttpConfig, Level, Logger, ReqwestHttpClient,
    ServiceNowAdapter, ServiceNowConnector,
};

/// Basic credentials used by every fixture.
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

/// `Authorization` header value for `admin:secret`.
pub const BASIC_AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// Default table API path for the fixtures.
pub const TABLE_PATH: &str = "/api/now/table/change_request";

/// Logger that keeps every line for later assertions.
#[derive(Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines()
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

/// Connection properties for the given base URL.
pub fn properties(url: &str) -> AdapterProperties {
    AdapterProperties::new(url, Credentials::new(USERNAME, PASSWORD), "change_request")
}

/// Production HTTP client with short timeouts.
pub fn http_client() -> Arc<ReqwestHttpClient> {
    let config = HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    Arc::new(ReqwestHttpClient::with_config(&config).expect("HTTP client should build"))
}

/// Adapter wired to the production HTTP client.
pub fn adapter_for(url: &str) -> (ServiceNowAdapter, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let adapter = ServiceNowAdapter::new("sn-it", properties(url), http_client(), logger.clone());
    (adapter, logger)
}

/// Connector wired to the production HTTP client.
pub fn connector_for(url: &str) -> (ServiceNowConnector, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let connector = ServiceNowConnector::new(properties(url), http_client(), logger.clone());
    (connector, logger)
}

/// A base URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Static page served by a hibernating instance.
pub fn hibernating_page() -> String {
    concat!(
        "<!DOCTYPE html>\n<html>\n<head><title>Instance Hibernating page</title></head>\n",
        "<body><p>Your instance is hibernating. Log in to wake it up.</p></body>\n</html>\n"
    )
    .to_string()
}
