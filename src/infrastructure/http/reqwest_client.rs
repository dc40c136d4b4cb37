//! `reqwest`-backed implementation of the [`HttpClient`] port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};

use crate::domain::errors::TransportError;
use crate::domain::models::HttpConfig;
use crate::domain::ports::{HttpClient, HttpMethod, HttpResponse, RequestOptions};

/// HTTP client for the ServiceNow REST API.
///
/// Timeouts are enforced here; the connector itself has none.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    /// The underlying HTTP client.
    http: Client,
}

impl ReqwestHttpClient {
    /// Wrap an existing `reqwest` client.
    pub const fn new(http: Client) -> Self {
        Self { http }
    }

    /// Build a client with the configured timeouts.
    pub fn with_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("servicenow-adapter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(http))
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

/// Classify a `reqwest` failure for the port's error type.
fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(&self, options: RequestOptions) -> Result<HttpResponse, TransportError> {
        let url = options.url();
        let resp = self
            .http
            .request(to_reqwest_method(options.method), &url)
            .basic_auth(&options.auth.username, Some(&options.auth.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp.text().await.map_err(|e| classify(&e))?;

        tracing::trace!(%url, status, body_len = body.len(), "ServiceNow response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
