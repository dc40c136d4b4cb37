//! HTTP client port.
//!
//! The connector never talks to the network directly. It describes a call
//! as [`RequestOptions`] and hands it to an [`HttpClient`] implementation,
//! which owns transport concerns such as TLS and timeouts.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::TransportError;
use crate::domain::models::config::Credentials;

/// HTTP methods used against the table API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Returns the wire representation of this method.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Request method.
    pub method: HttpMethod,
    /// Instance base URL, e.g. `https://dev1234.service-now.com`.
    pub base_url: String,
    /// Path and optional query, e.g. `/api/now/table/change_request?active=true`.
    pub path: String,
    /// HTTP Basic credentials.
    pub auth: Credentials,
}

impl RequestOptions {
    /// Join the base URL and path without doubling the separator.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// A received HTTP response, status and body included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Response headers in received order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
    /// Body decoded as text (may be empty).
    pub body: String,
}

impl HttpResponse {
    /// Build a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Add a header, builder style.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Whether the status code is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for issuing a single HTTP request.
///
/// Implementations must return `Err` only when no response was obtained
/// (connection refused, timeout, ...). Any received response, whatever its
/// status, is returned as `Ok` so that the connector can classify it.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue the request and return the raw response.
    async fn request(&self, options: RequestOptions) -> Result<HttpResponse, TransportError>;
}
