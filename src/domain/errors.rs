//! Domain errors for the ServiceNow adapter.

use thiserror::Error;

use crate::domain::ports::http_client::HttpResponse;

/// Failures raised by the HTTP client port before a response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Outcome errors of a single connector call.
///
/// Every failure is resolved into one of these variants at the connector
/// boundary. Callers only branch on the presence of an error; the variant
/// is there for diagnostics and for hosts that want to tell them apart.
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The instance answered with its static hibernation page.
    #[error("Hibernating instance")]
    Hibernating,

    /// The instance answered with a non-2xx status. Carries the raw response.
    #[error("Unexpected response status {}", .0.status)]
    Status(HttpResponse),

    /// The body was not a JSON document with a usable `result` member.
    #[error("Malformed response payload: {0}")]
    MalformedPayload(String),
}

impl ConnectorError {
    /// The raw response, when the error carries one.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Status(response) => Some(response),
            _ => None,
        }
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
