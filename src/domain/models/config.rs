use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure for the ServiceNow adapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Adapter identity and connection properties
    #[serde(default)]
    pub adapter: AdapterConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Adapter instance configuration, as handed over by the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Instance id carried by every emitted status event
    #[serde(default = "default_adapter_id")]
    pub id: String,

    /// Connection properties
    #[serde(default)]
    pub properties: AdapterProperties,
}

fn default_adapter_id() -> String {
    "servicenow".to_string()
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            id: default_adapter_id(),
            properties: AdapterProperties::default(),
        }
    }
}

/// Connection properties for one ServiceNow instance.
///
/// Field names follow the host's property document:
/// `{url, auth: {username, password}, serviceNowTable}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterProperties {
    /// Instance base URL
    #[serde(default)]
    pub url: String,

    /// Basic-auth credentials
    #[serde(default)]
    pub auth: Credentials,

    /// Target table name
    // Environment keys arrive lowercased.
    #[serde(
        rename = "serviceNowTable",
        alias = "servicenowtable",
        default = "default_table"
    )]
    pub service_now_table: String,
}

fn default_table() -> String {
    "change_request".to_string()
}

impl AdapterProperties {
    /// Create properties for the given instance.
    pub fn new(
        url: impl Into<String>,
        auth: Credentials,
        service_now_table: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            auth,
            service_now_table: service_now_table.into(),
        }
    }
}

impl Default for AdapterProperties {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth: Credentials::default(),
            service_now_table: default_table(),
        }
    }
}

/// HTTP Basic credentials. The password is redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
