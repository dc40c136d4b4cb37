//! Infrastructure layer module
//!
//! Concrete implementations of the domain ports plus process setup:
//! - HTTP transport (reqwest)
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod http;
pub mod logging;
