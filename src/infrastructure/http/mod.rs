//! HTTP transport adapters.

pub mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;
