//! Port traits (hexagonal architecture).
//!
//! The adapter and connector depend only on these traits; concrete
//! implementations live in `infrastructure`.

pub mod http_client;
pub mod logger;

pub use http_client::{HttpClient, HttpMethod, HttpResponse, RequestOptions};
pub use logger::{Level, Logger};
