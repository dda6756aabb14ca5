//! API-Football v3 access: HTTP client, response envelope and the
//! transformations from raw JSON into storable records.

pub mod http;
pub mod transform;
pub mod types;

pub use http::{ApiClient, API_FOOTBALL_BASE_URL};
pub use types::ApiEnvelope;
