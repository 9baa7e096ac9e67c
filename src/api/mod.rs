//! Transport layer: the endpoint catalogue and the JSON API client.

mod client;
pub mod endpoints;
mod error;

pub use client::ApiClient;
pub use endpoints::Endpoint;
pub use error::ApiError;
