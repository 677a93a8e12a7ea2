//! Search backend: HTTP client, wire types and errors

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod stub;

pub use api::BackendClient;
pub use error::BackendError;
