//! REST client for the staffing backend.
//!
//! This crate owns every request the console makes to the backend and
//! exposes them as repositories, one per record type.
//!
//! # Configuration
//!
//! - `BACKEND_URL`: base URL of the backend (default `http://localhost:8080`)
//! - `BACKEND_TIMEOUT_SECS`: per-request timeout (default 30)

mod connection;
pub mod repositories;

pub use connection::{
    BackendClient, BackendConfig, BackendError, get_client, init_backend, try_get_client,
};

/// Initialize the backend client from the environment.
///
/// This should be called once at application startup.
pub fn init_from_env() -> Result<(), BackendError> {
    init_backend(BackendConfig::from_env())
}
