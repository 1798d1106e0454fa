//! Runtime concerns around the translator.
//!
//! - [`ProviderConfig`] - Base URL and query grammar
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`HttpTransport`] - Default `reqwest` transport (feature `http-client`)

pub mod config;
#[cfg(feature = "http-client")]
pub mod http;
pub mod tracing;

pub use config::*;
#[cfg(feature = "http-client")]
pub use http::*;
pub use self::tracing::*;
