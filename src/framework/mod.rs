//! The transport seam between the translator and the network.
//!
//! # Main Components
//!
//! - [`Transport`] - Trait the injected HTTP collaborator implements
//! - [`HttpRequest`] / [`HttpResponse`] - Descriptors exchanged with the transport
//! - [`TransportError`] - Transport failures, passed through to callers
//!
//! # Testing
//!
//! See [`mock`] module for an in-memory transport with expectations.

pub mod core;
pub mod mock;

pub use self::core::*;
