//! # Provider Errors
//!
//! Every fallible operation in this crate returns [`ProviderError`]. Transport
//! failures are wrapped as-is so callers can match on the original error.

use crate::framework::TransportError;
use thiserror::Error;

/// Errors that can occur while translating or executing an action.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The action kind is not one of the supported data-provider actions.
    #[error("Unsupported fetch action type {0}")]
    UnsupportedAction(String),

    /// A filter, sort or numeric query parameter was rejected by the query builder.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Untyped action parameters did not match the shape the action needs.
    #[error("Invalid params for {kind}: {source}")]
    InvalidParams {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The provider configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The injected transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
