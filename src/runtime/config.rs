//! Provider configuration.
//!
//! A [`ProviderConfig`] is fixed once a [`DataProvider`](crate::DataProvider)
//! is built. It can be assembled in code or deserialized from any serde format:
//!
//! ```rust
//! use crud_provider::runtime::ProviderConfig;
//!
//! let config: ProviderConfig = serde_json::from_str(
//!     r#"{ "api_url": "http://localhost:3000", "query": { "array_format": "brackets" } }"#,
//! ).unwrap();
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ProviderError, Result};
use crate::query::QueryBuilderOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL every resource path is appended to. Used verbatim, so it
    /// should not end with `/`.
    pub api_url: String,
    #[serde(default)]
    pub query: QueryBuilderOptions,
}

impl ProviderConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            query: QueryBuilderOptions::default(),
        }
    }

    pub fn with_query_options(mut self, query: QueryBuilderOptions) -> Self {
        self.query = query;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ProviderError::Config("api_url must not be empty".into()));
        }
        if self.query.delim.is_empty() || self.query.delim_str.is_empty() {
            return Err(ProviderError::Config(
                "query delimiters must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `{api_url}/{resource}`
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_url, resource)
    }

    /// `{api_url}/{resource}/{id}`
    pub fn record_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.api_url, resource, id)
    }
}
