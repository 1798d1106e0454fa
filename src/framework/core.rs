//! # Transport Seam
//!
//! This module defines the boundary between the translator and the network.
//!
//! ## Key Types
//!
//! - [`Transport`]: The trait the injected HTTP collaborator implements.
//! - [`HttpRequest`] / [`HttpResponse`]: What crosses the seam in each direction.
//! - [`TransportError`]: Failures reported by a transport. Passed through untouched.
//! - [`FnTransport`]: Adapts an async closure into a [`Transport`].

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;

// =============================================================================
// 1. THE WIRE DESCRIPTORS
// =============================================================================

/// HTTP verbs used by the translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-built request handed to the [`Transport`].
///
/// The body is already serialized; headers are left to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: Method,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A plain `GET` with no body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// What a transport hands back: status, headers and the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub json: Value,
}

impl HttpResponse {
    /// A `200 OK` carrying `json` and no headers.
    pub fn ok(json: Value) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            json,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors reported by a [`Transport`].
///
/// The translator never inspects these; they reach the caller as
/// [`ProviderError::Transport`](crate::ProviderError::Transport).
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Value,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// A response arrived but could not be read.
    #[error("Decode error: {0}")]
    Decode(String),
}

// =============================================================================
// 3. THE TRANSPORT TRAIT
// =============================================================================

/// The injected collaborator that performs all network I/O.
///
/// Implementations must be shareable across tasks: the translator holds one
/// behind an `Arc` and may call it concurrently for bulk actions.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Wraps an async closure as a [`Transport`].
///
/// ```rust
/// use crud_provider::framework::{FnTransport, HttpRequest, HttpResponse, TransportError};
/// use serde_json::json;
///
/// let transport = FnTransport::new(|request: HttpRequest| async move {
///     Ok::<_, TransportError>(HttpResponse::ok(json!({ "url": request.url })))
/// });
/// # let _ = transport;
/// ```
pub struct FnTransport<F> {
    func: F,
}

impl<F> FnTransport<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, TransportError>> + Send,
{
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (self.func)(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_defaults_to_get() {
        assert_eq!(Method::default(), Method::Get);
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[tokio::test]
    async fn test_fn_transport_forwards_request() {
        let transport = FnTransport::new(|request: HttpRequest| async move {
            Ok::<_, TransportError>(HttpResponse::ok(json!({
                "url": request.url,
                "method": request.method.as_str(),
                "body": request.body,
            })))
        });

        let request = HttpRequest::new(Method::Post, "http://api/posts").with_body("{}");
        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            response.json,
            json!({ "url": "http://api/posts", "method": "POST", "body": "{}" })
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Http {
            status: 404,
            message: "Not Found".into(),
            body: Value::Null,
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
