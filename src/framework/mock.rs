//! # Mock Transport
//!
//! `MockTransport` implements [`Transport`] entirely in memory. Tests register
//! the requests they expect and what each one should answer, then hand the
//! mock to a [`DataProvider`](crate::clients::DataProvider) in place of a real
//! HTTP client.
//!
//! ## When to use Mocks vs a Real Server
//!
//! | Feature | MockTransport | Real Server |
//! |---------|---------------|-------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | Fully deterministic, delays included | Subject to the server |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Checking the URLs/bodies the translator builds | End-to-end checks |
//!
//! ## Example
//!
//! ```rust
//! use crud_provider::framework::{mock::MockTransport, Method};
//! use crud_provider::{ActionRequest, DataProvider};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Get, "http://api/posts/1")
//!         .return_json(json!({ "id": 1, "title": "Hello" }));
//!
//!     let provider = DataProvider::new("http://api", mock.clone());
//!     let result = provider
//!         .execute(ActionRequest::get_one("posts", 1))
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(result.data(), Some(&json!({ "id": 1, "title": "Hello" })));
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use crud_provider::framework::{mock::MockTransport, Method, TransportError};
//! use crud_provider::{ActionRequest, DataProvider, ProviderError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Delete, "http://api/posts/1")
//!         .return_err(TransportError::Network("connection reset".into()));
//!
//!     let provider = DataProvider::new("http://api", mock.clone());
//!     let result = provider.execute(ActionRequest::delete("posts", 1)).await;
//!     assert!(matches!(result, Err(ProviderError::Transport(TransportError::Network(_)))));
//! }
//! ```

use crate::framework::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer for it.
struct Expectation {
    method: Method,
    url: String,
    delay: Option<Duration>,
    response: Result<HttpResponse, TransportError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<HttpRequest>,
}

/// An in-memory transport with expectation tracking.
///
/// Expectations are matched on method and URL, first registered first used,
/// so concurrent requests may arrive in any order. A request with no matching
/// expectation panics.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one request with the given method and URL.
    pub fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            state: self.state.clone(),
            method,
            url: url.into(),
            delay: None,
        }
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            let pending: Vec<String> = state
                .expectations
                .iter()
                .map(|e| format!("{} {}", e.method, e.url))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                pending.len(),
                pending
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.received.push(request.clone());
            let position = state
                .expectations
                .iter()
                .position(|e| e.method == request.method && e.url == request.url);
            match position {
                Some(index) => state.expectations.remove(index),
                None => None,
            }
        };

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.url);
        };

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    method: Method,
    url: String,
    delay: Option<Duration>,
}

impl ExpectationBuilder {
    /// Delays the answer, e.g. to make fan-out responses complete out of order.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answers with `200 OK` and the given JSON body.
    pub fn return_json(self, json: Value) {
        self.return_ok(HttpResponse::ok(json));
    }

    /// Answers with the given response.
    pub fn return_ok(self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Fails the request with the given error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, TransportError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            url: self.url,
            delay: self.delay,
            response,
        });
    }
}
