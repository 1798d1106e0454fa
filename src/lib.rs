//! # CRUD Provider
//!
//! > **A data-provider adapter for CRUD-convention REST APIs.**
//!
//! UI frameworks ask for data in terms of *actions*: "get page 2 of `posts`
//! filtered by title", "create a `comment`", "delete these three `users`".
//! REST backends built on the CRUD query convention expect something else:
//! operator-suffixed filter conditions, `limit`/`page`/`offset` parameters and
//! `field,ORDER` sort clauses. This crate translates between the two, in both
//! directions.
//!
//! ## 🏗️ Design
//!
//! - **Pure mapping.** Building a request and reshaping a response are plain
//!   functions of their inputs. Nothing is cached, nothing is shared between calls.
//! - **Injected I/O.** All network traffic goes through the [`Transport`]
//!   trait. Use the bundled `reqwest` transport, a closure, or
//!   [`MockTransport`](framework::mock::MockTransport) in tests.
//! - **Typed actions.** Each action kind is a variant of
//!   [`ActionParams`](model::ActionParams) and is matched exhaustively. String
//!   kinds are parsed at the edge, where unknown ones are rejected.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Seam ([`framework`])
//! - **Role**: The boundary to the network.
//! - **Key items**: [`Transport`], [`HttpRequest`](framework::HttpRequest),
//!   [`HttpResponse`](framework::HttpResponse), [`mock`](framework::mock).
//!
//! ### 2. The Vocabulary ([`model`])
//! - **Role**: Actions in, results out.
//! - **Key items**: [`ActionRequest`], [`ActionKind`](model::ActionKind), [`ActionResult`].
//!
//! ### 3. The Grammar ([`query`])
//! - **Role**: Filter composition and query-string building.
//! - **Key items**: [`compose_filter`](query::compose_filter),
//!   [`RequestQueryBuilder`](query::RequestQueryBuilder), [`CondOperator`](query::CondOperator).
//!
//! ### 4. The Translator ([`clients`])
//! - **Role**: Turns actions into request plans, runs them, reshapes the answers.
//! - **Key items**: [`DataProvider`], [`ResourceClient`](clients::ResourceClient).
//!
//! ### 5. The Runtime ([`runtime`])
//! - **Role**: Configuration, logging setup and the default HTTP transport.
//! - **Key items**: [`ProviderConfig`](runtime::ProviderConfig), [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use crud_provider::model::{GetListParams, Pagination};
//! use crud_provider::{ActionRequest, DataProvider};
//! use serde_json::json;
//!
//! # #[cfg(feature = "http-client")]
//! #[tokio::main]
//! async fn main() -> Result<(), crud_provider::ProviderError> {
//!     let provider = DataProvider::with_default_transport("http://localhost:3000")?;
//!
//!     let page = provider
//!         .execute(ActionRequest::get_list(
//!             "posts",
//!             GetListParams {
//!                 pagination: Pagination::new(1, 10),
//!                 sort: None,
//!                 filter: json!({ "title": "rust" }),
//!             },
//!         ))
//!         .await?;
//!
//!     println!("{} posts in total", page.total().unwrap_or_default());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "http-client"))]
//! # fn main() {}
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod error;
pub mod framework;
pub mod model;
pub mod query;
pub mod runtime;

pub use clients::DataProvider;
pub use error::{ProviderError, Result};
pub use framework::Transport;
pub use model::{ActionRequest, ActionResult};
