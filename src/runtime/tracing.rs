//! # Observability & Tracing
//!
//! Every translated action runs inside a `data_provider` span carrying the
//! action `kind` and `resource`. Each outgoing request is logged at `debug`
//! with its method and URL; bulk actions log their fan-out width at `info`.
//! Errors are returned to the caller and never logged here.
//!
//! ```bash
//! # Show every outgoing request
//! RUST_LOG=crud_provider=debug cargo run --example list_posts
//! ```
//!
//! With `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG data_provider{kind=GET_LIST resource="posts"}: Sending request method=GET url=http://api/posts?limit=10&page=1&offset=0
//! INFO data_provider{kind=DELETE_MANY resource="posts"}: Fanning out requests=3
//! ```

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Call once, at application start-up.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
