//! Lists the first page of `posts` from a CRUD-convention API.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example list_posts -- http://localhost:3000
//! ```

use crud_provider::clients::ResourceClient;
use crud_provider::model::{GetListParams, Pagination};
use crud_provider::query::{QuerySort, SortOrder};
use crud_provider::runtime::setup_tracing;
use crud_provider::DataProvider;
use serde_json::json;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), crud_provider::ProviderError> {
    setup_tracing();

    let api_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let provider = DataProvider::with_default_transport(api_url)?;
    let posts = provider.resource("posts");

    let params = GetListParams {
        pagination: Pagination::new(1, 10),
        sort: Some(QuerySort::new("id", SortOrder::Desc)),
        filter: json!({ "isPublished": true }),
    };

    let span = tracing::info_span!("list_posts");
    match posts.get_list(params).instrument(span).await {
        Ok(page) => info!(total = ?page.total(), data = ?page.data(), "Fetched posts"),
        Err(e) => error!(error = %e, "Listing posts failed"),
    }

    Ok(())
}
