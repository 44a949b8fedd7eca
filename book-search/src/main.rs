use std::env;

use dotenv::dotenv;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use book_search::{AppError, Dependencies};

/// Number of ids printed for a search.
const PAGE_SIZE: usize = 10;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let Dependencies { client } = Dependencies::new().await?;

    let count = client.count().await?;
    info!(count, "Counted index entries");

    // Remaining arguments form the query text; the page defaults to the first.
    let terms: Vec<String> = env::args().skip(1).collect();
    if terms.is_empty() {
        return Ok(());
    }

    let text = terms.join(" ");
    let ids = client.search_by_fields(&text, PAGE_SIZE, 1).await?;
    println!("{}", json!({ "query": text, "ids": ids }));

    Ok(())
}
