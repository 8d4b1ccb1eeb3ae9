use anyhow::Result;
use photos_browser::api::photo_query::PhotoQueryService;
use photos_browser::api::photos_api::PhotosApi;
use photos_browser::browse::{BrowseController, BrowseIntent};
use photos_browser::common::api_client::ApiClient;
use photos_browser::common::settings::Settings;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fetch one page against the live API and print it: the curated listing
/// by default, or search results when a query argument is given.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let api = PhotosApi::new(ApiClient::new(&settings.base_url, &settings.api_key));
    let handle = BrowseController::spawn(PhotoQueryService::new(Arc::new(api)));
    let mut states = handle.watch();

    match std::env::args().nth(1) {
        Some(query) => handle.send(BrowseIntent::SearchTextChanged(query)),
        None => handle.send(BrowseIntent::ViewAppeared),
    }

    // Wait for the first publish that leaves the controller idle again.
    let state = loop {
        states.changed().await?;
        let state = states.borrow_and_update().clone();
        if !state.is_loading {
            break state;
        }
    };

    if let Some(error) = &state.last_error {
        anyhow::bail!("Fetch failed: {error}");
    }
    for photo in state.display_rows() {
        println!(
            "{:>9}  {:<24}  {}",
            photo.id, photo.photographer_name, photo.alt
        );
    }
    Ok(())
}
