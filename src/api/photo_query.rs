use crate::api::photos_api::PhotoSource;
use crate::common::api_client::ApiClientError;
use crate::models::photo::Photo;
use derive_more::Constructor;
use std::sync::Arc;

/// Use-case facade over a [`PhotoSource`].
///
/// Pure pass-through. It exists so the browse controller depends on one
/// injected value and tests can swap the source behind it without the
/// controller noticing.
#[derive(Clone, Constructor)]
pub struct PhotoQueryService {
    source: Arc<dyn PhotoSource>,
}

impl PhotoQueryService {
    /// Load the default curated listing.
    ///
    /// # Errors
    /// Surfaces the source's transport error unchanged.
    pub async fn load(&self) -> Result<Vec<Photo>, ApiClientError> {
        self.source.fetch_default().await
    }

    /// Load a specific curated page, 1-based.
    ///
    /// # Errors
    /// Surfaces the source's transport error unchanged.
    pub async fn load_page(&self, page: usize) -> Result<Vec<Photo>, ApiClientError> {
        self.source.fetch_page(page).await
    }

    /// Search photos by query, 1-based page.
    ///
    /// # Errors
    /// Surfaces the source's transport error unchanged.
    pub async fn search(&self, query: &str, page: usize) -> Result<Vec<Photo>, ApiClientError> {
        self.source.search(query, page).await
    }
}
