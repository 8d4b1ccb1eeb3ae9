use crate::api::photos_structs::PhotoListResponse;
use crate::common::api_client::{ApiClient, ApiClientError};
use crate::models::photo::Photo;
use async_trait::async_trait;
use derive_more::Constructor;

const CURATED_PATH: &str = "curated";
const SEARCH_PATH: &str = "search";

/// The three listing operations the browsing layer needs from the photo
/// API. Implemented by [`PhotosApi`] for the live service and by test
/// doubles in the controller tests.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch the default curated page, no query parameters.
    async fn fetch_default(&self) -> Result<Vec<Photo>, ApiClientError>;

    /// Fetch a specific curated page, 1-based.
    async fn fetch_page(&self, page: usize) -> Result<Vec<Photo>, ApiClientError>;

    /// Search photos by query, 1-based page.
    async fn search(&self, query: &str, page: usize) -> Result<Vec<Photo>, ApiClientError>;
}

/// Live photo source over the authenticated API client.
#[derive(Constructor)]
pub struct PhotosApi {
    client: ApiClient,
}

impl PhotosApi {
    fn map_photos(response: PhotoListResponse) -> Vec<Photo> {
        response.photos.into_iter().map(Photo::from).collect()
    }
}

#[async_trait]
impl PhotoSource for PhotosApi {
    async fn fetch_default(&self) -> Result<Vec<Photo>, ApiClientError> {
        let response: PhotoListResponse = self.client.get(CURATED_PATH, &[]).await?;
        Ok(Self::map_photos(response))
    }

    async fn fetch_page(&self, page: usize) -> Result<Vec<Photo>, ApiClientError> {
        let response: PhotoListResponse = self
            .client
            .get(CURATED_PATH, &[("page", page.to_string())])
            .await?;
        Ok(Self::map_photos(response))
    }

    async fn search(&self, query: &str, page: usize) -> Result<Vec<Photo>, ApiClientError> {
        let response: PhotoListResponse = self
            .client
            .get(
                SEARCH_PATH,
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        Ok(Self::map_photos(response))
    }
}
