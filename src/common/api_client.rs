use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Invalid request URL: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct ApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create api client
    ///
    /// # Panics
    /// if it can't create the client.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http_client: Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiClientError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(name, value)| (*name, value.as_str())));
        }
        Ok(url)
    }

    /// GET `path` under the base URL and decode the JSON response body.
    ///
    /// The API key is sent in the `Authorization` header on every request.
    /// Query parameters are appended only when `query` is non-empty.
    ///
    /// # Errors
    /// * If the request URL can't be built.
    /// * If the GET request can't be made.
    /// * If a non-2xx status code is received.
    /// * If the body can't be decoded into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiClientError> {
        let url = self.build_url(path, query)?;
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = response.text().await?;
            Err(ApiClientError::UnexpectedStatus { status, text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("https://api.pexels.com/v1", "test-key")
    }

    #[test]
    fn builds_url_without_query() {
        let url = client().build_url("curated", &[]).unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://api.pexels.com/v1/curated");
    }

    #[test]
    fn builds_url_with_query_pairs() {
        let url = client()
            .build_url(
                "search",
                &[("query", "nature".to_string()), ("page", "2".to_string())],
            )
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://api.pexels.com/v1/search?query=nature&page=2");
    }

    #[test]
    fn trailing_and_leading_slashes_collapse() {
        let client = ApiClient::new("https://api.pexels.com/v1/", "test-key");
        let url = client.build_url("/curated", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.pexels.com/v1/curated");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let url = client()
            .build_url("search", &[("query", "northern lights".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pexels.com/v1/search?query=northern+lights"
        );
    }

    #[test]
    fn bad_base_url_is_reported_as_bad_url() {
        let client = ApiClient::new("not a url", "test-key");
        let err = client.build_url("curated", &[]).unwrap_err();
        assert!(matches!(err, ApiClientError::BadUrl(_)));
    }

    #[test]
    fn status_error_display_names_the_status() {
        let err = ApiClientError::UnexpectedStatus {
            status: StatusCode::TOO_MANY_REQUESTS,
            text: "rate limit".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"Unexpected status 429 Too Many Requests: rate limit");
    }
}
