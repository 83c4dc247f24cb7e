use std::time::Duration;

use futures_util::StreamExt;

use crate::types::decode_headlines;
use crate::{Article, FailureKind, FetchError};

/// Fixed parameters of the headlines endpoint.
///
/// The API key falls back to the built-in default so a fresh checkout works
/// out of the box; deployments override it through `NEWSAPI_KEY` (read by the
/// app crate).
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub country: String,
}

impl NewsApiConfig {
    pub const DEFAULT_API_KEY: &'static str = "c4e86d1628904a1f852685c2f1a692ff";
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: Self::DEFAULT_API_KEY.to_string(),
            country: "us".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Injectable headlines-fetching capability.
#[async_trait::async_trait]
pub trait HeadlinesFetcher: Send + Sync {
    /// Fetch top headlines, optionally narrowed to one category value.
    async fn fetch_headlines(&self, category: Option<&str>) -> Result<Vec<Article>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestHeadlinesFetcher {
    config: NewsApiConfig,
    settings: FetchSettings,
}

impl ReqwestHeadlinesFetcher {
    pub fn new(config: NewsApiConfig, settings: FetchSettings) -> Self {
        Self { config, settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    /// `<base>/top-headlines?country=<cc>&apiKey=<key>[&category=<cat>]`.
    /// The category pair is appended only when a category is selected.
    fn headlines_url(&self, category: Option<&str>) -> Result<reqwest::Url, FetchError> {
        let endpoint = format!("{}/top-headlines", self.config.base_url.trim_end_matches('/'));
        let mut url = reqwest::Url::parse(&endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("country", &self.config.country)
            .append_pair("apiKey", &self.config.api_key);
        if let Some(category) = category.filter(|value| !value.is_empty()) {
            url.query_pairs_mut().append_pair("category", category);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl HeadlinesFetcher for ReqwestHeadlinesFetcher {
    async fn fetch_headlines(&self, category: Option<&str>) -> Result<Vec<Article>, FetchError> {
        let url = self.headlines_url(category)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_headlines(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    FetchError::new(FailureKind::Network, err.to_string())
}
