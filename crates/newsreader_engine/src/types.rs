use std::fmt;

use serde::{Deserialize, Serialize};

/// Token minted by the caller for one headlines request, echoed back with the
/// result so stale completions can be recognized.
pub type RequestId = u64;

/// One news item as decoded from the API or the favorites blob.
///
/// The identifier is assigned locally when the value is first decoded from
/// the wire (the API carries none) and travels with the article through
/// favorites persistence. Wire field names follow the API, so the persisted
/// JSON keeps `urlToImage` as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default = "fresh_article_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default, rename = "urlToImage")]
    pub image_url: Option<String>,
}

fn fresh_article_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Transient wire wrapper around one API response; unpacked and discarded.
/// Unknown sibling fields (`status`, `totalResults`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct NewsResponse {
    articles: Vec<Article>,
}

/// Decode a headlines response body.
///
/// Every article gets a fresh local identifier. A single malformed entry
/// (missing `title` or `url`) fails the whole call; extra JSON fields are
/// ignored.
pub fn decode_headlines(bytes: &[u8]) -> Result<Vec<Article>, FetchError> {
    let response: NewsResponse = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(response.articles)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Query composition failed; unreachable with the fixed endpoint.
    InvalidUrl,
    /// Transport-level failure (DNS, connection, timeout).
    Network,
    /// Response status outside 200-299.
    HttpStatus(u16),
    /// Response body exceeded the configured cap.
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body did not match the expected JSON shape.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    HeadlinesFetched {
        request_id: RequestId,
        result: Result<Vec<Article>, FetchError>,
    },
}
