//! Newsreader engine: headlines fetching and favorites persistence.
mod engine;
mod favorites;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use favorites::{
    decode_favorites, encode_favorites, ensure_data_dir, FavoritesStorage, FileFavoritesStorage,
    MemoryFavoritesStorage, StorageError, FAVORITES_KEY,
};
pub use fetch::{FetchSettings, HeadlinesFetcher, NewsApiConfig, ReqwestHeadlinesFetcher};
pub use types::{decode_headlines, Article, EngineEvent, FailureKind, FetchError, RequestId};
