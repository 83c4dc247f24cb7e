//! Favorites persistence glue.
//!
//! Hydration and persistence failures are swallowed here: a corrupt or
//! unreadable blob yields an empty favorites list and a failed write is
//! dropped, both logged but never surfaced to the caller. The fallible layer
//! lives in `newsreader_engine::favorites` for code that needs to observe
//! the errors.

use std::path::PathBuf;

use newsreader_core::Article as CoreArticle;
use newsreader_engine::{
    decode_favorites, encode_favorites, Article as EngineArticle, FavoritesStorage, FAVORITES_KEY,
};
use reader_logging::{reader_error, reader_info, reader_warn};

const DATA_DIR_ENV: &str = "NEWSREADER_DATA_DIR";

/// Directory holding the favorites blob: `$NEWSREADER_DATA_DIR` when set,
/// otherwise `./newsreader_data`.
pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("newsreader_data")
}

pub(crate) fn load_favorites(storage: &dyn FavoritesStorage) -> Vec<CoreArticle> {
    let bytes = match storage.load(FAVORITES_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(err) => {
            reader_warn!("Failed to read favorites blob: {}", err);
            return Vec::new();
        }
    };

    match decode_favorites(&bytes) {
        Ok(articles) => {
            reader_info!("Hydrated {} favorite(s)", articles.len());
            articles.into_iter().map(to_core_article).collect()
        }
        Err(err) => {
            reader_warn!("Failed to parse favorites blob: {}", err);
            Vec::new()
        }
    }
}

pub(crate) fn save_favorites(storage: &dyn FavoritesStorage, favorites: &[CoreArticle]) {
    let articles: Vec<EngineArticle> = favorites.iter().map(to_engine_article).collect();
    let blob = match encode_favorites(&articles) {
        Ok(blob) => blob,
        Err(err) => {
            reader_error!("Failed to serialize favorites: {}", err);
            return;
        }
    };
    if let Err(err) = storage.save(FAVORITES_KEY, &blob) {
        reader_error!("Failed to write favorites blob: {}", err);
    }
}

pub(crate) fn to_core_article(article: EngineArticle) -> CoreArticle {
    CoreArticle {
        id: article.id,
        title: article.title,
        description: article.description,
        url: article.url,
        image_url: article.image_url,
    }
}

fn to_engine_article(article: &CoreArticle) -> EngineArticle {
    EngineArticle {
        id: article.id.clone(),
        title: article.title.clone(),
        description: article.description.clone(),
        url: article.url.clone(),
        image_url: article.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use newsreader_engine::FileFavoritesStorage;
    use tempfile::TempDir;

    use super::*;

    fn favorite(id: &str, title: &str) -> CoreArticle {
        CoreArticle {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            url: format!("https://news.test/{id}"),
            image_url: None,
        }
    }

    #[test]
    fn save_then_load_round_trips_through_the_file_store() {
        let temp = TempDir::new().unwrap();
        let storage = FileFavoritesStorage::new(temp.path().to_path_buf());
        let favorites = vec![favorite("id-1", "First"), favorite("id-2", "Second")];

        save_favorites(&storage, &favorites);

        // A fresh store instance hydrates the same collection.
        let reopened = FileFavoritesStorage::new(temp.path().to_path_buf());
        assert_eq!(load_favorites(&reopened), favorites);
    }

    #[test]
    fn missing_blob_hydrates_empty() {
        let temp = TempDir::new().unwrap();
        let storage = FileFavoritesStorage::new(temp.path().to_path_buf());
        assert!(load_favorites(&storage).is_empty());
    }

    #[test]
    fn corrupt_blob_hydrates_empty_without_erroring() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FAVORITES_KEY), "{ not json").unwrap();

        let storage = FileFavoritesStorage::new(temp.path().to_path_buf());
        assert!(load_favorites(&storage).is_empty());
    }

    #[test]
    fn failed_write_is_swallowed() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("not_a_dir");
        fs::write(&file_path, "x").unwrap();

        // The data "directory" is a plain file; the save fails internally.
        let storage = FileFavoritesStorage::new(file_path);
        save_favorites(&storage, &[favorite("id-1", "First")]);
    }
}
