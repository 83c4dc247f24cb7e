use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use newsreader_core::{Article, Effect, Msg};
use newsreader_engine::{
    EngineEvent, EngineHandle, FetchSettings, FileFavoritesStorage, NewsApiConfig,
};
use reader_logging::{reader_info, reader_warn};

use crate::persistence;

const API_KEY_ENV: &str = "NEWSAPI_KEY";

/// Executes core effects against the engine and the favorites storage, and
/// pumps engine events back into the dispatch loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    storage: FileFavoritesStorage,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let mut config = NewsApiConfig::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        let engine = EngineHandle::new(config, FetchSettings::default());
        let storage = FileFavoritesStorage::new(persistence::data_dir());
        let runner = Self { engine, storage };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    /// Hydrate the persisted favorites; empty on first run or bad blob.
    pub fn load_favorites(&self) -> Vec<Article> {
        persistence::load_favorites(&self.storage)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchHeadlines {
                    request_id,
                    category,
                } => {
                    reader_info!(
                        "FetchHeadlines request_id={} category={}",
                        request_id,
                        category.map(|c| c.as_str()).unwrap_or("all")
                    );
                    self.engine
                        .enqueue_fetch(request_id, category.map(|c| c.as_str().to_string()));
                }
                Effect::PersistFavorites(favorites) => {
                    persistence::save_favorites(&self.storage, &favorites);
                }
                Effect::OpenArticle { url } => {
                    // Handoff point for the external viewer.
                    reader_info!("OpenArticle url={}", url);
                    println!("open in browser: {url}");
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::HeadlinesFetched { request_id, result } => {
                        let result = match result {
                            Ok(articles) => Ok(articles
                                .into_iter()
                                .map(persistence::to_core_article)
                                .collect()),
                            Err(err) => {
                                reader_warn!("Headlines request {} failed: {}", request_id, err);
                                Err(err.to_string())
                            }
                        };
                        if msg_tx
                            .send(Msg::HeadlinesLoaded { request_id, result })
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
