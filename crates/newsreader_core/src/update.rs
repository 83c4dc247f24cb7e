use crate::state::validate_article_url;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Refresh => {
            let category = state.category();
            let request_id = state.begin_fetch(category);
            state.mark_dirty();
            vec![Effect::FetchHeadlines {
                request_id,
                category,
            }]
        }
        Msg::CategorySelected(category) => {
            if category == state.category() {
                return (state, Vec::new());
            }
            let request_id = state.begin_fetch(category);
            state.mark_dirty();
            vec![Effect::FetchHeadlines {
                request_id,
                category,
            }]
        }
        Msg::HeadlinesLoaded { request_id, result } => {
            // Results of superseded requests are dropped wholesale so a slow
            // response cannot overwrite a newer category's articles.
            if !state.is_latest(request_id) {
                return (state, Vec::new());
            }
            match result {
                Ok(articles) => state.apply_headlines(articles),
                Err(message) => state.apply_fetch_error(message),
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleFavorite(id) => {
            let Some(article) = state.article_by_id(&id).cloned() else {
                return (state, Vec::new());
            };
            state.favorites_mut().toggle(article);
            state.mark_dirty();
            vec![Effect::PersistFavorites(state.favorites().to_vec())]
        }
        Msg::RestoreFavorites(articles) => {
            state.favorites_mut().replace_all(articles);
            state.mark_dirty();
            Vec::new()
        }
        Msg::OpenArticle(id) => {
            let Some(article) = state.article_by_id(&id) else {
                return (state, Vec::new());
            };
            match validate_article_url(&article.url) {
                Some(url) => vec![Effect::OpenArticle { url }],
                None => {
                    let raw = article.url.clone();
                    state.set_error(format!("invalid article URL: {raw}"));
                    state.mark_dirty();
                    Vec::new()
                }
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
