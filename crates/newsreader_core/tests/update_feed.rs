use std::sync::Once;

use newsreader_core::{update, AppState, Article, Category, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn article(id: &str, title: &str, url: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        url: url.to_string(),
        image_url: None,
    }
}

#[test]
fn refresh_emits_fetch_effect_and_enters_loading() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::Refresh);
    let view = state.view();

    assert!(view.loading);
    assert!(view.dirty);
    assert_eq!(view.category, None);
    assert_eq!(
        effects,
        vec![Effect::FetchHeadlines {
            request_id: 1,
            category: None,
        }]
    );
}

#[test]
fn category_switch_mints_fresh_token_with_chosen_category() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Refresh);

    let (state, effects) = update(state, Msg::CategorySelected(Some(Category::Technology)));

    assert_eq!(state.view().category, Some(Category::Technology));
    assert_eq!(
        effects,
        vec![Effect::FetchHeadlines {
            request_id: 2,
            category: Some(Category::Technology),
        }]
    );
}

#[test]
fn reselecting_current_category_is_a_noop() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::CategorySelected(Some(Category::Health)));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::CategorySelected(Some(Category::Health)));

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn loaded_articles_replace_feed_and_clear_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Refresh);
    let request_id = fetch_request_id(&effects);

    let (state, _) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id,
            result: Err("network error".to_string()),
        },
    );
    assert_eq!(state.view().error.as_deref(), Some("network error"));

    let (state, effects) = update(state, Msg::Refresh);
    let request_id = fetch_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id,
            result: Ok(vec![
                article("a1", "First", "https://news.test/1"),
                article("a2", "Second", "https://news.test/2"),
            ]),
        },
    );

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(
        view.articles
            .iter()
            .map(|row| row.title.as_str())
            .collect::<Vec<_>>(),
        vec!["First", "Second"]
    );
}

#[test]
fn fetch_failure_keeps_previous_articles() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Refresh);
    let request_id = fetch_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id,
            result: Ok(vec![article("a1", "Kept", "https://news.test/1")]),
        },
    );

    let (state, effects) = update(state, Msg::Refresh);
    let request_id = fetch_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id,
            result: Err("HTTP status 503".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("HTTP status 503"));
    assert_eq!(view.articles.len(), 1);
    assert_eq!(view.articles[0].title, "Kept");
}

#[test]
fn stale_result_is_dropped_without_touching_state() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Refresh);
    let first_request = fetch_request_id(&effects);

    // A second request supersedes the first before its result lands.
    let (mut state, effects) = update(state, Msg::CategorySelected(Some(Category::Sports)));
    let second_request = fetch_request_id(&effects);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id: first_request,
            result: Ok(vec![article("old", "Stale", "https://news.test/old")]),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(state.view().articles.is_empty());
    assert!(state.view().loading);

    let (state, _) = update(
        state,
        Msg::HeadlinesLoaded {
            request_id: second_request,
            result: Ok(vec![article("new", "Fresh", "https://news.test/new")]),
        },
    );
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.articles[0].title, "Fresh");
}

#[test]
fn tick_and_noop_produce_no_effects() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Tick);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

fn fetch_request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchHeadlines { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}
