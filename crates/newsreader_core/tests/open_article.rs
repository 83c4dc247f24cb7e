use std::sync::Once;

use newsreader_core::{update, validate_article_url, AppState, Article, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn state_with_article(url: &str) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::RestoreFavorites(vec![Article {
            id: "a1".to_string(),
            title: "Story".to_string(),
            description: None,
            url: url.to_string(),
            image_url: None,
        }]),
    );
    state
}

#[test]
fn valid_https_url_is_handed_to_the_viewer() {
    init_logging();
    let state = state_with_article("https://news.test/story");

    let (state, effects) = update(state, Msg::OpenArticle("a1".to_string()));

    assert_eq!(
        effects,
        vec![Effect::OpenArticle {
            url: "https://news.test/story".to_string(),
        }]
    );
    assert_eq!(state.view().error, None);
}

#[test]
fn malformed_url_reports_an_error_instead() {
    init_logging();
    let state = state_with_article("not a url");

    let (state, effects) = update(state, Msg::OpenArticle("a1".to_string()));

    assert!(effects.is_empty());
    assert_eq!(
        state.view().error.as_deref(),
        Some("invalid article URL: not a url")
    );
}

#[test]
fn non_http_scheme_is_rejected() {
    init_logging();
    let state = state_with_article("ftp://news.test/story");

    let (_state, effects) = update(state, Msg::OpenArticle("a1".to_string()));
    assert!(effects.is_empty());
}

#[test]
fn validate_article_url_accepts_only_absolute_http() {
    init_logging();
    assert_eq!(
        validate_article_url("http://news.test/1"),
        Some("http://news.test/1".to_string())
    );
    assert!(validate_article_url("javascript:alert(1)").is_none());
    assert!(validate_article_url("/relative/path").is_none());
    assert!(validate_article_url("").is_none());
}
