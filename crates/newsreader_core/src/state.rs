use crate::view_model::{AppViewModel, ArticleRowView};
use crate::{Article, Category, Favorites};

/// Monotonically increasing token for headlines requests.
///
/// A new request does not cancel an in-flight one; instead every fetch effect
/// carries the token minted here, and results echoing a superseded token are
/// dropped in `update`.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    articles: Vec<Article>,
    category: Option<Category>,
    loading: bool,
    error: Option<String>,
    favorites: Favorites,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            articles: self
                .articles
                .iter()
                .map(|article| self.row_view(article, self.favorites.contains(&article.id)))
                .collect(),
            favorites: self
                .favorites
                .iter()
                .map(|article| self.row_view(article, true))
                .collect(),
            category: self.category,
            loading: self.loading,
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    fn row_view(&self, article: &Article, favorite: bool) -> ArticleRowView {
        ArticleRowView {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            image_url: article.image_url.clone(),
            favorite,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Mint a token for a new headlines request and move into loading.
    pub(crate) fn begin_fetch(&mut self, category: Option<Category>) -> RequestId {
        self.next_request_id += 1;
        self.category = category;
        self.loading = true;
        self.latest_request = Some(self.next_request_id);
        self.next_request_id
    }

    pub(crate) fn is_latest(&self, request_id: RequestId) -> bool {
        self.latest_request == Some(request_id)
    }

    pub(crate) fn apply_headlines(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.loading = false;
        self.error = None;
    }

    /// Keep the previous articles visible; only the message changes.
    pub(crate) fn apply_fetch_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles
            .iter()
            .find(|article| article.id == id)
            .or_else(|| self.favorites.get(id))
    }

    pub(crate) fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }
}

/// Parse an article URL for handoff to the external viewer.
///
/// Only absolute http(s) URLs are accepted as navigation targets.
pub fn validate_article_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(String::from(parsed)),
        _ => None,
    }
}
