use crate::{Article, ArticleId, Category, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Re-request headlines for the current category (screen entry, retry).
    Refresh,
    /// User switched the category filter; `None` means all headlines.
    CategorySelected(Option<Category>),
    /// Engine completion for a headlines request.
    HeadlinesLoaded {
        request_id: RequestId,
        result: Result<Vec<Article>, String>,
    },
    /// User tapped the favorite marker on an article.
    ToggleFavorite(ArticleId),
    /// Restore previously persisted favorites at startup.
    RestoreFavorites(Vec<Article>),
    /// User asked to open an article in the external viewer.
    OpenArticle(ArticleId),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
