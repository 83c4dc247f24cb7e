use crate::{Article, Category, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one headlines request. The request id is echoed back in
    /// `Msg::HeadlinesLoaded`; only the latest id's result is applied.
    FetchHeadlines {
        request_id: RequestId,
        category: Option<Category>,
    },
    /// Write the favorites snapshot to durable storage.
    PersistFavorites(Vec<Article>),
    /// Hand a validated URL to the external article viewer.
    OpenArticle { url: String },
}
