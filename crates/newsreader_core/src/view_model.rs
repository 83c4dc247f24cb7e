use crate::{ArticleId, Category};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub articles: Vec<ArticleRowView>,
    pub favorites: Vec<ArticleRowView>,
    pub category: Option<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub favorite: bool,
}
