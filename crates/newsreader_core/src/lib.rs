//! Newsreader core: pure state machine and view-model helpers.
mod article;
mod effect;
mod favorites;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::{Article, ArticleId, Category, ParseCategoryError};
pub use effect::Effect;
pub use favorites::{Favorites, Toggled};
pub use msg::Msg;
pub use state::{validate_article_url, AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, ArticleRowView};
