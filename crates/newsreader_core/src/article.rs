use std::fmt;
use std::str::FromStr;

/// Locally assigned article identifier, stable for the value's lifetime.
///
/// Identity for favorite membership is this identifier, not the article URL;
/// two fetches of the same real-world story carry distinct identifiers.
pub type ArticleId = String;

/// One news item as shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
}

/// Headline category filter accepted by the news API.
///
/// Absence of a category means "all headlines".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// The full fixed vocabulary, in display order.
    pub const ALL: [Category; 6] = [
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// The query-parameter value for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not part of the category vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseCategoryError {
                input: input.to_string(),
            })
    }
}
