use crate::{Article, ArticleId};

/// Outcome of a [`Favorites::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The user's favorite articles, in insertion order, unique by identifier.
///
/// The collection is mutated only through [`Favorites::toggle`] and
/// [`Favorites::replace_all`] (startup hydration). There is no size bound and
/// no eviction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<Article>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff an entry with the same identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Remove the entry with the article's identifier if present, otherwise
    /// append the article at the end.
    pub fn toggle(&mut self, article: Article) -> Toggled {
        if let Some(index) = self.entries.iter().position(|entry| entry.id == article.id) {
            self.entries.remove(index);
            Toggled::Removed
        } else {
            self.entries.push(article);
            Toggled::Added
        }
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot for the persistence effect.
    pub fn to_vec(&self) -> Vec<Article> {
        self.entries.clone()
    }

    /// Adopt a hydrated collection wholesale, keeping the first occurrence of
    /// each identifier. Duplicates only appear if the storage blob was
    /// tampered with; dropping them preserves the uniqueness invariant.
    pub fn replace_all(&mut self, articles: Vec<Article>) {
        let mut seen: Vec<ArticleId> = Vec::with_capacity(articles.len());
        self.entries = articles
            .into_iter()
            .filter(|article| {
                if seen.iter().any(|id| *id == article.id) {
                    false
                } else {
                    seen.push(article.id.clone());
                    true
                }
            })
            .collect();
    }
}
