//! Book records as they appear in the catalogue.

use serde::{Deserialize, Serialize};
use shelf_types::{BookTitle, Category, NonEmptyText};

/// A single catalogue entry.
///
/// Records are immutable once loaded. `title` is the catalogue's lookup key and is unique
/// within a [`Catalog`](crate::Catalog).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookRecord {
    pub title: BookTitle,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<NonEmptyText>,
    /// Cover image path, relative to the assets directory, or an absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<NonEmptyText>,
}

impl BookRecord {
    /// Create a record with only the fields the catalogue needs for lookup and filtering.
    pub fn new(title: BookTitle, category: Category) -> Self {
        Self {
            title,
            category,
            author: None,
            cover: None,
            summary: None,
        }
    }

    pub fn with_author(mut self, author: NonEmptyText) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn is_in(&self, category: &Category) -> bool {
        &self.category == category
    }
}
