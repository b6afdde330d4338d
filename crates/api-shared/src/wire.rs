//! Response types returned by the Shelf front ends.
//!
//! These are plain serde/utoipa structs so the REST layer can serialise them and publish them in
//! the OpenAPI document. Conversion from core records happens here so every front end renders a
//! book the same way.

use serde::{Deserialize, Serialize};
use shelf_core::{BookRecord, Category, ALL_CATEGORIES};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A book as shown to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<&BookRecord> for Book {
    fn from(record: &BookRecord) -> Self {
        Self {
            title: record.title.to_string(),
            category: record.category.to_string(),
            author: record.author.as_ref().map(ToString::to_string),
            cover: record.cover.clone(),
            summary: record.summary.as_ref().map(ToString::to_string),
        }
    }
}

/// Listing view: the filtered books plus what is needed to redraw the filter selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListBooksRes {
    pub panel: String,
    /// Effective filter, `"All"` when unfiltered.
    pub selected_category: String,
    pub categories: Vec<String>,
    pub books: Vec<Book>,
}

/// Detail view for a single book.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDetailRes {
    pub panel: String,
    pub book: Book,
}

/// The label echoed back for a filter: the category itself, or `"All"`.
pub fn selected_category_label(filter: Option<&Category>) -> String {
    filter
        .map(ToString::to_string)
        .unwrap_or_else(|| ALL_CATEGORIES.to_string())
}
