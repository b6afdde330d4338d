//! Catalogue queries used by the REST API and the CLI.
//!
//! Both operations are pure reads over an already-loaded [`Catalog`]. Filtering never fails:
//! a category nobody files books under simply yields an empty listing. A title lookup miss is
//! reported as [`CatalogError::NotFound`] so callers can decide what to show instead.

use crate::book::BookRecord;
use crate::catalog::Catalog;
use crate::constants::ALL_CATEGORIES;
use crate::error::{CatalogError, CatalogResult};
use shelf_types::{BookTitle, Category};
use std::sync::Arc;

/// Convert a raw `category` parameter into a filter.
///
/// Only a missing parameter and the [`ALL_CATEGORIES`] value mean "no filtering". Anything else,
/// blank input included, is taken verbatim as a filter, without trimming or case folding.
pub fn category_filter_from_param(param: Option<&str>) -> Option<Category> {
    match param {
        None | Some(ALL_CATEGORIES) => None,
        Some(raw) => Some(Category::filter_token(raw)),
    }
}

/// Read-only query service over a shared catalogue.
#[derive(Clone, Debug)]
pub struct CatalogQuery {
    catalog: Arc<Catalog>,
}

impl CatalogQuery {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// List books, optionally restricted to one category.
    ///
    /// With `None` every record is returned in catalogue order. With `Some(category)` only the
    /// records whose category matches exactly are returned, still in catalogue order.
    pub fn get_all_books(&self, category: Option<&Category>) -> Vec<&BookRecord> {
        let books: Vec<&BookRecord> = match category {
            None => self.catalog.books().iter().collect(),
            Some(category) => self
                .catalog
                .books()
                .iter()
                .filter(|book| book.is_in(category))
                .collect(),
        };
        tracing::debug!(
            category = category.map(Category::as_str).unwrap_or(ALL_CATEGORIES),
            matched = books.len(),
            "listed books"
        );
        books
    }

    /// Look up the book with exactly this title.
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` if no record has that title.
    pub fn get_book_by_title(&self, title: &str) -> CatalogResult<&BookRecord> {
        self.catalog
            .get(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_owned()))
    }

    /// Titles of every book, in catalogue order.
    pub fn titles(&self) -> Vec<&BookTitle> {
        self.catalog.books().iter().map(|book| &book.title).collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for book in self.catalog.books() {
            if !seen.contains(&&book.category) {
                seen.push(&book.category);
            }
        }
        seen
    }
}
