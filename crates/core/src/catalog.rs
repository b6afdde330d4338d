//! The in-memory book catalogue.
//!
//! A catalogue is loaded once at startup from a YAML file and is never mutated afterwards.
//!
//! ## File format
//!
//! ```text
//! books:
//!   - title: Dune
//!     category: SciFi
//!     author: Frank Herbert
//!     cover: covers/dune.svg
//!     summary: Desert planet politics.
//! ```
//!
//! Records keep the order they have in the file; that order is the catalogue order every
//! listing returns.

use crate::book::BookRecord;
use crate::error::{CatalogError, CatalogResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Immutable, ordered collection of book records with unique titles.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    by_title: HashMap<String, usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    books: Vec<BookRecord>,
}

impl Catalog {
    /// Build a catalogue from records in catalogue order.
    ///
    /// # Errors
    /// Returns `CatalogError::DuplicateTitle` if two records share a title.
    pub fn new(books: Vec<BookRecord>) -> CatalogResult<Self> {
        let mut by_title = HashMap::with_capacity(books.len());
        for (index, book) in books.iter().enumerate() {
            if by_title
                .insert(book.title.as_str().to_owned(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateTitle(book.title.to_string()));
            }
        }
        Ok(Self { books, by_title })
    }

    /// Parse a catalogue from YAML text.
    ///
    /// # Errors
    /// Returns `CatalogError::YamlDeserialization` for malformed YAML, unknown keys or blank
    /// titles/categories, and `CatalogError::DuplicateTitle` for repeated titles.
    pub fn parse(yaml: &str) -> CatalogResult<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(CatalogError::YamlDeserialization)?;
        Self::new(file.books)
    }

    /// Read and parse a catalogue file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            tracing::error!("failed to read catalogue {}: {}", path.display(), e);
            CatalogError::FileRead(e)
        })?;
        let catalog = Self::parse(&contents).inspect_err(|e| {
            tracing::error!("rejected catalogue {}: {}", path.display(), e);
        })?;
        tracing::info!(
            "loaded {} books from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All records, in catalogue order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn get(&self, title: &str) -> Option<&BookRecord> {
        self.by_title.get(title).map(|&index| &self.books[index])
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
