//! # Shelf Core
//!
//! Core catalogue logic for the Shelf book listing service.
//!
//! This crate contains pure data operations:
//! - Loading the read-only book catalogue from YAML
//! - Listing books, optionally filtered by category
//! - Looking up a single book by its title
//!
//! **No API concerns**: HTTP routing, redirects and rendering belong in `api-rest`; shared wire
//! types belong in `api-shared`.

pub mod book;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod query;

pub use book::BookRecord;
pub use catalog::Catalog;
pub use config::CoreConfig;
pub use constants::*;
pub use error::{CatalogError, CatalogResult};
pub use query::{category_filter_from_param, CatalogQuery};

// Re-export the validated text types so callers need a single dependency.
pub use shelf_types::{BookTitle, Category, NonEmptyText, TextError};
