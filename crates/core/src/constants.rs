//! Constants used throughout the Shelf core crate.
//!
//! This module contains path, filename and sentinel constants so the REST layer, the CLI and the
//! core agree on them.

/// Query value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "All";

/// Catalogue file location, relative to the working directory or a workspace ancestor.
pub const DEFAULT_CATALOG_PATH: &str = "catalog/books.yaml";

/// Default directory for static assets (cover images, stylesheets).
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Panel heading for the listing view.
pub const BOOK_TITLES_PANEL: &str = "BOOK TITLES";

/// Panel heading for the detail view.
pub const BOOK_DETAILS_PANEL: &str = "BOOK DETAILS";
