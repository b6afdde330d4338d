//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the REST layer and the CLI. Environment variables are read by the binaries only;
//! nothing in request handling consults process-wide state.

use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_CATALOG_PATH};
use crate::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    catalog_path: PathBuf,
    assets_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidInput` if `catalog_path` is not an existing file.
    pub fn new(catalog_path: PathBuf, assets_dir: PathBuf) -> CatalogResult<Self> {
        if !catalog_path.is_file() {
            return Err(CatalogError::InvalidInput(format!(
                "catalogue file does not exist: {}",
                catalog_path.display()
            )));
        }

        if !assets_dir.is_dir() {
            tracing::warn!(
                "assets directory {} does not exist; static files will 404",
                assets_dir.display()
            );
        }

        Ok(Self {
            catalog_path,
            assets_dir,
        })
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

/// Resolve the catalogue file without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file. Otherwise this looks for
/// `catalog/books.yaml` relative to the current working directory and then walks up from
/// `CARGO_MANIFEST_DIR`.
pub fn resolve_catalog_path(override_path: Option<PathBuf>) -> CatalogResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(CatalogError::InvalidInput(format!(
            "SHELF_CATALOG_PATH override is not a file: {}",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_CATALOG_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_CATALOG_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(CatalogError::InvalidInput(format!(
        "could not locate {DEFAULT_CATALOG_PATH}"
    )))
}

/// Assets directory from an optional override, falling back to [`DEFAULT_ASSETS_DIR`].
pub fn assets_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn new_requires_existing_catalog_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = CoreConfig::new(
            temp_dir.path().join("books.yaml"),
            temp_dir.path().to_path_buf(),
        )
        .expect_err("missing catalogue");
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn new_accepts_existing_catalog_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("books.yaml");
        fs::write(&catalog_path, "books: []\n").expect("write catalogue");

        let cfg = CoreConfig::new(catalog_path.clone(), temp_dir.path().to_path_buf())
            .expect("CoreConfig::new should succeed");
        assert_eq!(cfg.catalog_path(), catalog_path.as_path());
        assert_eq!(cfg.assets_dir(), temp_dir.path());
    }

    #[test]
    fn override_must_be_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = resolve_catalog_path(Some(temp_dir.path().to_path_buf()))
            .expect_err("directory is not a catalogue");
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        let file = temp_dir.path().join("books.yaml");
        fs::write(&file, "books: []\n").expect("write catalogue");
        assert_eq!(
            resolve_catalog_path(Some(file.clone())).expect("valid override"),
            file
        );
    }

    #[test]
    fn default_resolution_finds_workspace_catalog() {
        let path = resolve_catalog_path(None).expect("workspace ships catalog/books.yaml");
        assert!(path.ends_with(DEFAULT_CATALOG_PATH));
    }

    #[test]
    fn assets_dir_defaults_when_unset_or_blank() {
        assert_eq!(assets_dir_from_env_value(None), PathBuf::from("assets"));
        assert_eq!(
            assets_dir_from_env_value(Some("  ".into())),
            PathBuf::from("assets")
        );
        assert_eq!(
            assets_dir_from_env_value(Some("/srv/static".into())),
            PathBuf::from("/srv/static")
        );
    }
}
