//! Holds the session's current catalog between menu turns.
//!
//! The repository is the single owned context passed to the query operations.
//! "Loaded" simply means a catalog is present; a failed load never touches the
//! catalog or the loaded state, so the last good catalog stays queryable.

use crate::catalog::loader::load_catalog_from_path;
use crate::catalog::model::Catalog;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
/// Session store for the most recently loaded catalog and where it came from.
pub struct CatalogRepository {
    current: Option<Catalog>,
    source: Option<PathBuf>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and replace the current catalog wholesale.
    ///
    /// Returns the number of courses loaded. On error the previous catalog,
    /// source path, and loaded state are left exactly as they were.
    pub fn load_from_path(&mut self, path: &Path) -> Result<usize> {
        let catalog = match load_catalog_from_path(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(path = %path.display(), "course file load failed: {err:#}");
                return Err(err);
            }
        };
        let count = catalog.len();
        self.replace(catalog, Some(path.to_path_buf()));
        tracing::info!(path = %path.display(), courses = count, "course catalog loaded");
        Ok(count)
    }

    /// Install an already-built catalog, discarding any previous one.
    pub fn replace(&mut self, catalog: Catalog, source: Option<PathBuf>) {
        self.current = Some(catalog);
        self.source = source;
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// The loaded catalog, or `None` before the first successful load.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.current.as_ref()
    }

    /// Path of the file behind the current catalog, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
