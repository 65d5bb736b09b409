//! Builder for creating and configuring Mentor instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Mentor;
use crate::{
    catalog::Catalog,
    db::Database,
    error::{Result, ResultExt, RoadmapError},
    generator::GeneratorOptions,
};

/// Builder for creating and configuring Mentor instances.
#[derive(Debug, Clone, Default)]
pub struct MentorBuilder {
    database_path: Option<PathBuf>,
    catalog: Option<Catalog>,
    catalog_path: Option<PathBuf>,
    options: GeneratorOptions,
}

impl MentorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/trailhead/trailhead.db` or
    /// `~/.local/share/trailhead/trailhead.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog instead of the built-in one.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Loads the catalog from a JSON document when the mentor is built.
    /// Takes precedence over [`MentorBuilder::with_catalog`].
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Toggles the enhanced plan variant (on by default).
    pub fn with_enhanced(mut self, enhanced: bool) -> Self {
        self.options.enhanced = enhanced;
        self
    }

    /// Builds the configured mentor instance.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::XdgDirectory` if no default path can be placed,
    /// `RoadmapError::FileSystem` if the database directory cannot be created,
    /// catalog loading errors for an invalid catalog file, and
    /// `RoadmapError::Database` if database initialization fails
    pub async fn build(self) -> Result<Mentor> {
        let catalog = match (&self.catalog_path, self.catalog) {
            (Some(path), _) => Catalog::from_json_file(path)?,
            (None, Some(catalog)) => catalog,
            (None, None) => Catalog::builtin(),
        };

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RoadmapError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), RoadmapError>(())
        })
        .await
        .with_context("Task join error")??;

        debug!("Using plan store at {}", db_path.display());
        Ok(Mentor::new(db_path, catalog, self.options))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trailhead")
            .place_data_file("trailhead.db")
            .map_err(|e| RoadmapError::XdgDirectory(e.to_string()))
    }
}
