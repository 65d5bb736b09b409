//! Async facade over the generator and the plan store.
//!
//! [`Mentor`] owns the catalog (loaded once when the mentor is built), the
//! generator options and the location of the SQLite store. Each operation
//! opens its own connection on the blocking thread pool, so a `Mentor` is
//! cheap to clone and share between tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Mentor      │    │    Database     │
//! │  (handlers.rs)  │───▶│ generate, track │───▶│   (via db/)     │
//! │                 │    │ progress, list  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use trailhead_core::{params::GeneratePlan, MentorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mentor = MentorBuilder::new()
//!     .with_database_path(Some("/tmp/trailhead.db"))
//!     .build()
//!     .await?;
//!
//! let mut params = GeneratePlan::default();
//! params.learner_id = "ada".to_string();
//! params.preferences.specialization = Some("data_science".to_string());
//!
//! let result = mentor.generate_plan(&params).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use crate::{
    catalog::Catalog,
    db::Database,
    error::{Result, ResultExt},
    generator::{Generator, GeneratorOptions},
};

pub mod builder;
pub mod plan_ops;


pub use builder::MentorBuilder;

/// Main entry point for generating and tracking learner plans.
#[derive(Debug, Clone)]
pub struct Mentor {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) options: GeneratorOptions,
}

impl Mentor {
    pub(crate) fn new(db_path: PathBuf, catalog: Catalog, options: GeneratorOptions) -> Self {
        Self {
            db_path,
            catalog: Arc::new(catalog),
            options,
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// A generator borrowing this mentor's catalog.
    pub fn generator(&self) -> Generator<'_> {
        Generator::with_options(&self.catalog, self.options)
    }

    /// Run `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .with_context("Task join error")?
    }
}
