//! Error types for the roadmap library.
//!
//! The generation engine itself never fails: alias resolution, catalog
//! lookups, plan generation and progress recomputation all degrade to
//! documented defaults. The errors below only surface at the collaborator
//! boundaries (custom catalog loading, the plan store, and caller-level
//! lookups by learner, phase or topic id).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible roadmap operation.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No stored plan for the given learner
    #[error("No plan found for learner '{learner_id}'")]
    PlanNotFound { learner_id: String },
    /// Topic id not present in the learner's plan
    #[error("Topic '{topic_id}' not found in plan")]
    TopicNotFound { topic_id: String },
    /// Phase id not present in the learner's plan
    #[error("Phase {phase_id} not found in plan")]
    PhaseNotFound { phase_id: u32 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RoadmapError {
        RoadmapError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RoadmapError {
        RoadmapError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RoadmapError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for Result to attach configuration context to foreign
/// errors.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to RoadmapError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| RoadmapError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RoadmapError::database(message).with_source(e))
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let error = RoadmapError::invalid_input("learner_id").with_reason("must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'learner_id': must not be empty"
        );
    }

    #[test]
    fn test_database_context_mapping() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let error = result.db_context("Failed to load plan").unwrap_err();
        assert!(matches!(error, RoadmapError::Database { .. }));
        assert!(error.to_string().contains("Failed to load plan"));
    }

    #[test]
    fn test_with_context_wraps_as_configuration() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "join failed",
        ));
        let error = result.with_context("Task join error").unwrap_err();
        assert!(matches!(error, RoadmapError::Configuration { .. }));
        assert!(error.to_string().contains("Task join error: join failed"));
    }
}
