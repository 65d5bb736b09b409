//! Core library for the Trailhead learning roadmap generator.
//!
//! Given a learner's declared specialization, skill focus and target role,
//! the crate produces a four-phase curriculum with topics, resources,
//! milestones and progress state, and recomputes phase status as topics are
//! completed.
//!
//! - [`catalog`]: curriculum templates, the skill table, reference roadmaps
//!   and the alias tables
//! - [`generator`]: plan generation and progress recomputation; synchronous
//!   and infallible
//! - [`db`]: SQLite store of plan documents keyed by learner id
//! - [`Mentor`]: async facade tying the generator to the store
//! - [`display`]: markdown `Display` implementations and result wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use trailhead_core::{catalog::Catalog, generator::Generator, models::Preferences};
//! use std::collections::BTreeSet;
//!
//! let catalog = Catalog::builtin();
//! let generator = Generator::new(&catalog);
//!
//! let plan = generator.generate(&Preferences::new("web_development", "soft_skills"));
//! assert_eq!(plan.timeline.total_weeks, 8);
//!
//! let done: BTreeSet<String> = ["1.1", "1.2"].iter().map(|s| s.to_string()).collect();
//! let plan = generator.update_progress(&plan, &done);
//! assert_eq!(plan.progress.current_phase, 1);
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod mentor;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use catalog::{Catalog, SkillLevel, Specialization};
pub use db::Database;
pub use display::{
    CatalogListing, DeleteResult, GenerateResult, OperationStatus, PlanSummaries, ProgressResult,
};
pub use error::{Result, RoadmapError};
pub use generator::{Generator, GeneratorOptions};
pub use mentor::{Mentor, MentorBuilder};
pub use models::{Phase, PhaseStatus, Plan, PlanSummary, Preferences, Topic, TopicStatus};
pub use params::{CompleteTopics, DeletePlan, GeneratePlan, LearnerId, SetProgress, ShowPhase};
