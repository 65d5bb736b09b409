//! Data models for learning plans.
//!
//! A [`Plan`] is a nested document: user info, a timeline, four
//! [`Phase`]s of [`Topic`]s, progress counters and a reference roadmap.
//! Display implementations live in [`crate::display::models`] so these
//! types stay plain data that round-trips through JSON.
//!
//! ## Display Features
//!
//! - **Markdown Output**: plans, phases and topics format as markdown
//! - **Status Icons**: phases show ✓ Completed, ➤ Current or ○ Locked;
//!   topics show ✓ Completed or ○ Pending
//! - **Compact Summaries**: [`PlanSummary`] renders as a one-entry list item
//!
//! # Examples
//!
//! ```rust
//! use trailhead_core::{catalog::Catalog, generator::Generator, models::Preferences};
//!
//! let catalog = Catalog::builtin();
//! let plan = Generator::new(&catalog)
//!     .generate(&Preferences::new("web_development", "soft_skills"));
//!
//! assert_eq!(plan.phases.len(), 4);
//! println!("{plan}"); // Markdown with phase headers and topic lists
//! ```

pub mod phase;
pub mod plan;
pub mod preferences;
pub mod status;
pub mod summary;
pub mod topic;

#[cfg(test)]
mod tests;

pub use phase::{Phase, PhaseName};
pub use plan::{
    EnhancedFeatures, Plan, Progress, ReferenceBlock, Timeline, UserInfo, REFERENCE_SOURCE,
};
pub use preferences::{Preferences, DEFAULT_TARGET_COMPANY, DEFAULT_TARGET_POSITION};
pub use status::{PhaseStatus, Priority, TopicStatus};
pub use summary::PlanSummary;
pub use topic::{Resource, ResourceKind, ResourceLevel, Topic};
