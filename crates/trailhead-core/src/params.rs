//! Parameter structures for roadmap operations
//!
//! These structures are shared by every caller of the [`crate::Mentor`]
//! facade and carry no framework derives beyond serde and an optional JSON
//! schema. Interface layers such as the CLI define their own argument types
//! and convert into these with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Mentor      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (async facade)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ShowArgs {
//!     pub learner_id: String,
//! }
//!
//! impl From<ShowArgs> for LearnerId {
//!     fn from(args: ShowArgs) -> Self {
//!         LearnerId { learner_id: args.learner_id }
//!     }
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::RoadmapError, models::Preferences, Result};

/// Longest learner id accepted by the store.
pub const MAX_LEARNER_ID_LEN: usize = 128;

/// Check a learner id before it reaches the store.
///
/// # Errors
///
/// `RoadmapError::InvalidInput` for a blank id, an id longer than
/// [`MAX_LEARNER_ID_LEN`] or one containing control characters.
pub fn validate_learner_id(learner_id: &str) -> Result<()> {
    let reason = if learner_id.trim().is_empty() {
        Some("must not be empty".to_string())
    } else if learner_id.chars().count() > MAX_LEARNER_ID_LEN {
        Some(format!("must be at most {MAX_LEARNER_ID_LEN} characters"))
    } else if learner_id.chars().any(char::is_control) {
        Some("must not contain control characters".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RoadmapError::invalid_input("learner_id").with_reason(reason)),
        None => Ok(()),
    }
}

/// Parameters for operations that only need a learner.
///
/// Used to show a stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LearnerId {
    /// Identity the plan is stored under
    pub learner_id: String,
}

impl LearnerId {
    pub fn new(learner_id: impl Into<String>) -> Self {
        Self {
            learner_id: learner_id.into(),
        }
    }
}

/// Parameters for generating (or regenerating) a learner's plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    pub learner_id: String,
    /// Questionnaire answers
    #[serde(flatten)]
    pub preferences: Preferences,
    /// Fixed seed for reproducible resource and milestone sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Parameters for fetching a single phase of a stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowPhase {
    pub learner_id: String,
    /// 1-based phase id
    pub phase_id: u32,
}

/// Parameters for marking topics completed on top of existing progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompleteTopics {
    pub learner_id: String,
    /// Topic ids such as `"1.2"`; each must exist in the plan
    pub topic_ids: Vec<String>,
}

/// Parameters for replacing the completed set outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetProgress {
    pub learner_id: String,
    /// The complete set of finished topic ids; empty resets progress
    #[serde(default)]
    pub completed: Vec<String>,
}

/// Parameters for deleting a learner's plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeletePlan {
    pub learner_id: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

impl DeletePlan {
    /// Ensure the caller confirmed the deletion.
    ///
    /// ```rust
    /// use trailhead_core::params::DeletePlan;
    ///
    /// let params = DeletePlan { learner_id: "ada".to_string(), confirmed: false };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_learner_id(&self.learner_id)?;
        if !self.confirmed {
            return Err(RoadmapError::invalid_input("confirmed")
                .with_reason("Deleting a plan cannot be undone; pass confirmation to proceed"));
        }
        Ok(())
    }
}
