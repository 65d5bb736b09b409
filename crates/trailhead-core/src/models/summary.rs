//! Plan summary types for listing stored plans.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Plan;
use crate::catalog::{SkillLevel, Specialization};

/// Summary information about a stored plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanSummary {
    /// Learner the plan belongs to
    pub learner_id: String,
    pub specialization: Specialization,
    pub skill_level: SkillLevel,
    pub total_weeks: u32,
    pub completed_topics: u32,
    pub total_topics: u32,
    pub completion_percentage: u32,
    /// Number of leading completed phases
    pub current_phase: u32,
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub updated_at: Timestamp,
}

impl PlanSummary {
    /// Create a summary from a stored plan and its row timestamps.
    pub fn from_plan(
        learner_id: impl Into<String>,
        plan: &Plan,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            learner_id: learner_id.into(),
            specialization: plan.user_info.specialization,
            skill_level: plan.user_info.skill_level,
            total_weeks: plan.timeline.total_weeks,
            completed_topics: plan.progress.completed_topics,
            total_topics: plan.progress.total_topics,
            completion_percentage: plan.progress.completion_percentage,
            current_phase: plan.progress.current_phase,
            created_at,
            updated_at,
        }
    }

    pub fn remaining_topics(&self) -> u32 {
        self.total_topics.saturating_sub(self.completed_topics)
    }
}
