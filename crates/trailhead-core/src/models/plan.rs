//! Plan model definition and related functionality.

use std::collections::BTreeSet;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Phase, Topic};
use crate::catalog::{SkillLevel, Specialization};

/// Source label of the reference roadmaps shipped with the catalog.
pub const REFERENCE_SOURCE: &str = "roadmap.sh";

/// Learner-facing summary of who the plan is for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserInfo {
    pub specialization: Specialization,
    pub skill_level: SkillLevel,
    pub target_company: String,
    pub target_position: String,
    /// Generation time plus `total_weeks`
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub estimated_completion: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
}

/// Overall schedule of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Timeline {
    pub total_weeks: u32,
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start_date: Timestamp,
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub end_date: Timestamp,
}

/// Progress counters, recomputed on every progress update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Progress {
    /// Number of leading phases that are completed
    pub current_phase: u32,
    pub completed_topics: u32,
    pub total_topics: u32,
    pub completion_percentage: u32,
}

/// Reference roadmap the plan was modelled on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReferenceBlock {
    pub source: String,
    pub url: String,
    pub description: String,
    pub key_areas: Vec<String>,
}

/// Feature flags advertised by enhanced plans.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EnhancedFeatures {
    pub adaptive_learning: bool,
    pub progress_tracking: bool,
    pub milestone_rewards: bool,
    pub peer_learning: bool,
    pub mentor_support: bool,
}

impl Default for EnhancedFeatures {
    fn default() -> Self {
        Self {
            adaptive_learning: true,
            progress_tracking: true,
            milestone_rewards: true,
            peer_learning: true,
            mentor_support: true,
        }
    }
}

/// A complete generated curriculum.
///
/// Plans serialize as a single nested document; the store persists that
/// document unchanged and deserializes it on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Plan {
    pub user_info: UserInfo,
    pub timeline: Timeline,
    pub phases: Vec<Phase>,
    pub progress: Progress,
    pub reference: ReferenceBlock,
    #[serde(
        default,
        rename = "enhanced_features",
        skip_serializing_if = "Option::is_none"
    )]
    pub features: Option<EnhancedFeatures>,
}

impl Plan {
    /// Live sum of topic counts across all phases.
    pub fn total_topics(&self) -> u32 {
        let total: usize = self.phases.iter().map(|phase| phase.topics.len()).sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// Looks up a phase by its 1-based id.
    pub fn phase(&self, id: u32) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    /// Looks up a topic by its `"<phase>.<index>"` id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics().find(|topic| topic.id == id)
    }

    /// All topics in phase order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.phases.iter().flat_map(|phase| phase.topics.iter())
    }

    /// Ids of every topic currently marked completed.
    pub fn completed_topic_ids(&self) -> BTreeSet<String> {
        self.topics()
            .filter(|topic| topic.is_completed())
            .map(|topic| topic.id.clone())
            .collect()
    }

    /// Whether the plan carries the enhanced-variant fields.
    pub fn is_enhanced(&self) -> bool {
        self.features.is_some()
    }
}
