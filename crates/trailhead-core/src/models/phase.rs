//! Phase model definition and related functionality.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PhaseStatus, Topic};

/// The four fixed stages of every plan, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum PhaseName {
    #[serde(rename = "Foundation")]
    Foundation,
    #[serde(rename = "Core Skills")]
    CoreSkills,
    #[serde(rename = "Advanced Topics")]
    AdvancedTopics,
    #[serde(rename = "Projects & Portfolio")]
    ProjectsPortfolio,
}

impl PhaseName {
    /// Phase names in plan order; position `i` draws its topics from the
    /// `i`-th template list.
    pub const ORDER: [PhaseName; 4] = [
        PhaseName::Foundation,
        PhaseName::CoreSkills,
        PhaseName::AdvancedTopics,
        PhaseName::ProjectsPortfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::Foundation => "Foundation",
            PhaseName::CoreSkills => "Core Skills",
            PhaseName::AdvancedTopics => "Advanced Topics",
            PhaseName::ProjectsPortfolio => "Projects & Portfolio",
        }
    }
}

/// One stage of a plan with its week span and topics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Phase {
    /// 1-based position in the plan
    pub id: u32,

    pub name: PhaseName,

    /// Span in weeks (`total_weeks / 4`)
    pub weeks: u32,

    pub start_week: u32,

    /// `start_week + weeks - 1`; one less than `start_week` for a
    /// zero-week phase
    pub end_week: u32,

    pub topics: Vec<Topic>,

    pub status: PhaseStatus,

    /// `min(skill difficulty, phase position)`
    pub difficulty: u8,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessment_criteria: Vec<String>,
}

impl Phase {
    /// Ids of this phase's topics, in order.
    pub fn topic_ids(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|topic| topic.id.as_str())
    }

    /// True when every topic id of this phase is in `completed`. A phase
    /// without topics is trivially complete.
    pub fn is_covered_by(&self, completed: &BTreeSet<String>) -> bool {
        self.topics.iter().all(|topic| completed.contains(&topic.id))
    }
}
