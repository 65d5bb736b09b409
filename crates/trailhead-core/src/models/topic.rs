//! Topic model and learning resource descriptors.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Priority, TopicStatus};

/// Kind of learning resource attached to a topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ResourceKind {
    Course,
    Book,
    Tutorial,
    Practice,
    Documentation,
    Community,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Course => "Course",
            ResourceKind::Book => "Book",
            ResourceKind::Tutorial => "Tutorial",
            ResourceKind::Practice => "Practice",
            ResourceKind::Documentation => "Documentation",
            ResourceKind::Community => "Community",
        }
    }

    /// Resource title for a topic, e.g. `Learning HTML5 & CSS3`.
    pub fn title_for(&self, topic: &str) -> String {
        match self {
            ResourceKind::Course => format!("{topic} - Complete Course"),
            ResourceKind::Book => format!("Learning {topic}"),
            ResourceKind::Tutorial => format!("{topic} Tutorial Series"),
            ResourceKind::Practice => format!("{topic} Hands-on Labs"),
            ResourceKind::Documentation => format!("{topic} Official Docs"),
            ResourceKind::Community => format!("{topic} Community Forum"),
        }
    }
}

/// Audience level of a resource (enhanced plans only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ResourceLevel {
    Beginner,
    Intermediate,
    Advanced,
    All,
}

impl ResourceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceLevel::Beginner => "Beginner",
            ResourceLevel::Intermediate => "Intermediate",
            ResourceLevel::Advanced => "Advanced",
            ResourceLevel::All => "All",
        }
    }
}

/// A suggested learning resource for a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<ResourceLevel>,
}

/// A single learning unit within a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Topic {
    /// `"<phase>.<index>"`, both 1-based; unique within a plan
    pub id: String,

    /// Title taken verbatim from the catalog template
    pub title: String,

    /// Estimated effort, 8 to 20 hours
    pub estimated_hours: u32,

    pub resources: Vec<Resource>,

    pub milestones: Vec<String>,

    #[serde(default)]
    pub status: TopicStatus,

    pub priority: Priority,

    /// Prerequisites derived from the phase position (enhanced plans only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,

    /// Fixed theory-to-review sequence (enhanced plans only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_path: Vec<String>,

    /// Sampled hands-on exercises (enhanced plans only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub practical_exercises: Vec<String>,
}

impl Topic {
    pub fn is_completed(&self) -> bool {
        self.status == TopicStatus::Completed
    }
}
