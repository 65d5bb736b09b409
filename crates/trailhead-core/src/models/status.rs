//! Status and priority enumerations for phases and topics.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    /// Not yet reachable; an earlier phase is unfinished
    #[default]
    Locked,

    /// The phase the learner is working through
    Current,

    /// Every topic in the phase and all earlier phases is complete
    Completed,
}

impl FromStr for PhaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" => Ok(PhaseStatus::Locked),
            "current" => Ok(PhaseStatus::Current),
            "completed" => Ok(PhaseStatus::Completed),
            _ => Err(format!("Invalid phase status: {s}")),
        }
    }
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Locked => "locked",
            PhaseStatus::Current => "current",
            PhaseStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use trailhead_core::models::PhaseStatus;
    ///
    /// assert_eq!(PhaseStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(PhaseStatus::Current.with_icon(), "➤ Current");
    /// assert_eq!(PhaseStatus::Locked.with_icon(), "○ Locked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "✓ Completed",
            PhaseStatus::Current => "➤ Current",
            PhaseStatus::Locked => "○ Locked",
        }
    }
}

/// Completion state of a single topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    #[default]
    Pending,
    Completed,
}

impl FromStr for TopicStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TopicStatus::Pending),
            "completed" | "done" => Ok(TopicStatus::Completed),
            _ => Err(format!("Invalid topic status: {s}")),
        }
    }
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Pending => "pending",
            TopicStatus::Completed => "completed",
        }
    }

    pub fn with_icon(&self) -> &'static str {
        match self {
            TopicStatus::Completed => "✓ Completed",
            TopicStatus::Pending => "○ Pending",
        }
    }
}

/// Topic priority within its phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    /// The first two topics of every phase are high priority.
    pub fn for_position(index_in_phase: usize) -> Self {
        if index_in_phase < 2 {
            Priority::High
        } else {
            Priority::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}
