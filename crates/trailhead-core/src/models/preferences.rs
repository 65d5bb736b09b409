//! Learner preferences, the input record of plan generation.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default target company when the learner leaves it blank.
pub const DEFAULT_TARGET_COMPANY: &str = "Tech Company";

/// Default target position when the learner leaves it blank.
pub const DEFAULT_TARGET_POSITION: &str = "Developer";

/// Questionnaire answers supplied by the caller.
///
/// Every field is optional; missing or unrecognized values degrade to
/// documented defaults during generation rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Preferences {
    /// Raw specialization alias such as `web_development`
    #[serde(default)]
    pub specialization: Option<String>,

    /// Raw skill-focus alias, `soft_skills` or `hard_skills`
    #[serde(default)]
    pub skill_focus: Option<String>,

    #[serde(default)]
    pub target_company: Option<String>,

    #[serde(default)]
    pub position: Option<String>,

    /// Explicit plan length; zero means "use the skill level default"
    #[serde(default)]
    pub learning_duration: Option<u32>,

    #[serde(default)]
    pub learning_goals: Option<String>,

    #[serde(default)]
    pub focus_area: Option<String>,
}

impl Preferences {
    /// Preferences for a specialization and skill-focus alias pair.
    pub fn new(specialization: impl Into<String>, skill_focus: impl Into<String>) -> Self {
        Self {
            specialization: Some(specialization.into()),
            skill_focus: Some(skill_focus.into()),
            ..Default::default()
        }
    }

    /// Explicit duration, if one was given and is positive.
    pub fn explicit_weeks(&self) -> Option<u32> {
        self.learning_duration.filter(|weeks| *weeks > 0)
    }

    pub fn target_company(&self) -> &str {
        self.target_company
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_COMPANY)
    }

    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or(DEFAULT_TARGET_POSITION)
    }
}
