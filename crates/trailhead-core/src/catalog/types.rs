//! Catalog value types: specializations, skill levels and template entries.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named career track with its own curriculum template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Specialization {
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "CyberSecurity")]
    CyberSecurity,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Cloud Computing")]
    CloudComputing,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
}

impl Specialization {
    /// Every specialization, in catalog order.
    pub const ALL: [Specialization; 6] = [
        Specialization::MachineLearning,
        Specialization::DataScience,
        Specialization::CyberSecurity,
        Specialization::WebDevelopment,
        Specialization::CloudComputing,
        Specialization::MobileDevelopment,
    ];

    /// Canonical display name, as stored in plan documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::MachineLearning => "Machine Learning",
            Specialization::DataScience => "Data Science",
            Specialization::CyberSecurity => "CyberSecurity",
            Specialization::WebDevelopment => "Web Development",
            Specialization::CloudComputing => "Cloud Computing",
            Specialization::MobileDevelopment => "Mobile Development",
        }
    }
}

impl FromStr for Specialization {
    type Err = String;

    /// Parses a canonical name, ignoring case. Questionnaire aliases such as
    /// `web_development` go through [`crate::catalog::aliases`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialization::ALL
            .into_iter()
            .find(|spec| spec.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid specialization: {s}"))
    }
}

/// Learner proficiency tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Every skill level, from least to most experienced.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(format!("Invalid skill level: {s}")),
        }
    }
}

/// Duration, difficulty and topic volume attached to a skill level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SkillConfig {
    /// Default plan length in weeks
    pub weeks: u32,
    /// Difficulty tier, 1 through 4
    pub difficulty: u8,
    /// Topic budget; each phase takes `topics / 4 + 1` topics
    pub topics: u32,
}

impl SkillConfig {
    /// The Beginner row of the built-in table, used whenever a level is
    /// missing from a catalog.
    pub const BEGINNER: SkillConfig = SkillConfig {
        weeks: 8,
        difficulty: 1,
        topics: 5,
    };
}

/// The four ordered topic lists of one specialization.
///
/// The core list is addressed positionally; catalog documents may name it
/// with any of the historical `core_*` keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateEntry {
    #[serde(default)]
    pub foundations: Vec<String>,
    #[serde(
        default,
        alias = "core_ml",
        alias = "core_web",
        alias = "core_ds",
        alias = "core_sec",
        alias = "core_cloud",
        alias = "core_mobile"
    )]
    pub core: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl TemplateEntry {
    /// An entry with four empty lists.
    pub const EMPTY: TemplateEntry = TemplateEntry {
        foundations: Vec::new(),
        core: Vec::new(),
        advanced: Vec::new(),
        projects: Vec::new(),
    };

    /// The topic lists in phase order: foundations, core, advanced, projects.
    pub fn lists(&self) -> [&[String]; 4] {
        [
            &self.foundations,
            &self.core,
            &self.advanced,
            &self.projects,
        ]
    }
}

/// Read-only reference metadata for a specialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Reference {
    pub description: String,
    #[serde(alias = "source")]
    pub source_url: String,
    #[serde(default)]
    pub key_areas: Vec<String>,
}

impl Reference {
    pub const EMPTY: Reference = Reference {
        description: String::new(),
        source_url: String::new(),
        key_areas: Vec::new(),
    };
}
