//! Questionnaire alias tables.
//!
//! Learners pick their track and focus from a questionnaire whose values are
//! snake_case aliases (`web_development`, `soft_skills`, ...). Each table maps
//! the known aliases to a canonical value and carries one documented
//! fallback entry; any other input, including a missing value, resolves to
//! that fallback instead of failing.
//!
//! ```rust
//! use trailhead_core::catalog::{aliases, SkillLevel, Specialization};
//!
//! assert_eq!(
//!     aliases::resolve_specialization(Some("data_science")),
//!     Specialization::DataScience
//! );
//! assert_eq!(
//!     aliases::resolve_specialization(Some("underwater_basketry")),
//!     Specialization::WebDevelopment
//! );
//! assert_eq!(aliases::resolve_skill_level(None), SkillLevel::Beginner);
//! ```

use std::fmt;

use log::debug;

use super::{SkillLevel, Specialization, DEFAULT_SKILL_LEVEL, DEFAULT_SPECIALIZATION};

/// A fixed alias-to-value mapping with a fallback for everything else.
pub struct AliasTable<T: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, T)],
    fallback: T,
}

impl<T: 'static> AliasTable<T> {
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, T)],
        fallback: T,
    ) -> Self {
        Self {
            name,
            entries,
            fallback,
        }
    }
}

impl<T: Copy + fmt::Debug + 'static> AliasTable<T> {
    /// Exact alias lookup without the fallback.
    pub fn lookup(&self, alias: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == alias)
            .map(|(_, value)| *value)
    }

    /// Resolve a raw questionnaire value, substituting the fallback for
    /// unknown or missing input.
    pub fn resolve(&self, raw: Option<&str>) -> T {
        match raw.and_then(|alias| self.lookup(alias)) {
            Some(value) => value,
            None => {
                debug!(
                    "Unrecognized {} {:?}, using {:?}",
                    self.name, raw, self.fallback
                );
                self.fallback
            }
        }
    }

    pub fn fallback(&self) -> T {
        self.fallback
    }

    pub fn entries(&self) -> &'static [(&'static str, T)] {
        self.entries
    }
}

/// Specialization aliases used by the questionnaire.
pub static SPECIALIZATION_ALIASES: AliasTable<Specialization> = AliasTable::new(
    "specialization",
    &[
        ("web_development", Specialization::WebDevelopment),
        ("mobile_development", Specialization::MobileDevelopment),
        ("machine_learning", Specialization::MachineLearning),
        ("data_science", Specialization::DataScience),
        ("cloud_computing", Specialization::CloudComputing),
        ("cybersecurity", Specialization::CyberSecurity),
    ],
    DEFAULT_SPECIALIZATION,
);

/// Skill-focus aliases used by the questionnaire.
pub static SKILL_FOCUS_ALIASES: AliasTable<SkillLevel> = AliasTable::new(
    "skill focus",
    &[
        ("soft_skills", SkillLevel::Beginner),
        ("hard_skills", SkillLevel::Intermediate),
    ],
    DEFAULT_SKILL_LEVEL,
);

/// Resolve a specialization alias; unknown input yields Web Development.
pub fn resolve_specialization(raw: Option<&str>) -> Specialization {
    SPECIALIZATION_ALIASES.resolve(raw)
}

/// Resolve a skill-focus alias; unknown input yields Beginner.
pub fn resolve_skill_level(raw: Option<&str>) -> SkillLevel {
    SKILL_FOCUS_ALIASES.resolve(raw)
}
