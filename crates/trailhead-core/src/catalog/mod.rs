//! Template Catalog: curriculum templates, skill table and reference data.
//!
//! The catalog is an immutable configuration object. It is built once, either
//! from the built-in data ([`Catalog::builtin`]) or from a JSON document
//! ([`Catalog::from_json_str`], [`Catalog::from_json_file`]), and then passed
//! by reference to the generator. Lookups never fail: a specialization or
//! skill level missing from the catalog resolves to the Web Development
//! template and the Beginner skill row respectively.
//!
//! # Catalog documents
//!
//! ```json
//! {
//!   "templates": {
//!     "Web Development": {
//!       "foundations": ["HTML5 & CSS3"],
//!       "core_web": ["API Development"],
//!       "advanced": ["Performance Optimization"],
//!       "projects": ["Portfolio Website"]
//!     }
//!   },
//!   "skill_levels": {
//!     "Beginner": { "weeks": 8, "difficulty": 1, "topics": 5 }
//!   },
//!   "references": {
//!     "Web Development": {
//!       "source": "https://roadmap.sh/frontend",
//!       "description": "Frontend Developer Roadmap",
//!       "key_areas": ["HTML & CSS"]
//!     }
//!   }
//! }
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RoadmapError, Result};

pub mod aliases;
mod builtin;
mod types;

pub use types::{Reference, SkillConfig, SkillLevel, Specialization, TemplateEntry};

/// Specialization substituted for unknown aliases and missing templates.
pub const DEFAULT_SPECIALIZATION: Specialization = Specialization::WebDevelopment;

/// Skill level substituted for unknown skill-focus aliases.
pub const DEFAULT_SKILL_LEVEL: SkillLevel = SkillLevel::Beginner;

static EMPTY_TEMPLATE: TemplateEntry = TemplateEntry::EMPTY;
static EMPTY_REFERENCE: Reference = Reference::EMPTY;

/// Static mapping from specialization to curriculum template, plus the skill
/// table and the companion reference lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    templates: BTreeMap<Specialization, TemplateEntry>,
    skill_levels: BTreeMap<SkillLevel, SkillConfig>,
    #[serde(default)]
    references: BTreeMap<Specialization, Reference>,
}

impl Catalog {
    /// The built-in catalog covering all six specializations.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Serialization` for malformed JSON and
    /// `RoadmapError::InvalidInput` when the fallback entries are missing or
    /// a skill row is out of range.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog document from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| RoadmapError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Loading catalog from {}", path.display());
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if !self.templates.contains_key(&DEFAULT_SPECIALIZATION) {
            return Err(RoadmapError::invalid_input("templates").with_reason(format!(
                "a '{}' template is required as the fallback entry",
                DEFAULT_SPECIALIZATION.as_str()
            )));
        }
        if !self.references.contains_key(&DEFAULT_SPECIALIZATION) {
            return Err(RoadmapError::invalid_input("references").with_reason(format!(
                "a '{}' reference is required as the fallback entry",
                DEFAULT_SPECIALIZATION.as_str()
            )));
        }
        if !self.skill_levels.contains_key(&DEFAULT_SKILL_LEVEL) {
            return Err(RoadmapError::invalid_input("skill_levels").with_reason(format!(
                "a '{}' skill level is required as the fallback entry",
                DEFAULT_SKILL_LEVEL.as_str()
            )));
        }
        for (level, config) in &self.skill_levels {
            let reason = if config.weeks == 0 {
                Some("weeks must be positive")
            } else if !(1..=4).contains(&config.difficulty) {
                Some("difficulty must be between 1 and 4")
            } else if config.topics == 0 {
                Some("topic budget must be positive")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(RoadmapError::invalid_input(format!(
                    "skill_levels.{}",
                    level.as_str()
                ))
                .with_reason(reason));
            }
        }
        Ok(())
    }

    /// Template for a specialization, substituting the Web Development
    /// template when the key is absent.
    pub fn lookup(&self, specialization: Specialization) -> &TemplateEntry {
        if let Some(entry) = self.templates.get(&specialization) {
            return entry;
        }
        debug!(
            "No template for {}, using {}",
            specialization.as_str(),
            DEFAULT_SPECIALIZATION.as_str()
        );
        self.templates
            .get(&DEFAULT_SPECIALIZATION)
            .unwrap_or(&EMPTY_TEMPLATE)
    }

    /// Skill configuration for a level, substituting the Beginner row when
    /// the level is absent.
    pub fn skill(&self, level: SkillLevel) -> SkillConfig {
        self.skill_levels
            .get(&level)
            .or_else(|| self.skill_levels.get(&DEFAULT_SKILL_LEVEL))
            .copied()
            .unwrap_or(SkillConfig::BEGINNER)
    }

    /// Reference metadata for a specialization, defaulting to the Web
    /// Development entry when the key is unrecognized.
    pub fn reference(&self, specialization: Specialization) -> &Reference {
        self.references
            .get(&specialization)
            .or_else(|| self.references.get(&DEFAULT_SPECIALIZATION))
            .unwrap_or(&EMPTY_REFERENCE)
    }

    /// Source URL of the reference roadmap for a specialization.
    pub fn reference_url(&self, specialization: Specialization) -> &str {
        &self.reference(specialization).source_url
    }

    /// Key learning areas of the reference roadmap for a specialization.
    pub fn key_areas(&self, specialization: Specialization) -> &[String] {
        &self.reference(specialization).key_areas
    }

    /// Specializations with a template of their own, in catalog order.
    pub fn specializations(&self) -> impl Iterator<Item = Specialization> + '_ {
        self.templates.keys().copied()
    }

    /// Skill rows present in the catalog, from least to most experienced.
    pub fn skill_levels(&self) -> impl Iterator<Item = (SkillLevel, SkillConfig)> + '_ {
        self.skill_levels
            .iter()
            .map(|(level, config)| (*level, *config))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "templates": {
            "Web Development": {
                "foundations": ["HTML"],
                "core_web": ["APIs"],
                "advanced": [],
                "projects": ["Site"]
            }
        },
        "skill_levels": {
            "Beginner": { "weeks": 4, "difficulty": 1, "topics": 3 }
        },
        "references": {
            "Web Development": {
                "source": "https://example.com/web",
                "description": "Web",
                "key_areas": ["HTML"]
            }
        }
    }"#;

    #[test]
    fn test_builtin_covers_every_specialization() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.specializations().collect::<Vec<_>>(),
            Specialization::ALL.to_vec()
        );
        for spec in Specialization::ALL {
            let entry = catalog.lookup(spec);
            for list in entry.lists() {
                assert_eq!(list.len(), 4, "{spec:?}");
            }
            assert_eq!(catalog.key_areas(spec).len(), 6);
        }
    }

    #[test]
    fn test_builtin_skill_table() {
        let catalog = Catalog::builtin();
        let expected = [
            (SkillLevel::Beginner, 8, 1, 5),
            (SkillLevel::Intermediate, 12, 2, 8),
            (SkillLevel::Advanced, 16, 3, 12),
            (SkillLevel::Expert, 20, 4, 15),
        ];
        for (level, weeks, difficulty, topics) in expected {
            assert_eq!(
                catalog.skill(level),
                SkillConfig {
                    weeks,
                    difficulty,
                    topics
                }
            );
        }
    }

    #[test]
    fn test_builtin_core_lists_are_specialization_specific() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.lookup(Specialization::MachineLearning).core[0],
            "Supervised Learning Algorithms"
        );
        assert_eq!(
            catalog.lookup(Specialization::CyberSecurity).core[0],
            "Penetration Testing"
        );
    }

    #[test]
    fn test_reference_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.reference_url(Specialization::CloudComputing),
            "https://roadmap.sh/aws"
        );
        assert_eq!(
            catalog.reference(Specialization::WebDevelopment).description,
            "Frontend Developer Roadmap"
        );
    }

    #[test]
    fn test_custom_catalog_falls_back_for_missing_entries() {
        let catalog = Catalog::from_json_str(MINIMAL).expect("valid catalog");

        let entry = catalog.lookup(Specialization::MachineLearning);
        assert_eq!(entry.foundations, vec!["HTML".to_string()]);
        assert!(entry.advanced.is_empty());

        assert_eq!(catalog.skill(SkillLevel::Expert).weeks, 4);
        assert_eq!(
            catalog.reference_url(Specialization::DataScience),
            "https://example.com/web"
        );
    }

    #[test]
    fn test_custom_catalog_requires_fallback_template() {
        let json = MINIMAL.replacen("Web Development", "Data Science", 1);
        let error = Catalog::from_json_str(&json).unwrap_err();
        assert!(matches!(
            error,
            RoadmapError::InvalidInput { ref field, .. } if field == "templates"
        ));
    }

    #[test]
    fn test_custom_catalog_rejects_out_of_range_difficulty() {
        let json = MINIMAL.replace("\"difficulty\": 1", "\"difficulty\": 7");
        let error = Catalog::from_json_str(&json).unwrap_err();
        assert!(error.to_string().contains("skill_levels.Beginner"));
    }

    #[test]
    fn test_custom_catalog_rejects_malformed_json() {
        let error = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(error, RoadmapError::Serialization { .. }));
    }

    #[test]
    fn test_builtin_round_trips_through_json() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }
}
