//! Plan Generator: turns learner preferences into a complete [`Plan`].
//!
//! Generation is a pure function of the preferences, the catalog, the start
//! time and a random source. Nothing here performs I/O or keeps state
//! between calls; callers own the returned plan and persist it themselves.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use jiff::Timestamp;
//! use trailhead_core::{catalog::Catalog, generator::Generator, models::Preferences};
//!
//! let catalog = Catalog::builtin();
//! let generator = Generator::new(&catalog);
//! let prefs = Preferences::new("machine_learning", "hard_skills");
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let plan = generator.generate_with(&prefs, Timestamp::UNIX_EPOCH, &mut rng);
//!
//! assert_eq!(plan.timeline.total_weeks, 12);
//! assert_eq!(plan.progress.total_topics, plan.total_topics());
//! ```

use std::collections::BTreeSet;

use jiff::{SignedDuration, Timestamp};
use log::debug;
use rand::Rng;

use crate::{
    catalog::{aliases, Catalog, SkillConfig, SkillLevel, Specialization},
    models::{
        EnhancedFeatures, Plan, Preferences, Progress, ReferenceBlock, Timeline, UserInfo,
        REFERENCE_SOURCE,
    },
};

mod phases;
mod progress;
mod topics;


pub use phases::{partition_weeks, topics_per_phase, WeekSlot};
pub use progress::update_progress;

const HOURS_PER_WEEK: i64 = 7 * 24;

/// Variant toggle for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Populate prerequisites, learning paths, exercises, phase objectives
    /// and the enhanced-features block
    pub enhanced: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { enhanced: true }
    }
}

/// Preferences after alias and duration resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPreferences {
    pub specialization: Specialization,
    pub skill_level: SkillLevel,
    pub skill: SkillConfig,
    pub total_weeks: u32,
}

/// Builds plans from a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Generator for the enhanced variant.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, GeneratorOptions::default())
    }

    pub fn with_options(catalog: &'a Catalog, options: GeneratorOptions) -> Self {
        Self { catalog, options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve aliases and the plan length. Never fails: unknown aliases
    /// fall back to Web Development and Beginner.
    pub fn resolve(&self, prefs: &Preferences) -> ResolvedPreferences {
        let specialization = aliases::resolve_specialization(prefs.specialization.as_deref());
        let skill_level = aliases::resolve_skill_level(prefs.skill_focus.as_deref());
        let skill = self.catalog.skill(skill_level);
        let total_weeks = prefs.explicit_weeks().unwrap_or(skill.weeks);

        ResolvedPreferences {
            specialization,
            skill_level,
            skill,
            total_weeks,
        }
    }

    /// Generate a plan starting now, sampling from the thread-local RNG.
    pub fn generate(&self, prefs: &Preferences) -> Plan {
        self.generate_with(prefs, Timestamp::now(), &mut rand::rng())
    }

    /// Generate a plan with an explicit start time and random source.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        prefs: &Preferences,
        started_at: Timestamp,
        rng: &mut R,
    ) -> Plan {
        let resolved = self.resolve(prefs);
        debug!(
            "Generating {} plan: {} / {} over {} weeks",
            if self.options.enhanced {
                "enhanced"
            } else {
                "basic"
            },
            resolved.specialization.as_str(),
            resolved.skill_level.as_str(),
            resolved.total_weeks
        );

        let template = self.catalog.lookup(resolved.specialization);
        let phases = phases::build_phases(template, &resolved, self.options, rng);
        let end_date = add_weeks(started_at, resolved.total_weeks);

        let (learning_goals, focus_area) = if self.options.enhanced {
            (
                Some(prefs.learning_goals.clone().unwrap_or_default()),
                Some(prefs.focus_area.clone().unwrap_or_default()),
            )
        } else {
            (None, None)
        };

        let reference = self.catalog.reference(resolved.specialization);

        let mut plan = Plan {
            user_info: UserInfo {
                specialization: resolved.specialization,
                skill_level: resolved.skill_level,
                target_company: prefs.target_company().to_string(),
                target_position: prefs.position().to_string(),
                estimated_completion: end_date,
                learning_goals,
                focus_area,
            },
            timeline: Timeline {
                total_weeks: resolved.total_weeks,
                start_date: started_at,
                end_date,
            },
            phases,
            progress: Progress::default(),
            reference: ReferenceBlock {
                source: REFERENCE_SOURCE.to_string(),
                url: reference.source_url.clone(),
                description: reference.description.clone(),
                key_areas: reference.key_areas.clone(),
            },
            features: self.options.enhanced.then(EnhancedFeatures::default),
        };
        plan.progress.total_topics = plan.total_topics();
        plan
    }

    /// Recompute progress for `plan` against a set of completed topic ids.
    pub fn update_progress(&self, plan: &Plan, completed: &BTreeSet<String>) -> Plan {
        update_progress(plan, completed)
    }
}

/// `start + weeks`, saturating at the maximum representable timestamp.
fn add_weeks(start: Timestamp, weeks: u32) -> Timestamp {
    start
        .checked_add(SignedDuration::from_hours(i64::from(weeks) * HOURS_PER_WEEK))
        .unwrap_or(Timestamp::MAX)
}
