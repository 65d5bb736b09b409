//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{PhaseName, PhaseStatus, Plan, Progress};

/// Outcome of generating a plan for a learner.
///
/// ```rust
/// use trailhead_core::{
///     catalog::Catalog, display::GenerateResult, generator::Generator, models::Preferences,
/// };
///
/// let catalog = Catalog::builtin();
/// let plan = Generator::new(&catalog).generate(&Preferences::default());
///
/// let output = GenerateResult::new("ada", plan, false).to_string();
/// assert!(output.starts_with("Generated plan for learner 'ada'"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub learner_id: String,
    pub plan: Plan,
    /// An earlier plan for the learner was overwritten
    pub replaced: bool,
}

impl GenerateResult {
    pub fn new(learner_id: impl Into<String>, plan: Plan, replaced: bool) -> Self {
        Self {
            learner_id: learner_id.into(),
            plan,
            replaced,
        }
    }
}

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.replaced {
            writeln!(
                f,
                "Regenerated plan for learner '{}' (previous plan replaced)",
                self.learner_id
            )?;
        } else {
            writeln!(f, "Generated plan for learner '{}'", self.learner_id)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// A phase whose status moved during a progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub phase_id: u32,
    pub name: PhaseName,
    pub from: PhaseStatus,
    pub to: PhaseStatus,
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Phase {} {}: {} → {}",
            self.phase_id,
            self.name,
            self.from.with_icon(),
            self.to.with_icon()
        )
    }
}

/// Outcome of a progress update, with the phase transitions it caused.
#[derive(Debug, Clone)]
pub struct ProgressResult {
    pub learner_id: String,
    pub previous: Progress,
    pub plan: Plan,
    pub changes: Vec<PhaseChange>,
}

impl ProgressResult {
    /// Compare the plan before and after the update.
    pub fn new(learner_id: impl Into<String>, before: &Plan, plan: Plan) -> Self {
        let changes = before
            .phases
            .iter()
            .zip(&plan.phases)
            .filter(|(old, new)| old.status != new.status)
            .map(|(old, new)| PhaseChange {
                phase_id: new.id,
                name: new.name,
                from: old.status,
                to: new.status,
            })
            .collect();

        Self {
            learner_id: learner_id.into(),
            previous: before.progress,
            plan,
            changes,
        }
    }
}

impl fmt::Display for ProgressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.plan.progress;
        writeln!(
            f,
            "Updated progress for learner '{}': {}/{} topics ({}%)",
            self.learner_id,
            progress.completed_topics,
            progress.total_topics,
            progress.completion_percentage
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Phase changes:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        match self
            .plan
            .phases
            .iter()
            .find(|phase| phase.status == PhaseStatus::Current)
        {
            Some(phase) => writeln!(f, "Current phase: {} ({})", phase.id, phase.name),
            None if progress.total_topics > 0
                && progress.current_phase as usize == self.plan.phases.len() =>
            {
                writeln!(f, "All phases completed.")
            }
            None => Ok(()),
        }
    }
}

/// Outcome of deleting a learner's plan.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub learner_id: String,
}

impl DeleteResult {
    pub fn new(learner_id: impl Into<String>) -> Self {
        Self {
            learner_id: learner_id.into(),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted plan for learner '{}'", self.learner_id)
    }
}
