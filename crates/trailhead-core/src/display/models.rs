//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.
//! Everything renders as markdown for the terminal renderer.

use std::fmt;

use super::datetime::{LocalDateTime, LongDate, MonthYear};
use crate::{
    catalog::{Reference, SkillLevel, Specialization},
    models::{
        Phase, PhaseName, PhaseStatus, Plan, PlanSummary, Priority, Resource, ResourceKind,
        ResourceLevel, Topic, TopicStatus,
    },
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    PhaseStatus,
    TopicStatus,
    Priority,
    PhaseName,
    ResourceKind,
    ResourceLevel,
    Specialization,
    SkillLevel,
);

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**: {} ({}", self.kind, self.name, self.platform)?;
        if let Some(level) = self.difficulty {
            write!(f, ", {level}")?;
        }
        writeln!(f, ")")
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{heading}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Priority: {}, about {} hours",
            self.priority, self.estimated_hours
        )?;
        writeln!(f)?;

        if !self.resources.is_empty() {
            writeln!(f, "#### Resources")?;
            writeln!(f)?;
            for resource in &self.resources {
                write!(f, "{resource}")?;
            }
            writeln!(f)?;
        }

        write_list(f, "#### Milestones", &self.milestones)?;
        write_list(f, "#### Prerequisites", &self.prerequisites)?;

        if !self.learning_path.is_empty() {
            writeln!(f, "#### Learning Path")?;
            writeln!(f)?;
            for (index, step) in self.learning_path.iter().enumerate() {
                writeln!(f, "{}. {step}", index + 1)?;
            }
            writeln!(f)?;
        }

        write_list(f, "#### Practical Exercises", &self.practical_exercises)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Phase {}: {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        if self.weeks == 0 {
            writeln!(f, "- Weeks: none allocated")?;
        } else {
            writeln!(
                f,
                "- Weeks: {} to {} ({} weeks)",
                self.start_week, self.end_week, self.weeks
            )?;
        }
        writeln!(f, "- Difficulty: {}/4", self.difficulty)?;
        writeln!(f)?;

        write_list(f, "### Learning Objectives", &self.learning_objectives)?;
        write_list(f, "### Assessment Criteria", &self.assessment_criteria)?;

        if self.topics.is_empty() {
            writeln!(f, "No topics in this phase.")?;
            writeln!(f)?;
        }
        for topic in &self.topics {
            write!(f, "{topic}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Source: {}", self.source_url)?;
        if !self.key_areas.is_empty() {
            writeln!(f, "- Key areas: {}", self.key_areas.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.user_info;
        writeln!(f, "# {} Roadmap", info.specialization)?;
        writeln!(f)?;
        writeln!(f, "- Skill level: {}", info.skill_level)?;
        writeln!(
            f,
            "- Target: {} at {}",
            info.target_position, info.target_company
        )?;
        writeln!(
            f,
            "- Timeline: {} weeks, {} to {}",
            self.timeline.total_weeks,
            LongDate(&self.timeline.start_date),
            LongDate(&self.timeline.end_date)
        )?;
        writeln!(
            f,
            "- Estimated completion: {}",
            MonthYear(&info.estimated_completion)
        )?;
        writeln!(
            f,
            "- Progress: {}/{} topics ({}%), {} of {} phases completed",
            self.progress.completed_topics,
            self.progress.total_topics,
            self.progress.completion_percentage,
            self.progress.current_phase,
            self.phases.len()
        )?;
        if let Some(goals) = info.learning_goals.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "- Learning goals: {goals}")?;
        }
        if let Some(area) = info.focus_area.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "- Focus area: {area}")?;
        }
        writeln!(f)?;

        for phase in &self.phases {
            write!(f, "{phase}")?;
        }

        writeln!(f, "## Reference ({})", self.reference.source)?;
        writeln!(f)?;
        writeln!(f, "{}", self.reference.description)?;
        writeln!(f)?;
        writeln!(f, "- Source: {}", self.reference.url)?;
        if !self.reference.key_areas.is_empty() {
            writeln!(f, "- Key areas: {}", self.reference.key_areas.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}: {} ({}) ({}/{})",
            self.learner_id,
            self.specialization,
            self.skill_level,
            self.completed_topics,
            self.total_topics
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Progress**: {}%, {} phases completed",
            self.completion_percentage, self.current_phase
        )?;
        writeln!(f, "- **Length**: {} weeks", self.total_weeks)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}
