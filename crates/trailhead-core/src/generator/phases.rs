//! Week partitioning and phase assembly.

use log::debug;
use rand::Rng;

use super::{topics, GeneratorOptions, ResolvedPreferences};
use crate::{
    catalog::TemplateEntry,
    models::{Phase, PhaseName, PhaseStatus},
};

/// Week span of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSlot {
    pub weeks: u32,
    pub start_week: u32,
    pub end_week: u32,
}

/// Split `total_weeks` into four contiguous slots starting at week 1.
///
/// Each slot spans `total_weeks / 4` weeks; any remainder is left
/// unallocated after the last slot. A zero-week slot ends one week before
/// it starts.
///
/// ```rust
/// use trailhead_core::generator::partition_weeks;
///
/// let slots = partition_weeks(10);
/// assert_eq!(slots[3].start_week, 7);
/// assert_eq!(slots[3].end_week, 8);
/// ```
pub fn partition_weeks(total_weeks: u32) -> [WeekSlot; 4] {
    let weeks = total_weeks / 4;
    let mut start_week = 1;
    [0; 4].map(|_| {
        let slot = WeekSlot {
            weeks,
            start_week,
            end_week: (start_week + weeks).saturating_sub(1),
        };
        start_week += weeks;
        slot
    })
}

/// Number of topics each phase takes from its template list.
pub fn topics_per_phase(topic_budget: u32) -> usize {
    usize::try_from(topic_budget / 4 + 1).unwrap_or(usize::MAX)
}

pub(super) fn build_phases<R: Rng + ?Sized>(
    template: &TemplateEntry,
    resolved: &ResolvedPreferences,
    options: GeneratorOptions,
    rng: &mut R,
) -> Vec<Phase> {
    let slots = partition_weeks(resolved.total_weeks);
    let per_phase = topics_per_phase(resolved.skill.topics);

    PhaseName::ORDER
        .iter()
        .zip(template.lists())
        .zip(slots)
        .enumerate()
        .map(|(index, ((name, list), slot))| {
            if list.len() < per_phase {
                debug!(
                    "{} list has {} topics, wanted {}",
                    name.as_str(),
                    list.len(),
                    per_phase
                );
            }
            let phase_id = index as u32 + 1;
            let topics = list
                .iter()
                .take(per_phase)
                .enumerate()
                .map(|(position, title)| {
                    topics::build_topic(phase_id, position, title, index, options, rng)
                })
                .collect();

            let (learning_objectives, assessment_criteria) = if options.enhanced {
                (learning_objectives(*name), assessment_criteria(*name))
            } else {
                (Vec::new(), Vec::new())
            };

            Phase {
                id: phase_id,
                name: *name,
                weeks: slot.weeks,
                start_week: slot.start_week,
                end_week: slot.end_week,
                topics,
                status: if index == 0 {
                    PhaseStatus::Current
                } else {
                    PhaseStatus::Locked
                },
                difficulty: resolved.skill.difficulty.min(index as u8 + 1),
                learning_objectives,
                assessment_criteria,
            }
        })
        .collect()
}

fn learning_objectives(name: PhaseName) -> Vec<String> {
    let objectives: [&str; 4] = match name {
        PhaseName::Foundation => [
            "Master fundamental concepts and terminology",
            "Set up development environment",
            "Complete basic hands-on exercises",
            "Understand core principles",
        ],
        PhaseName::CoreSkills => [
            "Apply concepts in real-world scenarios",
            "Build intermediate-level projects",
            "Understand best practices and patterns",
            "Develop problem-solving skills",
        ],
        PhaseName::AdvancedTopics => [
            "Master advanced techniques and tools",
            "Build complex, production-ready projects",
            "Understand performance optimization",
            "Learn industry-specific knowledge",
        ],
        PhaseName::ProjectsPortfolio => [
            "Create impressive portfolio projects",
            "Demonstrate full-stack capabilities",
            "Showcase problem-solving skills",
            "Prepare for job interviews",
        ],
    };
    objectives.iter().map(|s| s.to_string()).collect()
}

fn assessment_criteria(name: PhaseName) -> Vec<String> {
    let criteria: [&str; 3] = match name {
        PhaseName::Foundation => ["Quiz completion", "Basic project", "Code review"],
        PhaseName::CoreSkills => ["Project submission", "Code quality", "Documentation"],
        PhaseName::AdvancedTopics => [
            "Complex project",
            "Performance analysis",
            "Code optimization",
        ],
        PhaseName::ProjectsPortfolio => [
            "Portfolio review",
            "Live demonstration",
            "Peer feedback",
        ],
    };
    criteria.iter().map(|s| s.to_string()).collect()
}
