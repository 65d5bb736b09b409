//! Progress recomputation.

use std::collections::BTreeSet;

use log::debug;

use crate::models::{PhaseStatus, Plan, TopicStatus};

/// Return a copy of `plan` with statuses and counters recomputed from
/// exactly the `completed` topic ids.
///
/// The recomputation starts from scratch on every call, so the result
/// depends only on the plan's structure and the given set. Phases complete
/// strictly in order: a phase is `completed` only when all of its topics
/// are in the set and every earlier phase is completed. The first phase
/// that fails this test is `current`; every later phase is `locked`.
///
/// `completed_topics` is the size of the set as given, and the percentage
/// is `floor(100 * completed / total)`, or 0 for a plan without topics.
pub fn update_progress(plan: &Plan, completed: &BTreeSet<String>) -> Plan {
    let mut updated = plan.clone();

    for topic in updated.phases.iter_mut().flat_map(|p| p.topics.iter_mut()) {
        topic.status = if completed.contains(&topic.id) {
            TopicStatus::Completed
        } else {
            TopicStatus::Pending
        };
    }

    let mut current_phase = 0u32;
    for (index, phase) in updated.phases.iter_mut().enumerate() {
        let at_cursor = index as u32 == current_phase;
        phase.status = if at_cursor && phase.is_covered_by(completed) {
            current_phase += 1;
            PhaseStatus::Completed
        } else if at_cursor {
            PhaseStatus::Current
        } else {
            PhaseStatus::Locked
        };
    }

    let total_topics = updated.total_topics();
    let completed_topics = u32::try_from(completed.len()).unwrap_or(u32::MAX);

    updated.progress.current_phase = current_phase;
    updated.progress.total_topics = total_topics;
    updated.progress.completed_topics = completed_topics;
    updated.progress.completion_percentage = percentage(completed_topics, total_topics);

    debug!(
        "Progress recomputed: {}/{} topics, {} phases completed",
        completed_topics, total_topics, current_phase
    );
    updated
}

fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let value = u64::from(completed) * 100 / u64::from(total);
    u32::try_from(value).unwrap_or(u32::MAX)
}
