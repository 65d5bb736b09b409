//! Per-topic synthesis: hours, resources, milestones and enhanced extras.

use rand::{seq::index, Rng};

use super::GeneratorOptions;
use crate::models::{Priority, Resource, ResourceKind, ResourceLevel, Topic, TopicStatus};

/// Inclusive range of estimated hours per topic.
pub(super) const HOURS_RANGE: std::ops::RangeInclusive<u32> = 8..=20;

const BASIC_RESOURCES: usize = 3;
const ENHANCED_RESOURCES: usize = 4;
const BASIC_MILESTONES: usize = 2;
const ENHANCED_MILESTONES: usize = 3;
const EXERCISES: usize = 2;

/// Candidate resources: kind, platform and the enhanced difficulty label.
/// The basic variant draws from the first four.
const RESOURCE_CANDIDATES: [(ResourceKind, &str, ResourceLevel); 6] = [
    (ResourceKind::Course, "Coursera/edX", ResourceLevel::Beginner),
    (ResourceKind::Book, "O'Reilly/Packt", ResourceLevel::Intermediate),
    (
        ResourceKind::Tutorial,
        "YouTube/FreeCodeCamp",
        ResourceLevel::Beginner,
    ),
    (
        ResourceKind::Practice,
        "GitHub/Lab Environment",
        ResourceLevel::Advanced,
    ),
    (
        ResourceKind::Documentation,
        "Official Documentation",
        ResourceLevel::All,
    ),
    (
        ResourceKind::Community,
        "Stack Overflow/Reddit",
        ResourceLevel::All,
    ),
];

const LEARNING_PATH: [&str; 4] = [
    "Theory and concepts",
    "Hands-on practice",
    "Project implementation",
    "Review and optimization",
];

pub(super) fn build_topic<R: Rng + ?Sized>(
    phase_id: u32,
    position: usize,
    title: &str,
    phase_index: usize,
    options: GeneratorOptions,
    rng: &mut R,
) -> Topic {
    let estimated_hours = rng.random_range(HOURS_RANGE);
    let resources = resources(title, options.enhanced, rng);
    let milestones = milestones(title, options.enhanced, rng);

    let (prerequisites, learning_path, practical_exercises) = if options.enhanced {
        (
            prerequisites(phase_index),
            LEARNING_PATH.iter().map(|step| step.to_string()).collect(),
            exercises(title, rng),
        )
    } else {
        (Vec::new(), Vec::new(), Vec::new())
    };

    Topic {
        id: format!("{}.{}", phase_id, position + 1),
        title: title.to_string(),
        estimated_hours,
        resources,
        milestones,
        status: TopicStatus::Pending,
        priority: Priority::for_position(position),
        prerequisites,
        learning_path,
        practical_exercises,
    }
}

/// Pick `amount` distinct items in sampled order; never more than exist.
fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], amount: usize) -> Vec<T> {
    let amount = amount.min(items.len());
    index::sample(rng, items.len(), amount)
        .iter()
        .map(|i| items[i].clone())
        .collect()
}

fn resources<R: Rng + ?Sized>(topic: &str, enhanced: bool, rng: &mut R) -> Vec<Resource> {
    let (pool, amount) = if enhanced {
        (&RESOURCE_CANDIDATES[..], ENHANCED_RESOURCES)
    } else {
        (&RESOURCE_CANDIDATES[..4], BASIC_RESOURCES)
    };

    sample(rng, pool, amount)
        .into_iter()
        .map(|(kind, platform, level)| Resource {
            kind,
            name: kind.title_for(topic),
            platform: platform.to_string(),
            difficulty: enhanced.then_some(level),
        })
        .collect()
}

fn milestones<R: Rng + ?Sized>(topic: &str, enhanced: bool, rng: &mut R) -> Vec<String> {
    let mut candidates = vec![
        format!("Complete {topic} fundamentals"),
        format!("Build a small project using {topic}"),
        format!("Create a portfolio piece showcasing {topic}"),
        format!("Get certified in {topic} (optional)"),
    ];
    let amount = if enhanced {
        candidates.push(format!("Contribute to open-source {topic} project"));
        candidates.push(format!("Teach {topic} to others"));
        ENHANCED_MILESTONES
    } else {
        BASIC_MILESTONES
    };
    sample(rng, &candidates, amount)
}

fn prerequisites(phase_index: usize) -> Vec<String> {
    let items: [&str; 2] = match phase_index {
        0 => ["Basic computer skills", "Internet access"],
        1 => ["Foundation phase completion", "Basic programming knowledge"],
        _ => ["Previous phase completion", "Intermediate programming skills"],
    };
    items.iter().map(|s| s.to_string()).collect()
}

fn exercises<R: Rng + ?Sized>(topic: &str, rng: &mut R) -> Vec<String> {
    let candidates = [
        format!("Build a simple {topic} application"),
        format!("Debug and fix {topic} code issues"),
        format!("Optimize {topic} performance"),
        format!("Create {topic} documentation"),
    ];
    sample(rng, &candidates, EXERCISES)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_sample_never_exceeds_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample(&mut rng, &[1, 2], 5);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_basic_resources_come_from_first_four_kinds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let picked = resources("Rust", false, &mut rng);
            assert_eq!(picked.len(), BASIC_RESOURCES);
            for resource in &picked {
                assert!(resource.difficulty.is_none());
                assert!(!matches!(
                    resource.kind,
                    ResourceKind::Documentation | ResourceKind::Community
                ));
            }
        }
    }

    #[test]
    fn test_enhanced_resources_are_distinct_and_labelled() {
        let mut rng = StdRng::seed_from_u64(4);
        let picked = resources("SQL", true, &mut rng);
        assert_eq!(picked.len(), ENHANCED_RESOURCES);

        let mut kinds: Vec<_> = picked.iter().map(|r| r.kind.as_str()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), ENHANCED_RESOURCES);
        assert!(picked.iter().all(|r| r.difficulty.is_some()));
        assert!(picked.iter().all(|r| r.name.contains("SQL")));
    }

    #[test]
    fn test_topic_fields_by_variant() {
        let mut rng = StdRng::seed_from_u64(5);
        let basic = build_topic(2, 0, "Docker", 1, GeneratorOptions { enhanced: false }, &mut rng);
        assert_eq!(basic.id, "2.1");
        assert_eq!(basic.priority, Priority::High);
        assert_eq!(basic.milestones.len(), BASIC_MILESTONES);
        assert!(basic.prerequisites.is_empty());
        assert!(basic.learning_path.is_empty());
        assert!(basic.practical_exercises.is_empty());

        let enhanced = build_topic(3, 2, "Docker", 2, GeneratorOptions { enhanced: true }, &mut rng);
        assert_eq!(enhanced.id, "3.3");
        assert_eq!(enhanced.priority, Priority::Medium);
        assert_eq!(enhanced.milestones.len(), ENHANCED_MILESTONES);
        assert_eq!(
            enhanced.prerequisites,
            vec!["Previous phase completion", "Intermediate programming skills"]
        );
        assert_eq!(enhanced.learning_path.len(), 4);
        assert_eq!(enhanced.learning_path[0], "Theory and concepts");
        assert_eq!(enhanced.practical_exercises.len(), EXERCISES);
        assert!(HOURS_RANGE.contains(&enhanced.estimated_hours));
    }
}
