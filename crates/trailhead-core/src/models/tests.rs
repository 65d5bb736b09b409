#[cfg(test)]
mod model_tests {
    use std::collections::BTreeSet;

    use jiff::Timestamp;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        catalog::{Catalog, SkillLevel, Specialization},
        generator::{Generator, GeneratorOptions},
        models::{
            Phase, PhaseName, PhaseStatus, Plan, PlanSummary, Preferences, Priority, Resource,
            ResourceKind, ResourceLevel, Topic, TopicStatus,
        },
    };

    fn create_test_topic(status: TopicStatus) -> Topic {
        Topic {
            id: "2.1".to_string(),
            title: "API Development".to_string(),
            estimated_hours: 12,
            resources: vec![Resource {
                kind: ResourceKind::Book,
                name: ResourceKind::Book.title_for("API Development"),
                platform: "O'Reilly/Packt".to_string(),
                difficulty: Some(ResourceLevel::Intermediate),
            }],
            milestones: vec!["Complete API Development fundamentals".to_string()],
            status,
            priority: Priority::High,
            prerequisites: vec![],
            learning_path: vec![
                "Theory and concepts".to_string(),
                "Hands-on practice".to_string(),
            ],
            practical_exercises: vec![],
        }
    }

    fn create_test_phase(status: PhaseStatus) -> Phase {
        Phase {
            id: 2,
            name: PhaseName::CoreSkills,
            weeks: 3,
            start_week: 4,
            end_week: 6,
            topics: vec![create_test_topic(TopicStatus::Pending)],
            status,
            difficulty: 2,
            learning_objectives: vec!["Build intermediate-level projects".to_string()],
            assessment_criteria: vec![],
        }
    }

    fn create_test_plan(enhanced: bool) -> Plan {
        let catalog = Catalog::builtin();
        let generator = Generator::with_options(&catalog, GeneratorOptions { enhanced });
        let mut rng = StdRng::seed_from_u64(99);
        let prefs = Preferences {
            learning_goals: Some("Ship a side project".to_string()),
            ..Preferences::new("web_development", "soft_skills")
        };
        generator.generate_with(&prefs, Timestamp::from_second(1_718_452_800).unwrap(), &mut rng)
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(PhaseStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(PhaseStatus::Current.with_icon(), "➤ Current");
        assert_eq!(PhaseStatus::Locked.with_icon(), "○ Locked");
        assert_eq!(TopicStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(TopicStatus::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Current".parse::<PhaseStatus>(), Ok(PhaseStatus::Current));
        assert_eq!("done".parse::<TopicStatus>(), Ok(TopicStatus::Completed));
        assert!("paused".parse::<PhaseStatus>().is_err());
    }

    #[test]
    fn test_priority_by_position() {
        assert_eq!(Priority::for_position(0), Priority::High);
        assert_eq!(Priority::for_position(1), Priority::High);
        assert_eq!(Priority::for_position(2), Priority::Medium);
    }

    #[test]
    fn test_topic_display() {
        let output = create_test_topic(TopicStatus::Pending).to_string();

        assert!(output.contains("### 2.1 API Development (○ Pending)"));
        assert!(output.contains("- Priority: high, about 12 hours"));
        assert!(output.contains("#### Resources"));
        assert!(output
            .contains("- **Book**: Learning API Development (O'Reilly/Packt, Intermediate)"));
        assert!(output.contains("#### Milestones"));
        assert!(output.contains("1. Theory and concepts"));
        assert!(output.contains("2. Hands-on practice"));
        // Empty sections are omitted
        assert!(!output.contains("#### Prerequisites"));
        assert!(!output.contains("#### Practical Exercises"));

        let done = create_test_topic(TopicStatus::Completed).to_string();
        assert!(done.contains("(✓ Completed)"));
    }

    #[test]
    fn test_phase_display() {
        let output = create_test_phase(PhaseStatus::Current).to_string();

        assert!(output.contains("## Phase 2: Core Skills (➤ Current)"));
        assert!(output.contains("- Weeks: 4 to 6 (3 weeks)"));
        assert!(output.contains("- Difficulty: 2/4"));
        assert!(output.contains("### Learning Objectives"));
        assert!(!output.contains("### Assessment Criteria"));
        assert!(output.contains("### 2.1 API Development"));

        let mut empty = create_test_phase(PhaseStatus::Locked);
        empty.weeks = 0;
        empty.topics.clear();
        let output = empty.to_string();
        assert!(output.contains("(○ Locked)"));
        assert!(output.contains("- Weeks: none allocated"));
        assert!(output.contains("No topics in this phase."));
    }

    #[test]
    fn test_plan_display() {
        let plan = create_test_plan(true);
        let output = plan.to_string();

        assert!(output.starts_with("# Web Development Roadmap"));
        assert!(output.contains("- Skill level: Beginner"));
        assert!(output.contains("- Target: Developer at Tech Company"));
        assert!(output.contains("- Timeline: 8 weeks, June "));
        assert!(output.contains("- Estimated completion: August 2024"));
        assert!(output.contains("- Progress: 0/8 topics (0%), 0 of 4 phases completed"));
        assert!(output.contains("- Learning goals: Ship a side project"));
        assert!(!output.contains("- Focus area:"));
        assert!(output.contains("## Phase 1: Foundation (➤ Current)"));
        assert!(output.contains("## Phase 4: Projects & Portfolio (○ Locked)"));
        assert!(output.contains("## Reference (roadmap.sh)"));
        assert!(output.contains(&plan.reference.url));
    }

    #[test]
    fn test_plan_summary_display() {
        let summary = PlanSummary {
            learner_id: "ada".to_string(),
            specialization: Specialization::CloudComputing,
            skill_level: SkillLevel::Advanced,
            total_weeks: 16,
            completed_topics: 4,
            total_topics: 16,
            completion_percentage: 25,
            current_phase: 1,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
        };
        let output = summary.to_string();

        assert!(output.contains("## ada: Cloud Computing (Advanced) (4/16)"));
        assert!(output.contains("- **Progress**: 25%, 1 phases completed"));
        assert!(output.contains("- **Length**: 16 weeks"));
        assert!(output.contains("- **Updated**: 2022-01-0"));
        assert_eq!(summary.remaining_topics(), 12);
    }

    #[test]
    fn test_plan_document_shape() {
        let plan = create_test_plan(true);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["user_info"]["specialization"], "Web Development");
        assert_eq!(json["user_info"]["skill_level"], "Beginner");
        assert_eq!(json["phases"][0]["name"], "Foundation");
        assert_eq!(json["phases"][3]["name"], "Projects & Portfolio");
        assert_eq!(json["phases"][0]["status"], "current");
        assert_eq!(json["phases"][0]["topics"][0]["status"], "pending");
        assert_eq!(json["phases"][0]["topics"][0]["priority"], "high");
        assert!(json["phases"][0]["topics"][0]["resources"][0]["type"].is_string());
        assert_eq!(json["reference"]["source"], "roadmap.sh");
        assert_eq!(json["enhanced_features"]["mentor_support"], true);

        let restored: Plan = serde_json::from_value(json).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_basic_document_omits_enhanced_fields() {
        let plan = create_test_plan(false);
        let json = serde_json::to_value(&plan).unwrap();

        assert!(json.get("enhanced_features").is_none());
        assert!(json["user_info"].get("learning_goals").is_none());
        assert!(json["phases"][0].get("learning_objectives").is_none());
        let topic = &json["phases"][0]["topics"][0];
        assert!(topic.get("prerequisites").is_none());
        assert!(topic["resources"][0].get("difficulty").is_none());
    }

    #[test]
    fn test_plan_lookups() {
        let plan = create_test_plan(true);

        assert_eq!(plan.total_topics(), 8);
        assert_eq!(plan.phase(3).map(|p| p.name), Some(PhaseName::AdvancedTopics));
        assert!(plan.phase(0).is_none());
        assert_eq!(
            plan.topic("4.2").map(|t| t.title.as_str()),
            Some("E-commerce Application")
        );
        assert!(plan.topic("4.3").is_none());
        assert!(plan.completed_topic_ids().is_empty());
        assert!(plan.is_enhanced());

        let ids: BTreeSet<String> = plan.phases[0].topic_ids().map(str::to_string).collect();
        assert!(plan.phases[0].is_covered_by(&ids));
        assert!(!plan.phases[1].is_covered_by(&ids));
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.target_company(), "Tech Company");
        assert_eq!(prefs.position(), "Developer");
        assert_eq!(prefs.explicit_weeks(), None);

        let prefs = Preferences {
            learning_duration: Some(0),
            ..Preferences::default()
        };
        assert_eq!(prefs.explicit_weeks(), None);
    }
}
