use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn th_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("th").expect("Failed to find th binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn generate_plan(temp_dir: &TempDir, learner_id: &str) {
    th_cmd(temp_dir)
        .args(["generate", learner_id, "--seed", "42"])
        .assert()
        .success();
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("Invalid JSON output")
}

#[test]
fn test_cli_generate_default_plan() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .args(["generate", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated plan for learner 'ada'"))
        .stdout(predicate::str::contains("# Web Development Roadmap"))
        .stdout(predicate::str::contains("- Timeline: 8 weeks"))
        .stdout(predicate::str::contains("## Phase 1: Foundation (➤ Current)"))
        .stdout(predicate::str::contains("### 1.1 HTML5 & CSS3 (○ Pending)"));
}

#[test]
fn test_cli_regenerate_replaces_plan() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args([
            "generate",
            "ada",
            "--specialization",
            "cloud_computing",
            "--skill-focus",
            "hard_skills",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Regenerated plan for learner 'ada'"))
        .stdout(predicate::str::contains("# Cloud Computing Roadmap"))
        .stdout(predicate::str::contains("- Skill level: Intermediate"));
}

#[test]
fn test_cli_generate_json_document() {
    let temp_dir = create_cli_test_environment();

    let json = stdout_json(th_cmd(&temp_dir).args([
        "generate",
        "ada",
        "--specialization",
        "machine_learning",
        "--weeks",
        "10",
        "--company",
        "Acme",
        "--json",
    ]));

    assert_eq!(json["user_info"]["specialization"], "Machine Learning");
    assert_eq!(json["user_info"]["target_company"], "Acme");
    assert_eq!(json["user_info"]["target_position"], "Developer");
    assert_eq!(json["timeline"]["total_weeks"], 10);
    assert_eq!(json["phases"].as_array().unwrap().len(), 4);
    assert_eq!(json["phases"][3]["end_week"], 8);
    assert_eq!(json["reference"]["source"], "roadmap.sh");
    assert_eq!(json["enhanced_features"]["adaptive_learning"], true);
}

#[test]
fn test_cli_basic_variant() {
    let temp_dir = create_cli_test_environment();

    let json = stdout_json(th_cmd(&temp_dir).args(["--basic", "generate", "ada", "--json"]));

    assert!(json.get("enhanced_features").is_none());
    assert!(json["phases"][0].get("learning_objectives").is_none());
    assert_eq!(
        json["phases"][0]["topics"][0]["resources"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn test_cli_seed_reproduces_content() {
    let temp_dir = create_cli_test_environment();

    let first = stdout_json(th_cmd(&temp_dir).args(["generate", "ada", "--seed", "9", "--json"]));
    let second =
        stdout_json(th_cmd(&temp_dir).args(["generate", "grace", "--seed", "9", "--json"]));

    assert_eq!(first["phases"], second["phases"]);
}

#[test]
fn test_cli_show_plan_and_phase() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["show", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Web Development Roadmap"))
        .stdout(predicate::str::contains("## Reference (roadmap.sh)"))
        .stdout(predicate::str::contains("https://roadmap.sh/frontend"));

    th_cmd(&temp_dir)
        .args(["show", "ada", "--phase", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Phase 2: Core Skills (○ Locked)"))
        .stdout(predicate::str::contains("### 2.1 Frontend Frameworks (React/Vue)"))
        .stdout(predicate::str::contains("Phase 1").not());

    let phase = stdout_json(th_cmd(&temp_dir).args(["show", "ada", "--phase", "4", "--json"]));
    assert_eq!(phase["name"], "Projects & Portfolio");
}

#[test]
fn test_cli_show_missing_plan_fails() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No plan found for learner 'ghost'"));
}

#[test]
fn test_cli_show_missing_phase_fails() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["show", "ada", "--phase", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phase 5 not found in plan"));
}

#[test]
fn test_cli_complete_topics_advances_phase() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["complete", "ada", "1.1", "1.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated progress for learner 'ada': 2/8 topics (25%)",
        ))
        .stdout(predicate::str::contains(
            "Phase 1 Foundation: ➤ Current → ✓ Completed",
        ))
        .stdout(predicate::str::contains("Current phase: 2 (Core Skills)"));

    // Completing more keeps the earlier topics
    th_cmd(&temp_dir)
        .args(["complete", "ada", "2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3/8 topics (37%)"));
}

#[test]
fn test_cli_complete_unknown_topic_fails() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["complete", "ada", "9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Topic '9.9' not found in plan"));
}

#[test]
fn test_cli_progress_replaces_completed_set() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["progress", "ada", "--completed", "1.1,1.2,2.1,2.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4/8 topics (50%)"))
        .stdout(predicate::str::contains("Current phase: 3 (Advanced Topics)"));

    // No ids resets progress
    th_cmd(&temp_dir)
        .args(["progress", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/8 topics (0%)"))
        .stdout(predicate::str::contains("Current phase: 1 (Foundation)"));
}

#[test]
fn test_cli_list_plans() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored plans."));

    generate_plan(&temp_dir, "ada");
    th_cmd(&temp_dir)
        .args(["complete", "ada", "1.1"])
        .assert()
        .success();

    th_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "## ada: Web Development (Beginner) (1/8)",
        ));

    // No subcommand lists plans too
    th_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("## ada"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    generate_plan(&temp_dir, "ada");

    th_cmd(&temp_dir)
        .args(["delete", "ada"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("without --confirm"));

    th_cmd(&temp_dir)
        .args(["delete", "ada", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Deleted plan for learner 'ada'",
        ));

    th_cmd(&temp_dir)
        .args(["delete", "ada", "--confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No plan found for learner 'ada'"));
}

#[test]
fn test_cli_reference_lookup() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .args(["reference", "data_science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Data Science Reference"))
        .stdout(predicate::str::contains("https://roadmap.sh/data-scientist"));

    th_cmd(&temp_dir)
        .args(["reference", "astrology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Web Development Reference"));
}

#[test]
fn test_cli_catalog_listing() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Specializations"))
        .stdout(predicate::str::contains("`web_development`"))
        .stdout(predicate::str::contains("## Skill Levels"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("broken.json");
    std::fs::write(&catalog_path, "{ not json").unwrap();

    th_cmd(&temp_dir)
        .args(["--catalog-file", catalog_path.to_str().unwrap(), "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize mentor"));
}

#[test]
fn test_cli_schema_output() {
    let temp_dir = create_cli_test_environment();

    let json = stdout_json(th_cmd(&temp_dir).arg("schema"));

    assert!(json["plan"]["properties"]["phases"].is_object());
    assert!(json["preferences"]["properties"]["specialization"].is_object());
}

#[test]
fn test_cli_invalid_learner_id() {
    let temp_dir = create_cli_test_environment();

    th_cmd(&temp_dir)
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("learner_id"));
}
