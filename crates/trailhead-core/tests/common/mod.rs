use rand::{rngs::StdRng, SeedableRng};
use tempfile::TempDir;
use trailhead_core::{
    generator::Generator,
    models::{Plan, Preferences},
    Catalog, Mentor, MentorBuilder,
};

/// Helper function to create a test mentor backed by a temporary database
#[allow(dead_code)]
pub async fn create_test_mentor() -> (TempDir, Mentor) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mentor = MentorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create mentor");
    (temp_dir, mentor)
}

/// Helper function to generate a reproducible plan from the built-in catalog
#[allow(dead_code)]
pub fn generate_seeded_plan(specialization: &str, skill_focus: &str, seed: u64) -> Plan {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(seed);
    Generator::new(&catalog).generate_with(
        &Preferences::new(specialization, skill_focus),
        jiff::Timestamp::now(),
        &mut rng,
    )
}
