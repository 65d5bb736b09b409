//! Core handler functions for the roadmap workflows.
//!
//! Each handler wraps one complete workflow on top of the [`Mentor`] and
//! returns a structured value (usually a display wrapper from
//! [`crate::display`]) that any interface can print or serialize.
//!
//! ```text
//! Interface → Handler → Mentor → Generator + Database
//! ```
//!
//! ### Query Handlers
//! Return stored data or fail with `PlanNotFound`:
//! ```text
//! pub async fn handle_show_plan(mentor: &Mentor, params: &LearnerId) -> Result<Plan>
//! ```
//!
//! ### Command Handlers
//! Return the outcome for confirmation:
//! ```text
//! pub async fn handle_complete_topics(mentor: &Mentor, params: &CompleteTopics) -> Result<ProgressResult>
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use trailhead_core::{handlers::handle_list_plans, MentorBuilder};
//! # async {
//! let mentor = MentorBuilder::new().build().await?;
//! let summaries = handle_list_plans(&mentor).await?;
//! println!("{summaries}");
//! # Result::<(), trailhead_core::RoadmapError>::Ok(())
//! # };
//! ```

use crate::{
    catalog::{aliases::SPECIALIZATION_ALIASES, Catalog, Reference, Specialization},
    display::{DeleteResult, GenerateResult, PlanSummaries, ProgressResult},
    models::{Phase, Plan},
    params::{CompleteTopics, DeletePlan, GeneratePlan, LearnerId, SetProgress, ShowPhase},
    Mentor, Result, RoadmapError,
};

/// Handle generating and storing a plan.
///
/// # Examples
///
/// ```rust,no_run
/// # use trailhead_core::{handlers::handle_generate_plan, params::GeneratePlan, MentorBuilder};
/// # async {
/// let mentor = MentorBuilder::new().build().await?;
/// let mut params = GeneratePlan::default();
/// params.learner_id = "ada".to_string();
/// let result = handle_generate_plan(&mentor, &params).await?;
/// assert_eq!(result.plan.phases.len(), 4);
/// # Result::<(), trailhead_core::RoadmapError>::Ok(())
/// # };
/// ```
pub async fn handle_generate_plan(mentor: &Mentor, params: &GeneratePlan) -> Result<GenerateResult> {
    mentor.generate_plan(params).await
}

/// Handle showing a learner's complete plan.
pub async fn handle_show_plan(mentor: &Mentor, params: &LearnerId) -> Result<Plan> {
    mentor.require_plan(params).await
}

/// Handle showing a single phase of a learner's plan.
pub async fn handle_show_phase(mentor: &Mentor, params: &ShowPhase) -> Result<Phase> {
    mentor.get_phase(params).await
}

/// Handle marking topics completed on top of existing progress.
pub async fn handle_complete_topics(
    mentor: &Mentor,
    params: &CompleteTopics,
) -> Result<ProgressResult> {
    mentor.complete_topics(params).await
}

/// Handle replacing a learner's completed set.
pub async fn handle_set_progress(mentor: &Mentor, params: &SetProgress) -> Result<ProgressResult> {
    mentor.set_progress(params).await
}

/// Handle listing every stored plan.
pub async fn handle_list_plans(mentor: &Mentor) -> Result<PlanSummaries> {
    Ok(PlanSummaries(mentor.list_plans().await?))
}

/// Handle deleting a learner's plan.
///
/// Unlike [`Mentor::delete_plan`], a learner without a plan is an error.
pub async fn handle_delete_plan(mentor: &Mentor, params: &DeletePlan) -> Result<DeleteResult> {
    if mentor.delete_plan(params).await? {
        Ok(DeleteResult::new(params.learner_id.clone()))
    } else {
        Err(RoadmapError::PlanNotFound {
            learner_id: params.learner_id.clone(),
        })
    }
}

/// Handle a reference lookup by specialization alias.
///
/// Resolves the alias the same way generation does, so an unknown alias
/// yields the Web Development reference.
pub fn handle_reference<'a>(
    catalog: &'a Catalog,
    alias: Option<&str>,
) -> (Specialization, &'a Reference) {
    let specialization = SPECIALIZATION_ALIASES.resolve(alias);
    (specialization, catalog.reference(specialization))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{models::Preferences, MentorBuilder};

    #[tokio::test]
    async fn test_delete_missing_plan_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mentor = MentorBuilder::new()
            .with_database_path(Some(temp_dir.path().join("handlers.db")))
            .build()
            .await
            .unwrap();

        let error = handle_delete_plan(
            &mentor,
            &DeletePlan {
                learner_id: "ghost".to_string(),
                confirmed: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(error, RoadmapError::PlanNotFound { .. }));
    }

    #[tokio::test]
    async fn test_show_and_list_after_generate() {
        let temp_dir = TempDir::new().unwrap();
        let mentor = MentorBuilder::new()
            .with_database_path(Some(temp_dir.path().join("handlers.db")))
            .build()
            .await
            .unwrap();

        let params = GeneratePlan {
            learner_id: "ada".to_string(),
            preferences: Preferences::new("mobile_development", "hard_skills"),
            seed: None,
        };
        handle_generate_plan(&mentor, &params).await.unwrap();

        let plan = handle_show_plan(&mentor, &LearnerId::new("ada")).await.unwrap();
        assert_eq!(plan.user_info.specialization, Specialization::MobileDevelopment);

        let summaries = handle_list_plans(&mentor).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].learner_id, "ada");
    }

    #[test]
    fn test_reference_lookup_falls_back() {
        let catalog = Catalog::builtin();

        let (specialization, reference) = handle_reference(&catalog, Some("data_science"));
        assert_eq!(specialization, Specialization::DataScience);
        assert_eq!(reference, catalog.reference(Specialization::DataScience));

        let (fallback, reference) = handle_reference(&catalog, Some("astrology"));
        assert_eq!(fallback, Specialization::WebDevelopment);
        assert_eq!(reference.source_url, catalog.reference_url(fallback));
    }
}
