//! Plan operations for the Mentor.

use std::collections::BTreeSet;

use jiff::Timestamp;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use super::Mentor;
use crate::{
    db::StoredPlan,
    display::{GenerateResult, ProgressResult},
    error::{RoadmapError, Result},
    generator::update_progress,
    models::{Phase, Plan, PlanSummary},
    params::{
        validate_learner_id, CompleteTopics, DeletePlan, GeneratePlan, LearnerId, SetProgress,
        ShowPhase,
    },
};

/// Every id in `ids` must name a topic of `plan`.
fn ensure_topics_exist<'a>(plan: &Plan, ids: impl IntoIterator<Item = &'a String>) -> Result<()> {
    for id in ids {
        if plan.topic(id).is_none() {
            return Err(RoadmapError::TopicNotFound {
                topic_id: id.clone(),
            });
        }
    }
    Ok(())
}

impl Mentor {
    /// Builds a plan without touching the store.
    ///
    /// With a seed the sampled content is reproducible; without one the
    /// thread-local generator is used.
    pub fn build_plan(&self, params: &GeneratePlan) -> Plan {
        let generator = self.generator();
        match params.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generator.generate_with(&params.preferences, Timestamp::now(), &mut rng)
            }
            None => generator.generate(&params.preferences),
        }
    }

    /// Generates a plan for the learner and stores it, replacing any
    /// previous plan.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<GenerateResult> {
        validate_learner_id(&params.learner_id)?;
        let plan = self.build_plan(params);
        let learner_id = params.learner_id.clone();

        let outcome = self
            .with_database(move |db| db.save_plan(&learner_id, &plan))
            .await?;

        Ok(GenerateResult::new(
            outcome.stored.learner_id,
            outcome.stored.plan,
            outcome.replaced,
        ))
    }

    /// Retrieves the stored plan and its row metadata.
    pub async fn get_plan(&self, params: &LearnerId) -> Result<Option<StoredPlan>> {
        validate_learner_id(&params.learner_id)?;
        let learner_id = params.learner_id.clone();

        self.with_database(move |db| db.get_plan(&learner_id)).await
    }

    /// Retrieves the stored plan, failing with `PlanNotFound` when absent.
    pub async fn require_plan(&self, params: &LearnerId) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .map(|stored| stored.plan)
            .ok_or_else(|| RoadmapError::PlanNotFound {
                learner_id: params.learner_id.clone(),
            })
    }

    /// Retrieves one phase of a stored plan.
    pub async fn get_phase(&self, params: &ShowPhase) -> Result<Phase> {
        let plan = self
            .require_plan(&LearnerId::new(params.learner_id.clone()))
            .await?;

        plan.phases
            .into_iter()
            .find(|phase| phase.id == params.phase_id)
            .ok_or(RoadmapError::PhaseNotFound {
                phase_id: params.phase_id,
            })
    }

    /// Marks topics completed in addition to those already completed.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` for an unknown learner and `TopicNotFound` when any id
    /// is not part of the plan; the stored plan is unchanged in both cases.
    pub async fn complete_topics(&self, params: &CompleteTopics) -> Result<ProgressResult> {
        validate_learner_id(&params.learner_id)?;
        if params.topic_ids.is_empty() {
            return Err(RoadmapError::invalid_input("topic_ids")
                .with_reason("at least one topic id is required"));
        }

        let topic_ids = params.topic_ids.clone();
        self.apply_progress(&params.learner_id, move |plan| {
            ensure_topics_exist(plan, &topic_ids)?;
            let mut completed = plan.completed_topic_ids();
            completed.extend(topic_ids);
            Ok(completed)
        })
        .await
    }

    /// Replaces the completed set with exactly the given ids.
    pub async fn set_progress(&self, params: &SetProgress) -> Result<ProgressResult> {
        validate_learner_id(&params.learner_id)?;

        let completed: BTreeSet<String> = params.completed.iter().cloned().collect();
        self.apply_progress(&params.learner_id, move |plan| {
            ensure_topics_exist(plan, &completed)?;
            Ok(completed)
        })
        .await
    }

    async fn apply_progress<F>(&self, learner_id: &str, completed_for: F) -> Result<ProgressResult>
    where
        F: FnOnce(&Plan) -> Result<BTreeSet<String>> + Send + 'static,
    {
        let owned_id = learner_id.to_string();
        let update = self
            .with_database(move |db| {
                db.update_plan(&owned_id, |plan| {
                    let completed = completed_for(plan)?;
                    debug!("Recomputing progress with {} completed topics", completed.len());
                    Ok(update_progress(plan, &completed))
                })
            })
            .await?
            .ok_or_else(|| RoadmapError::PlanNotFound {
                learner_id: learner_id.to_string(),
            })?;

        Ok(ProgressResult::new(
            update.stored.learner_id,
            &update.previous,
            update.stored.plan,
        ))
    }

    /// Summaries of every stored plan, most recently updated first.
    pub async fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        self.with_database(|db| db.list_plan_summaries()).await
    }

    /// Deletes a learner's plan after confirmation. Returns false when the
    /// learner had no plan.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<bool> {
        params.validate()?;
        let learner_id = params.learner_id.clone();

        self.with_database(move |db| db.delete_plan(&learner_id))
            .await
    }
}
