//! Plan document persistence queries.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, types::Type, OptionalExtension, Row, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, PlanSummary},
};

const UPSERT_PLAN_SQL: &str = "INSERT INTO learner_plans (learner_id, plan_data, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
     ON CONFLICT(learner_id) DO UPDATE SET plan_data = excluded.plan_data, updated_at = excluded.updated_at";
const SELECT_PLAN_SQL: &str =
    "SELECT learner_id, plan_data, created_at, updated_at FROM learner_plans WHERE learner_id = ?1";
const SELECT_ALL_PLANS_SQL: &str = "SELECT learner_id, plan_data, created_at, updated_at FROM learner_plans ORDER BY updated_at DESC, learner_id";
const CHECK_PLAN_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM learner_plans WHERE learner_id = ?1)";
const DELETE_PLAN_SQL: &str = "DELETE FROM learner_plans WHERE learner_id = ?1";

/// A plan document together with its row metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPlan {
    pub learner_id: String,
    pub plan: Plan,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StoredPlan {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from_plan(
            self.learner_id.clone(),
            &self.plan,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Outcome of [`Database::save_plan`](super::Database::save_plan).
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub stored: StoredPlan,
    /// A plan already existed for the learner and was overwritten
    pub replaced: bool,
}

/// Outcome of [`Database::update_plan`](super::Database::update_plan).
#[derive(Debug, Clone)]
pub struct PlanUpdate {
    /// The document as it was before the update
    pub previous: Plan,
    pub stored: StoredPlan,
}

/// Raw row before the JSON document is parsed.
struct PlanRow {
    learner_id: String,
    plan_data: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PlanRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            learner_id: row.get(0)?,
            plan_data: row.get(1)?,
            created_at: parse_timestamp(row, 2)?,
            updated_at: parse_timestamp(row, 3)?,
        })
    }

    fn into_stored(self) -> Result<StoredPlan> {
        let plan = serde_json::from_str(&self.plan_data)?;
        Ok(StoredPlan {
            learner_id: self.learner_id,
            plan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn parse_timestamp(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Saves the plan for a learner, replacing any existing plan.
    ///
    /// The creation time of an existing row is kept; only the document and
    /// the update time change.
    pub fn save_plan(&mut self, learner_id: &str, plan: &Plan) -> Result<SaveOutcome> {
        let plan_data = serde_json::to_string(plan)?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let replaced: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![learner_id], |row| row.get(0))
            .db_context("Failed to check plan existence")?;

        tx.execute(
            UPSERT_PLAN_SQL,
            params![learner_id, plan_data, Timestamp::now().to_string()],
        )
        .db_context("Failed to save plan")?;

        let row = tx
            .query_row(SELECT_PLAN_SQL, params![learner_id], PlanRow::from_row)
            .db_context("Failed to read back saved plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!(
            "{} plan for learner '{learner_id}'",
            if replaced { "Replaced" } else { "Saved" }
        );
        Ok(SaveOutcome {
            stored: StoredPlan {
                learner_id: row.learner_id,
                plan: plan.clone(),
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            replaced,
        })
    }

    /// Reads, transforms and writes back a learner's plan in one immediate
    /// transaction. Returns `None` when the learner has no plan; an error
    /// from `update` rolls the transaction back.
    pub fn update_plan<F>(&mut self, learner_id: &str, update: F) -> Result<Option<PlanUpdate>>
    where
        F: FnOnce(&Plan) -> Result<Plan>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let row = tx
            .query_row(SELECT_PLAN_SQL, params![learner_id], PlanRow::from_row)
            .optional()
            .db_context("Failed to query plan")?;
        let Some(row) = row else {
            return Ok(None);
        };

        let previous = row.into_stored()?.plan;
        let plan = update(&previous)?;
        let plan_data = serde_json::to_string(&plan)?;

        tx.execute(
            UPSERT_PLAN_SQL,
            params![learner_id, plan_data, Timestamp::now().to_string()],
        )
        .db_context("Failed to update plan")?;

        let row = tx
            .query_row(SELECT_PLAN_SQL, params![learner_id], PlanRow::from_row)
            .db_context("Failed to read back updated plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Updated plan for learner '{learner_id}'");
        Ok(Some(PlanUpdate {
            previous,
            stored: StoredPlan {
                learner_id: row.learner_id,
                plan,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }))
    }

    /// Retrieves the stored plan for a learner.
    pub fn get_plan(&self, learner_id: &str) -> Result<Option<StoredPlan>> {
        let row = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![learner_id], PlanRow::from_row)
            .optional()
            .db_context("Failed to query plan")?;

        row.map(PlanRow::into_stored).transpose()
    }

    /// Loads just the plan document for a learner.
    pub fn load_plan(&self, learner_id: &str) -> Result<Option<Plan>> {
        Ok(self.get_plan(learner_id)?.map(|stored| stored.plan))
    }

    /// Checks whether a learner has a stored plan.
    pub fn plan_exists(&self, learner_id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![learner_id], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }

    /// Deletes the plan for a learner. Returns false when none was stored.
    pub fn delete_plan(&mut self, learner_id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![learner_id])
            .db_context("Failed to delete plan")?;

        if deleted > 0 {
            info!("Deleted plan for learner '{learner_id}'");
        }
        Ok(deleted > 0)
    }

    /// Lists every stored plan, most recently updated first.
    pub fn list_plans(&self) -> Result<Vec<StoredPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], PlanRow::from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan rows")?;

        rows.into_iter().map(PlanRow::into_stored).collect()
    }

    /// Summaries of every stored plan, most recently updated first.
    pub fn list_plan_summaries(&self) -> Result<Vec<PlanSummary>> {
        Ok(self
            .list_plans()?
            .iter()
            .map(StoredPlan::summary)
            .collect())
    }
}
