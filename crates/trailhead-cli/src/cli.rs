//! Command dispatch for the `th` binary.
//!
//! Each command converts its clap arguments into core parameters, calls the
//! matching handler and renders the result. Errors propagate to `main` as
//! `anyhow` errors with context.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use trailhead_core::{
    handlers::*,
    models::{Plan, Preferences},
    params::DeletePlan,
    CatalogListing, Mentor, OperationStatus,
};

use crate::{
    args::{Commands, CompleteArgs, DeleteArgs, GenerateArgs, ProgressArgs, ShowArgs, ShowTarget},
    renderer::TerminalRenderer,
};

pub struct Cli {
    mentor: Mentor,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(mentor: Mentor, renderer: TerminalRenderer) -> Self {
        Self { mentor, renderer }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Generate(args) => self.generate(args).await,
            Commands::Show(args) => self.show(&args).await,
            Commands::Complete(args) => self.complete(args).await,
            Commands::Progress(args) => self.progress(args).await,
            Commands::List => self.list_plans().await,
            Commands::Delete(args) => self.delete(args).await,
            Commands::Reference(args) => self.reference(args.specialization.as_deref()),
            Commands::Catalog => self.catalog(),
            Commands::Schema => print_schema(),
        }
    }

    async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let result = handle_generate_plan(&self.mentor, &args.into())
            .await
            .context("Failed to generate plan")?;

        if json {
            print_json(&result.plan)
        } else {
            self.renderer.render(&result.to_string())
        }
    }

    async fn show(&self, args: &ShowArgs) -> Result<()> {
        match ShowTarget::from(args) {
            ShowTarget::Plan(params) => {
                let plan = handle_show_plan(&self.mentor, &params)
                    .await
                    .context("Failed to load plan")?;
                if args.json {
                    print_json(&plan)
                } else {
                    self.renderer.render(&plan.to_string())
                }
            }
            ShowTarget::Phase(params) => {
                let phase = handle_show_phase(&self.mentor, &params)
                    .await
                    .context("Failed to load phase")?;
                if args.json {
                    print_json(&phase)
                } else {
                    self.renderer.render(&phase.to_string())
                }
            }
        }
    }

    async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let result = handle_complete_topics(&self.mentor, &args.into())
            .await
            .context("Failed to complete topics")?;
        self.renderer.render(&result.to_string())
    }

    async fn progress(&self, args: ProgressArgs) -> Result<()> {
        let result = handle_set_progress(&self.mentor, &args.into())
            .await
            .context("Failed to update progress")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = handle_list_plans(&self.mentor)
            .await
            .context("Failed to list plans")?;
        debug!("Listing {} stored plans", summaries.len());
        self.renderer.render(&summaries.to_string())
    }

    async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let params = DeletePlan::from(args);
        if !params.confirmed {
            let status = OperationStatus::failure(format!(
                "Refusing to delete the plan for '{}' without --confirm",
                params.learner_id
            ));
            self.renderer.render(&status.to_string())?;
            anyhow::bail!("Deletion not confirmed");
        }

        let result = handle_delete_plan(&self.mentor, &params)
            .await
            .context("Failed to delete plan")?;
        self.renderer
            .render(&OperationStatus::success(result.to_string().trim_end()).to_string())
    }

    fn reference(&self, alias: Option<&str>) -> Result<()> {
        let (specialization, reference) = handle_reference(self.mentor.catalog(), alias);
        let markdown = format!("# {specialization} Reference\n\n{reference}");
        self.renderer.render(&markdown)
    }

    fn catalog(&self) -> Result<()> {
        self.renderer
            .render(&CatalogListing(self.mentor.catalog()).to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_schema() -> Result<()> {
    let schemas = serde_json::json!({
        "plan": schemars::schema_for!(Plan),
        "preferences": schemars::schema_for!(Preferences),
    });
    print_json(&schemas)
}
