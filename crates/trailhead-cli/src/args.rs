//! Command-line argument definitions using clap
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls, so the core stays free of CLI
//! framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Mentor
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use trailhead_core::{models::Preferences, params::*};

/// Personalized learning roadmaps from the command line
///
/// Trailhead generates a four-phase curriculum for a learner from their
/// specialization, skill focus and target role, stores it under the
/// learner's id and tracks progress as topics are completed.
#[derive(Parser)]
#[command(version, about, name = "th")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trailhead/trailhead.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON curriculum catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Generate basic plans without objectives, criteria and feature flags
    #[arg(long, global = true)]
    pub basic: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate (or regenerate) a learner's plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show a learner's plan or one of its phases
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Mark topics completed
    #[command(alias = "c")]
    Complete(CompleteArgs),
    /// Replace the set of completed topics
    #[command(alias = "p")]
    Progress(ProgressArgs),
    /// List stored plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a learner's plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Show the reference roadmap for a specialization
    #[command(alias = "r")]
    Reference(ReferenceArgs),
    /// List specializations and skill levels known to the catalog
    Catalog,
    /// Print the JSON schema of plan and preference documents
    Schema,
}

/// Generate a plan from questionnaire answers
///
/// Unknown specialization or skill-focus values fall back to Web
/// Development and Beginner rather than failing.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[arg(help = "Identity to store the plan under")]
    pub learner_id: String,
    #[arg(
        short,
        long,
        help = "Specialization alias, e.g. web_development or machine_learning"
    )]
    pub specialization: Option<String>,
    #[arg(short = 'f', long, help = "Skill focus: soft_skills or hard_skills")]
    pub skill_focus: Option<String>,
    #[arg(long, help = "Target company (default: Tech Company)")]
    pub company: Option<String>,
    #[arg(long, help = "Target position (default: Developer)")]
    pub position: Option<String>,
    #[arg(
        short,
        long,
        help = "Plan length in weeks; 0 or absent uses the skill level default"
    )]
    pub weeks: Option<u32>,
    #[arg(long, help = "Free-form learning goals")]
    pub goals: Option<String>,
    #[arg(long, help = "Free-form focus area")]
    pub focus_area: Option<String>,
    #[arg(long, help = "Seed for reproducible resources and milestones")]
    pub seed: Option<u64>,
    #[arg(long, help = "Print the stored plan document as JSON")]
    pub json: bool,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            learner_id: val.learner_id,
            preferences: Preferences {
                specialization: val.specialization,
                skill_focus: val.skill_focus,
                target_company: val.company,
                position: val.position,
                learning_duration: val.weeks,
                learning_goals: val.goals,
                focus_area: val.focus_area,
            },
            seed: val.seed,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Learner whose plan to show")]
    pub learner_id: String,
    #[arg(long, help = "Show only this phase (1-4)")]
    pub phase: Option<u32>,
    #[arg(long, help = "Print JSON instead of markdown")]
    pub json: bool,
}

/// Which part of a stored plan `show` asks for.
pub enum ShowTarget {
    Plan(LearnerId),
    Phase(ShowPhase),
}

impl From<&ShowArgs> for ShowTarget {
    fn from(val: &ShowArgs) -> Self {
        match val.phase {
            Some(phase_id) => ShowTarget::Phase(ShowPhase {
                learner_id: val.learner_id.clone(),
                phase_id,
            }),
            None => ShowTarget::Plan(LearnerId::new(val.learner_id.clone())),
        }
    }
}

/// Mark topics completed on top of the learner's existing progress
#[derive(ClapArgs)]
pub struct CompleteArgs {
    #[arg(help = "Learner whose plan to update")]
    pub learner_id: String,
    #[arg(required = true, help = "Topic ids such as 1.2")]
    pub topic_ids: Vec<String>,
}

impl From<CompleteArgs> for CompleteTopics {
    fn from(val: CompleteArgs) -> Self {
        CompleteTopics {
            learner_id: val.learner_id,
            topic_ids: val.topic_ids,
        }
    }
}

/// Replace the completed set outright
///
/// Omitting `--completed` resets the plan to no progress.
#[derive(ClapArgs)]
pub struct ProgressArgs {
    #[arg(help = "Learner whose plan to update")]
    pub learner_id: String,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Completed topic ids as comma-separated list"
    )]
    pub completed: Vec<String>,
}

impl From<ProgressArgs> for SetProgress {
    fn from(val: ProgressArgs) -> Self {
        SetProgress {
            learner_id: val.learner_id,
            completed: val.completed,
        }
    }
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "Learner whose plan to delete")]
    pub learner_id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeletePlan {
    fn from(val: DeleteArgs) -> Self {
        DeletePlan {
            learner_id: val.learner_id,
            confirmed: val.confirm,
        }
    }
}

#[derive(ClapArgs)]
pub struct ReferenceArgs {
    #[arg(help = "Specialization alias; defaults to web_development")]
    pub specialization: Option<String>,
}
