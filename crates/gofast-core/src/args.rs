//! Flags accepted by the `create` command

use crate::flags::{AdvancedFeature, DbDriver, Framework, GitOption};
use clap::Args;

/// CLI arguments for the create command.
///
/// Anything left unset here is asked for interactively.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of project to create
    #[arg(short, long)]
    pub name: Option<String>,

    /// Framework to use
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Database driver to use
    #[arg(short, long, value_enum)]
    pub driver: Option<DbDriver>,

    /// Get prompts for advanced features
    #[arg(short, long)]
    pub advanced: bool,

    /// Advanced feature to use (repeatable)
    #[arg(long = "feature", value_enum)]
    pub features: Vec<AdvancedFeature>,

    /// Git option to use
    #[arg(short, long, value_enum)]
    pub git: Option<GitOption>,
}
