//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use gitdeps::util::ColorChoice;

/// gitdeps - bootstraps git dependencies and gates compilation on them
#[derive(Parser)]
#[command(name = "gitdeps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Host project directory (defaults to the current directory)
    #[arg(long, global = true, env = "GITDEPS_PROJECT")]
    pub project: Option<PathBuf>,

    /// Log registry requests instead of running the installer
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the start-up steps: gate units, add dependencies, define the marker
    Startup,

    /// Notify that packages were removed from the project
    Removed(RemovedArgs),

    /// Request installation of every declared git dependency now
    Add,

    /// Request removal of every declared git dependency now
    Remove,

    /// Reload the package manifest and print it
    Reload,

    /// Add the marker to every unit's define constraints
    Inject,

    /// Define the marker for the active build target
    Define,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RemovedArgs {
    /// Names of the removed packages
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: CompletionShell,
}
