//! gitdeps CLI - bootstraps git dependencies and gates compilation on them

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitdeps::util::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Options shared by every command.
pub struct GlobalOptions {
    pub shell: Shell,
    pub project: PathBuf,
    pub dry_run: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.quiet {
        EnvFilter::new("gitdeps=error")
    } else if cli.verbose {
        EnvFilter::new("gitdeps=debug")
    } else {
        EnvFilter::new("gitdeps=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let global_opts = GlobalOptions {
        shell: Shell::from_flags(cli.quiet, cli.color),
        project: cli.project.unwrap_or_else(|| PathBuf::from(".")),
        dry_run: cli.dry_run,
    };

    // Execute command
    match cli.command {
        Commands::Startup => commands::startup::execute(&global_opts),
        Commands::Removed(args) => commands::removed::execute(args, &global_opts),
        Commands::Add => commands::add::execute(&global_opts),
        Commands::Remove => commands::remove::execute(&global_opts),
        Commands::Reload => commands::reload::execute(&global_opts),
        Commands::Inject => commands::inject::execute(&global_opts),
        Commands::Define => commands::define::execute(&global_opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
