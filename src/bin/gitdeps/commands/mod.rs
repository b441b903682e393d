//! Command implementations

pub mod add;
pub mod completions;
pub mod define;
pub mod inject;
pub mod reload;
pub mod remove;
pub mod removed;
pub mod startup;

use anyhow::Result;

use crate::GlobalOptions;
use gitdeps::ops::Lifecycle;
use gitdeps::registry::{CommandRegistry, LoggingRegistry, Registry};
use gitdeps::{FileSymbolStore, ResolverContext};

/// Lifecycle wired to the configured collaborators.
pub type CliLifecycle = Lifecycle<Box<dyn Registry>, FileSymbolStore>;

/// Open the resolver context for the selected project.
pub fn open_context(global_opts: &GlobalOptions) -> Result<ResolverContext> {
    ResolverContext::discover(&global_opts.project)
}

/// Pick the registry: logging for `--dry-run` or when no installer is set.
pub fn open_registry(ctx: &ResolverContext, global_opts: &GlobalOptions) -> Result<Box<dyn Registry>> {
    if global_opts.dry_run {
        return Ok(Box::new(LoggingRegistry));
    }

    match CommandRegistry::from_config(&ctx.config().registry, ctx.project_root())? {
        Some(registry) => Ok(Box::new(registry)),
        None => {
            global_opts
                .shell
                .warn("no registry command configured; requests are only logged");
            Ok(Box::new(LoggingRegistry))
        }
    }
}

/// Open the symbol store configured for the project.
pub fn open_symbols(ctx: &ResolverContext) -> FileSymbolStore {
    let config = ctx.config();
    FileSymbolStore::new(
        config.symbols_path(ctx.project_root()),
        config.active_target(),
    )
}

/// Build the full lifecycle for commands that drive host events.
pub fn open_lifecycle(global_opts: &GlobalOptions) -> Result<CliLifecycle> {
    let ctx = open_context(global_opts)?;
    let registry = open_registry(&ctx, global_opts)?;
    let symbols = open_symbols(&ctx);
    Ok(Lifecycle::new(ctx, registry, symbols))
}
