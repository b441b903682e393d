//! `gitdeps remove` command

use anyhow::Result;

use super::{open_context, open_registry};
use crate::GlobalOptions;
use gitdeps::ops::sync_remove;
use gitdeps::util::Status;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut ctx = open_context(global_opts)?;
    let mut registry = open_registry(&ctx, global_opts)?;

    let removed = sync_remove(&mut ctx, &mut registry)?;

    if removed.is_empty() {
        shell.note("no git dependencies declared");
    }
    for name in &removed {
        shell.status(Status::Removed, name);
    }

    Ok(())
}
