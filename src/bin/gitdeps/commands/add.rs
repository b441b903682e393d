//! `gitdeps add` command

use anyhow::Result;

use super::{open_context, open_registry};
use crate::GlobalOptions;
use gitdeps::ops::sync_add;
use gitdeps::util::Status;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut ctx = open_context(global_opts)?;
    let mut registry = open_registry(&ctx, global_opts)?;

    let requested = sync_add(&mut ctx, &mut registry)?;

    if requested.is_empty() {
        shell.note("no git dependencies declared");
    }
    for source in &requested {
        shell.status(Status::Requesting, source);
    }

    Ok(())
}
