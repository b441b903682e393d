//! `gitdeps define` command

use anyhow::Result;

use super::{open_context, open_symbols};
use crate::GlobalOptions;
use gitdeps::ops::{publish_marker_for_active_target, PublishOutcome};
use gitdeps::util::Status;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let ctx = open_context(global_opts)?;
    let mut symbols = open_symbols(&ctx);

    match publish_marker_for_active_target(&mut symbols)? {
        PublishOutcome::Added { group, symbols } => {
            shell.status(Status::Added, format!("{}: {}", group, symbols));
        }
        PublishOutcome::AlreadyPresent { group, .. } => {
            shell.status(Status::Skipped, format!("{} (already defined)", group));
        }
    }

    Ok(())
}
