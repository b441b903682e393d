//! `gitdeps removed` command

use anyhow::Result;

use super::open_lifecycle;
use crate::cli::RemovedArgs;
use crate::GlobalOptions;
use gitdeps::ops::{PackageEventListener, RemovedPackage};
use gitdeps::util::Status;

pub fn execute(args: RemovedArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut lifecycle = open_lifecycle(global_opts)?;

    let removed: Vec<RemovedPackage> = args.names.into_iter().map(RemovedPackage::new).collect();

    match lifecycle.on_packages_removed(&removed) {
        Some(outcome) => {
            let names = outcome?;
            if names.is_empty() {
                shell.note("no git dependencies declared");
            }
            for name in &names {
                shell.status(Status::Removed, name);
            }
        }
        None => {
            shell.status(Status::Skipped, "no removed package declares git dependencies here");
        }
    }

    Ok(())
}
