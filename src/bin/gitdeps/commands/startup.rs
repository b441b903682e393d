//! `gitdeps startup` command

use anyhow::{bail, Result};

use super::open_lifecycle;
use crate::GlobalOptions;
use gitdeps::ops::{PackageEventListener, PublishOutcome};
use gitdeps::util::Status;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut lifecycle = open_lifecycle(global_opts)?;

    let Some(report) = lifecycle.on_startup() else {
        return Ok(());
    };

    if let Some(injected) = &report.injected {
        for unit in &injected.changed {
            shell.status(Status::Updated, format!("unit {}", unit));
        }
        for path in &injected.skipped {
            shell.status(Status::Skipped, path.display());
        }
    }

    if let Some(requested) = &report.requested {
        for source in requested {
            shell.status(Status::Requesting, source);
        }
    }

    if let Some(PublishOutcome::Added { group, .. }) = &report.published {
        shell.status(Status::Added, format!("build define for {}", group));
    }

    if !report.is_ok() {
        for error in &report.errors {
            shell.error(error);
        }
        bail!("start-up finished with {} error(s)", report.errors.len());
    }

    shell.status(Status::Finished, "start-up");
    Ok(())
}
