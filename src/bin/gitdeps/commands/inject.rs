//! `gitdeps inject` command

use anyhow::Result;

use super::open_context;
use crate::GlobalOptions;
use gitdeps::ops::inject_marker_into_all_units;
use gitdeps::util::Status;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut ctx = open_context(global_opts)?;

    let report = inject_marker_into_all_units(&mut ctx)?;

    for unit in &report.changed {
        shell.status(Status::Updated, format!("unit {}", unit));
    }
    for path in &report.skipped {
        shell.status(Status::Skipped, path.display());
    }
    if report.changed.is_empty() {
        shell.note(format!("{} unit(s) already gated", report.unchanged.len()));
    }

    Ok(())
}
