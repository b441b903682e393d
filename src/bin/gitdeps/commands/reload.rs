//! `gitdeps reload` command

use anyhow::Result;

use super::open_context;
use crate::GlobalOptions;

pub fn execute(global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let mut ctx = open_context(global_opts)?;

    let manifest = ctx.reload()?;

    shell.note(format!(
        "{} ({} git dependencies) from {}",
        manifest.name(),
        manifest.git_dependencies().len(),
        manifest.path().display()
    ));
    for dep in manifest.git_dependencies() {
        println!("{} = {}", dep.name, dep.source);
    }

    Ok(())
}
