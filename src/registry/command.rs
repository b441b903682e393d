//! Registry backed by an external installer program.
//!
//! One batched request becomes at most two invocations:
//! `<program> <add-args...> <sources...>` then
//! `<program> <remove-args...> <names...>`. Empty lists are skipped.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::registry::Registry;
use crate::util::config::RegistryConfig;

/// Runs a configured installer command for each batch.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    program: PathBuf,
    add_args: Vec<String>,
    remove_args: Vec<String>,
    cwd: PathBuf,
}

impl CommandRegistry {
    /// Create a registry running `program` in `cwd` with the configured
    /// argument prefixes.
    pub fn new(
        program: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
        config: &RegistryConfig,
    ) -> Self {
        CommandRegistry {
            program: program.into(),
            add_args: config.add_args(),
            remove_args: config.remove_args(),
            cwd: cwd.into(),
        }
    }

    /// Build from configuration, resolving the program on `PATH`.
    ///
    /// Returns `Ok(None)` when no command is configured.
    pub fn from_config(config: &RegistryConfig, cwd: &Path) -> Result<Option<Self>> {
        let Some(command) = config.command.as_deref() else {
            return Ok(None);
        };

        let program = if Path::new(command).components().count() > 1 {
            PathBuf::from(command)
        } else {
            which::which(command)
                .with_context(|| format!("registry command `{}` not found in PATH", command))?
        };

        Ok(Some(Self::new(program, cwd, config)))
    }

    /// Command line for one batch, as shown in logs and errors.
    fn command_line(&self, prefix: &[String], items: &[String]) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(prefix.iter().chain(items).cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the installer once for a batch. Empty batches spawn nothing.
    fn run(&self, prefix: &[String], items: &[String]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let line = self.command_line(prefix, items);
        tracing::debug!("running `{}`", line);

        let output = Command::new(&self.program)
            .args(prefix)
            .args(items)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to spawn `{}`", self.program.display()))?;

        if !output.status.success() {
            bail!(
                "`{}` exited with {}\n{}",
                line,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }
        Ok(())
    }
}

impl Registry for CommandRegistry {
    fn apply_changes(&mut self, to_add: &[String], to_remove: &[String]) -> Result<()> {
        self.run(&self.add_args, to_add)
            .context("registry failed to add packages")?;
        self.run(&self.remove_args, to_remove)
            .context("registry failed to remove packages")?;
        Ok(())
    }
}
