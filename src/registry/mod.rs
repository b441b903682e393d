//! Registry collaborators.
//!
//! The registry owns the installed package set. gitdeps never inspects that
//! set; it only issues batched install/uninstall requests against it.

pub mod command;

use anyhow::Result;

pub use command::CommandRegistry;

/// The external package installer.
pub trait Registry {
    /// Issue one batched request: install every entry of `to_add` (source
    /// locations) and uninstall every entry of `to_remove` (package names).
    ///
    /// Adding an already-installed source is expected to be a no-op.
    fn apply_changes(&mut self, to_add: &[String], to_remove: &[String]) -> Result<()>;
}

impl<R: Registry + ?Sized> Registry for Box<R> {
    fn apply_changes(&mut self, to_add: &[String], to_remove: &[String]) -> Result<()> {
        (**self).apply_changes(to_add, to_remove)
    }
}

/// Registry that only logs what it would do.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRegistry;

impl Registry for LoggingRegistry {
    fn apply_changes(&mut self, to_add: &[String], to_remove: &[String]) -> Result<()> {
        for source in to_add {
            tracing::info!("would add package from {}", source);
        }
        for name in to_remove {
            tracing::info!("would remove package {}", name);
        }
        Ok(())
    }
}
