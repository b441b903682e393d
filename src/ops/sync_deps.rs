//! Synchronize declared git dependencies with the registry.
//!
//! Adding sends every declared source location, without diffing against what
//! is installed; the registry treats already-installed sources as no-ops.
//! Removing sends every declared dependency name. Each direction is a single
//! batched request and is never retried.

use thiserror::Error;

use crate::core::manifest::ManifestError;
use crate::registry::Registry;
use crate::util::context::ResolverContext;

/// Errors raised while synchronizing.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("package manifest is invalid")]
    ManifestInvalid(#[from] ManifestError),

    #[error("registry request failed")]
    Registry(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Request installation of every declared git dependency.
///
/// Returns the source locations sent, in manifest order. No request is
/// issued when the manifest cannot be loaded. An empty `gitDependencies`
/// deliberately skips the registry call instead of sending an empty batch.
pub fn sync_add<R>(ctx: &mut ResolverContext, registry: &mut R) -> Result<Vec<String>, SyncError>
where
    R: Registry + ?Sized,
{
    let to_add = ctx.manifest()?.source_locations();

    if to_add.is_empty() {
        tracing::debug!("no git dependencies declared; nothing to add");
        return Ok(to_add);
    }

    tracing::info!("requesting {} git dependencies", to_add.len());
    registry
        .apply_changes(&to_add, &[])
        .map_err(|e| SyncError::Registry(e.into()))?;

    Ok(to_add)
}

/// Request removal of every declared git dependency.
///
/// Returns the package names sent, in manifest order. As with [`sync_add`],
/// nothing is sent when the manifest cannot be loaded or declares no git
/// dependencies.
pub fn sync_remove<R>(
    ctx: &mut ResolverContext,
    registry: &mut R,
) -> Result<Vec<String>, SyncError>
where
    R: Registry + ?Sized,
{
    let to_remove = ctx.manifest()?.dependency_names();

    if to_remove.is_empty() {
        tracing::debug!("no git dependencies declared; nothing to remove");
        return Ok(to_remove);
    }

    tracing::info!("removing {} git dependencies", to_remove.len());
    registry
        .apply_changes(&[], &to_remove)
        .map_err(|e| SyncError::Registry(e.into()))?;

    Ok(to_remove)
}
