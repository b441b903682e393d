//! Publish the marker as a scripting define for the active target.
//!
//! Only the active target's group is touched. The marker is appended if
//! missing and never removed.

use anyhow::Result;

use crate::core::build_target::TargetGroup;
use crate::core::marker::DEPENDENCIES_LOADED;
use crate::core::symbols::{append_symbol, SymbolStore};

/// What publishing did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The marker was appended; `symbols` is the new set.
    Added { group: TargetGroup, symbols: String },

    /// The marker was already defined; nothing was written.
    AlreadyPresent { group: TargetGroup, symbols: String },
}

/// Ensure the marker is defined for the active build target's group.
pub fn publish_marker_for_active_target<S>(store: &mut S) -> Result<PublishOutcome>
where
    S: SymbolStore + ?Sized,
{
    let target = store.active_target();
    let group = target.group();
    let current = store.get_symbols(group)?;

    match append_symbol(&current, DEPENDENCIES_LOADED) {
        Some(symbols) => {
            store.set_symbols(group, &symbols)?;
            tracing::info!(
                "defined {} for {} ({})",
                DEPENDENCIES_LOADED,
                group,
                target
            );
            Ok(PublishOutcome::Added { group, symbols })
        }
        None => {
            tracing::debug!("{} already defined for {}", DEPENDENCIES_LOADED, group);
            Ok(PublishOutcome::AlreadyPresent {
                group,
                symbols: current,
            })
        }
    }
}
