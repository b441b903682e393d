//! Gate compilation units behind the dependencies-loaded marker.
//!
//! Every unit descriptor under the system root, except the resolver's own,
//! gets [`DEPENDENCIES_LOADED`] in its define constraints. A descriptor is
//! only rewritten when the marker was missing, so a second pass writes
//! nothing. There is no removal path.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::asset_index::descriptor_identity;
use crate::core::descriptor::UnitDescriptor;
use crate::core::marker::{DEPENDENCIES_LOADED, RESOLVER_ASSEMBLY_NAME};
use crate::util::context::ResolverContext;
use crate::util::fs;

/// Outcome of one injection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectReport {
    /// Units the marker was added to (and which were rewritten)
    pub changed: Vec<String>,

    /// Units that already carried the marker
    pub unchanged: Vec<String>,

    /// Descriptors that could not be read, parsed, or written
    pub skipped: Vec<PathBuf>,
}

impl InjectReport {
    /// Number of descriptor writes performed.
    pub fn writes(&self) -> usize {
        self.changed.len()
    }
}

/// Add the marker to every unit under the system root.
///
/// Fails only when the system root cannot be located. Per-unit failures are
/// logged and reported in [`InjectReport::skipped`].
pub fn inject_marker_into_all_units(ctx: &mut ResolverContext) -> Result<InjectReport> {
    let root = ctx.system_root()?;
    let project_root = ctx.project_root().to_path_buf();
    let descriptors = ctx.index_mut().find_descriptors_in(&root);

    let mut report = InjectReport::default();

    for path in descriptors {
        if descriptor_identity(&path) == Some(RESOLVER_ASSEMBLY_NAME) {
            continue;
        }

        let mut unit = match UnitDescriptor::load(&path) {
            Ok(unit) => unit,
            Err(e) => {
                tracing::warn!("{}", e);
                report.skipped.push(path);
                continue;
            }
        };

        match unit.ensure_constraint(DEPENDENCIES_LOADED) {
            Ok(true) => {
                tracing::info!(
                    "add constraint {} to unit {} ({})",
                    DEPENDENCIES_LOADED,
                    unit.identity(),
                    fs::relative_path(&project_root, &path).display()
                );
                if let Err(e) = unit.save() {
                    tracing::warn!("{:#}", e);
                    report.skipped.push(path);
                    continue;
                }
                report.changed.push(unit.identity().to_string());
            }
            Ok(false) => {
                tracing::debug!("unit {} already gated", unit.identity());
                report.unchanged.push(unit.identity().to_string());
            }
            Err(e) => {
                tracing::warn!("{}", e);
                report.skipped.push(path);
            }
        }
    }

    ctx.index_mut().refresh()?;

    Ok(report)
}
