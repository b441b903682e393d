//! High-level operations.
//!
//! This module contains the reconciliation steps and the lifecycle that
//! drives them.

pub mod inject_constraints;
pub mod lifecycle;
pub mod publish_symbols;
pub mod sync_deps;

pub use inject_constraints::{inject_marker_into_all_units, InjectReport};
pub use lifecycle::{
    EventDispatcher, Lifecycle, PackageEventListener, RemovalOutcome, RemovedPackage,
    StartupReport,
};
pub use publish_symbols::{publish_marker_for_active_target, PublishOutcome};
pub use sync_deps::{sync_add, sync_remove, SyncError};
