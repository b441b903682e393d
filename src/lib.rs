//! gitdeps - bootstraps git-hosted dependencies declared in a package manifest
//!
//! This crate reconciles three loosely coupled stores: the package manifest
//! (`package.json`), the external package registry, and the per-unit build
//! configuration. It gates dependent compilation units behind a marker symbol
//! until the declared dependencies have been requested.

pub mod core;
pub mod ops;
pub mod registry;
pub mod util;

/// Test utilities and fakes for gitdeps unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides recording implementations of the registry and
/// symbol store collaborators, plus on-disk project fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    asset_index::{AssetIndex, FsAssetIndex},
    build_target::{BuildTarget, TargetGroup},
    descriptor::UnitDescriptor,
    manifest::{GitDependency, Manifest},
    marker::DEPENDENCIES_LOADED,
    symbols::{FileSymbolStore, SymbolStore},
};

pub use ops::lifecycle::{Lifecycle, RemovedPackage};
pub use registry::Registry;
pub use util::context::ResolverContext;
