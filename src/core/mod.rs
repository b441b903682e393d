//! Core data structures for gitdeps.
//!
//! This module contains the foundational types used throughout gitdeps:
//! - The package manifest and its git dependencies
//! - Compilation-unit descriptors and their define constraints
//! - Build targets, target groups, and the symbol store
//! - The asset index used to locate files by name

pub mod asset_index;
pub mod build_target;
pub mod descriptor;
pub mod manifest;
pub mod marker;
pub mod symbols;

pub use asset_index::{AssetIndex, FsAssetIndex};
pub use build_target::{BuildTarget, TargetGroup};
pub use descriptor::UnitDescriptor;
pub use manifest::{GitDependency, Manifest, ManifestError};
pub use marker::{DEPENDENCIES_LOADED, RESOLVER_ASSEMBLY_NAME};
pub use symbols::{FileSymbolStore, SymbolStore};
