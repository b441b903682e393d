//! Well-known names shared by every component.
//!
//! The marker is used both as a per-unit define constraint and as a global
//! scripting define. Both use sites must read it from here.

/// Symbol signalling that the declared git dependencies are present.
pub const DEPENDENCIES_LOADED: &str = "GIT_DEPENDENCIES_LOADED";

/// Identity (asset name) of the unit descriptor that defines gitdeps itself.
///
/// This unit is never gated, otherwise the resolver could not compile until
/// the dependencies it installs are present.
pub const RESOLVER_ASSEMBLY_NAME: &str = "GitDependencyResolver";

/// File name of the package manifest, relative to the system root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Extension of compilation-unit descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "asmdef";

/// Key holding the define constraints inside a descriptor.
pub const DEFINE_CONSTRAINTS_KEY: &str = "defineConstraints";
