//! `package.json` manifest parsing and schema.
//!
//! Only two keys matter here: `name`, the identity of the installable package
//! that carries gitdeps, and `gitDependencies`, a mapping from dependency name
//! to git source location. Both are required. Every other key is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::util::fs;

/// Errors raised while locating or reading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no unit descriptor named `{name}` found under {}", root.display())]
    DescriptorNotFound { name: String, root: PathBuf },

    #[error("package manifest not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read package manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package manifest {} is missing required key `{key}`", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("package manifest {}: {message}", path.display())]
    InvalidValue { path: PathBuf, message: String },
}

/// A single `gitDependencies` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDependency {
    /// Package name, used when uninstalling
    pub name: String,

    /// Source location (git URL, optionally with a `#ref`), used when installing
    pub source: String,
}

/// The parsed package manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    name: String,
    git_dependencies: Vec<GitDependency>,
    path: PathBuf,
}

/// Raw document shape. Keys are optional here so that a missing key is
/// reported as [`ManifestError::MissingKey`] rather than a generic serde error.
#[derive(Deserialize)]
struct RawManifest {
    name: Option<String>,
    #[serde(rename = "gitDependencies")]
    git_dependencies: Option<Map<String, Value>>,
}

impl Manifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.is_file() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string_raw(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest text. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let name = raw.name.ok_or_else(|| ManifestError::MissingKey {
            path: path.to_path_buf(),
            key: "name",
        })?;

        let deps = raw
            .git_dependencies
            .ok_or_else(|| ManifestError::MissingKey {
                path: path.to_path_buf(),
                key: "gitDependencies",
            })?;

        let mut git_dependencies = Vec::with_capacity(deps.len());
        for (dep_name, value) in deps {
            match value {
                Value::String(source) => git_dependencies.push(GitDependency {
                    name: dep_name,
                    source,
                }),
                other => {
                    return Err(ManifestError::InvalidValue {
                        path: path.to_path_buf(),
                        message: format!(
                            "git dependency `{}` must be a string, found {}",
                            dep_name,
                            json_type_name(&other)
                        ),
                    })
                }
            }
        }

        Ok(Manifest {
            name,
            git_dependencies,
            path: path.to_path_buf(),
        })
    }

    /// The package's own name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared git dependencies, in document order.
    pub fn git_dependencies(&self) -> &[GitDependency] {
        &self.git_dependencies
    }

    /// Dependency names, in document order. These are the uninstall arguments.
    pub fn dependency_names(&self) -> Vec<String> {
        self.git_dependencies.iter().map(|d| d.name.clone()).collect()
    }

    /// Source locations, in document order. These are the install arguments.
    pub fn source_locations(&self) -> Vec<String> {
        self.git_dependencies
            .iter()
            .map(|d| d.source.clone())
            .collect()
    }

    /// Path the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
