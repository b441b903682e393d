//! Compilation-unit descriptors.
//!
//! A descriptor is a JSON document describing one compilation unit. gitdeps
//! reads and writes a single key, `defineConstraints`: the list of symbols
//! that must be defined for the unit to compile. Every other key, and the
//! order of keys, is carried through a rewrite untouched.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::asset_index::descriptor_identity;
use crate::core::marker::DEFINE_CONSTRAINTS_KEY;
use crate::util::fs;

/// Errors raised while reading a descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read unit descriptor {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse unit descriptor {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unit descriptor {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("unit descriptor {}: `defineConstraints` must be a list of strings", path.display())]
    InvalidConstraints { path: PathBuf },
}

/// A loaded compilation-unit descriptor.
#[derive(Debug, Clone)]
pub struct UnitDescriptor {
    path: PathBuf,
    identity: String,
    document: Map<String, Value>,
}

impl UnitDescriptor {
    /// Load a descriptor from disk.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = fs::read_to_string_raw(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse descriptor text read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self, DescriptorError> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| DescriptorError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(document) = value else {
            return Err(DescriptorError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let identity = descriptor_identity(path).unwrap_or_default().to_string();

        Ok(UnitDescriptor {
            path: path.to_path_buf(),
            identity,
            document,
        })
    }

    /// The unit's identity (asset name).
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current define constraints. An absent key is an empty list.
    pub fn define_constraints(&self) -> Result<Vec<String>, DescriptorError> {
        match self.document.get(DEFINE_CONSTRAINTS_KEY) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(self.invalid_constraints()),
                })
                .collect(),
            Some(_) => Err(self.invalid_constraints()),
        }
    }

    /// Append `symbol` to the define constraints unless it is already there.
    ///
    /// Creates the list if the key is absent. Returns `true` when the
    /// document changed and needs saving.
    pub fn ensure_constraint(&mut self, symbol: &str) -> Result<bool, DescriptorError> {
        if self.define_constraints()?.iter().any(|c| c == symbol) {
            return Ok(false);
        }

        let invalid = self.invalid_constraints();
        let entry = self
            .document
            .entry(DEFINE_CONSTRAINTS_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));

        match entry {
            Value::Array(items) => {
                items.push(Value::String(symbol.to_string()));
                Ok(true)
            }
            _ => Err(invalid),
        }
    }

    /// Serialize the document as two-space indented JSON.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.document)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the document back to its file.
    pub fn save(&self) -> Result<()> {
        fs::write_string_atomic(&self.path, &self.to_json_string()?)
    }

    fn invalid_constraints(&self) -> DescriptorError {
        DescriptorError::InvalidConstraints {
            path: self.path.clone(),
        }
    }
}
