//! Scripting define symbols per target group.
//!
//! A symbol set is a single `;`-joined string. The store keeps one set per
//! target group and knows which build target is active.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use toml_edit::{value, DocumentMut, Item, Table};

use crate::core::build_target::{BuildTarget, TargetGroup};
use crate::util::fs;

/// Table holding the symbol sets in the defines file.
const DEFINES_TABLE: &str = "defines";

/// Errors raised by the file-backed symbol store.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("failed to parse defines file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("`defines` in {} must be a table", path.display())]
    NotATable { path: PathBuf },

    #[error("defines for `{group}` in {} must be a string", path.display())]
    NotAString { path: PathBuf, group: TargetGroup },
}

/// Query/write access to the build's compilation symbols.
pub trait SymbolStore {
    /// The build target currently selected.
    fn active_target(&self) -> BuildTarget;

    /// The `;`-joined symbol set for `group`. Empty when none are defined.
    fn get_symbols(&self, group: TargetGroup) -> Result<String>;

    /// Replace the symbol set for `group`.
    fn set_symbols(&mut self, group: TargetGroup, symbols: &str) -> Result<()>;
}

/// Split a `;`-joined symbol set into its symbols, skipping empty entries.
pub fn split_symbols(symbols: &str) -> impl Iterator<Item = &str> {
    symbols.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Check whether `symbol` is a member of the set. Membership is exact per
/// symbol, so `FOO` is not found inside `FOO_BAR`.
pub fn contains_symbol(symbols: &str, symbol: &str) -> bool {
    split_symbols(symbols).any(|s| s == symbol)
}

/// Return the set with `symbol` appended, or `None` if already present.
pub fn append_symbol(symbols: &str, symbol: &str) -> Option<String> {
    if contains_symbol(symbols, symbol) {
        return None;
    }

    let trimmed = symbols.trim().trim_end_matches(';');
    if trimmed.is_empty() {
        Some(symbol.to_string())
    } else {
        Some(format!("{};{}", trimmed, symbol))
    }
}

/// Symbol store kept in a TOML file:
///
/// ```toml
/// [defines]
/// Standalone = "ENABLE_LOGS;GIT_DEPENDENCIES_LOADED"
/// Android = ""
/// ```
///
/// Edits go through `toml_edit`, so comments and unrelated keys survive.
#[derive(Debug, Clone)]
pub struct FileSymbolStore {
    path: PathBuf,
    active_target: BuildTarget,
}

impl FileSymbolStore {
    /// Create a store backed by `path` with `active_target` selected.
    pub fn new(path: impl Into<PathBuf>, active_target: BuildTarget) -> Self {
        FileSymbolStore {
            path: path.into(),
            active_target,
        }
    }

    /// Path of the defines file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(&self) -> Result<DocumentMut> {
        if !self.path.exists() {
            return Ok(DocumentMut::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let doc = content
            .parse::<DocumentMut>()
            .map_err(|source| SymbolError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(doc)
    }

    fn not_a_table(&self) -> SymbolError {
        SymbolError::NotATable {
            path: self.path.clone(),
        }
    }
}

impl SymbolStore for FileSymbolStore {
    fn active_target(&self) -> BuildTarget {
        self.active_target
    }

    fn get_symbols(&self, group: TargetGroup) -> Result<String> {
        let doc = self.load_document()?;

        let Some(defines) = doc.get(DEFINES_TABLE) else {
            return Ok(String::new());
        };
        let defines = defines
            .as_table_like()
            .ok_or_else(|| self.not_a_table())?;
        let Some(item) = defines.get(group.as_str()) else {
            return Ok(String::new());
        };

        let symbols = item.as_str().ok_or_else(|| SymbolError::NotAString {
            path: self.path.clone(),
            group,
        })?;
        Ok(symbols.to_string())
    }

    fn set_symbols(&mut self, group: TargetGroup, symbols: &str) -> Result<()> {
        let mut doc = self.load_document()?;

        let defines = doc
            .entry(DEFINES_TABLE)
            .or_insert(Item::Table(Table::new()))
            .as_table_like_mut()
            .ok_or_else(|| self.not_a_table())?;
        defines.insert(group.as_str(), value(symbols));

        fs::write_string(&self.path, &doc.to_string())
            .with_context(|| format!("failed to update defines for `{}`", group))
    }
}
