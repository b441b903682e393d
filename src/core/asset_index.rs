//! Asset lookup.
//!
//! The host owns the index of project assets. gitdeps only needs to find unit
//! descriptors by identity and by folder, and to tell the index to pick up
//! files it has rewritten.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::marker::DESCRIPTOR_EXTENSION;
use crate::util::fs;

/// Lookup of compilation-unit descriptors in the host project.
pub trait AssetIndex {
    /// Descriptors anywhere in the project whose identity equals `name`.
    fn find_descriptors_named(&mut self, name: &str) -> Vec<PathBuf>;

    /// Descriptors located under `folder`, at any depth.
    fn find_descriptors_in(&mut self, folder: &Path) -> Vec<PathBuf>;

    /// Flush pending changes so later lookups see rewritten files.
    fn refresh(&mut self) -> Result<()>;
}

/// Identity of a descriptor: its asset name, i.e. the file stem.
pub fn descriptor_identity(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Asset index backed by a directory walk of the project tree.
///
/// The walk runs lazily on first lookup and is cached until [`refresh`].
///
/// [`refresh`]: AssetIndex::refresh
#[derive(Debug, Clone)]
pub struct FsAssetIndex {
    project_root: PathBuf,
    descriptors: Option<Vec<PathBuf>>,
}

impl FsAssetIndex {
    /// Create an index rooted at the project directory.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        FsAssetIndex {
            project_root: project_root.into(),
            descriptors: None,
        }
    }

    /// Get the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn descriptors(&mut self) -> &[PathBuf] {
        let root = &self.project_root;
        self.descriptors
            .get_or_insert_with(|| fs::find_files_with_extension(root, DESCRIPTOR_EXTENSION))
            .as_slice()
    }
}

impl AssetIndex for FsAssetIndex {
    fn find_descriptors_named(&mut self, name: &str) -> Vec<PathBuf> {
        self.descriptors()
            .iter()
            .filter(|p| descriptor_identity(p) == Some(name))
            .cloned()
            .collect()
    }

    fn find_descriptors_in(&mut self, folder: &Path) -> Vec<PathBuf> {
        self.descriptors()
            .iter()
            .filter(|p| p.starts_with(folder))
            .cloned()
            .collect()
    }

    fn refresh(&mut self) -> Result<()> {
        tracing::debug!("refreshing asset index at {}", self.project_root.display());
        self.descriptors = None;
        Ok(())
    }
}
