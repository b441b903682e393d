//! Resolver context for gitdeps operations.
//!
//! Holds the project paths, configuration, and asset index, plus the lazily
//! loaded package manifest. The manifest is cached for the lifetime of the
//! context and only re-read after [`ResolverContext::reload`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::asset_index::{AssetIndex, FsAssetIndex};
use crate::core::manifest::{Manifest, ManifestError};
use crate::core::marker::{MANIFEST_FILE_NAME, RESOLVER_ASSEMBLY_NAME};
use crate::util::config::{self, Config};

/// Context shared by every gitdeps operation.
pub struct ResolverContext {
    /// Root of the host project
    project_root: PathBuf,

    /// Merged configuration
    config: Config,

    /// Asset lookup for unit descriptors
    index: Box<dyn AssetIndex>,

    /// Folder gitdeps itself is installed in, once located
    system_root: Option<PathBuf>,

    /// Cached manifest
    manifest: Option<Manifest>,
}

impl std::fmt::Debug for ResolverContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverContext")
            .field("project_root", &self.project_root)
            .field("config", &self.config)
            .field("system_root", &self.system_root)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl ResolverContext {
    /// Create a context over a project using a filesystem asset index.
    pub fn new(project_root: impl Into<PathBuf>, config: Config) -> Self {
        let project_root = project_root.into();
        let index = Box::new(FsAssetIndex::new(project_root.clone()));
        Self::with_index(project_root, config, index)
    }

    /// Create a context with a custom asset index.
    pub fn with_index(
        project_root: impl Into<PathBuf>,
        config: Config,
        index: Box<dyn AssetIndex>,
    ) -> Self {
        ResolverContext {
            project_root: project_root.into(),
            config,
            index,
            system_root: None,
            manifest: None,
        }
    }

    /// Create a context for `project_root`, loading global and project config.
    pub fn discover(project_root: &Path) -> Result<Self> {
        let project_root = project_root
            .canonicalize()
            .with_context(|| format!("project directory not found: {}", project_root.display()))?;

        let global = config::global_config_path();
        let config = config::load_config(
            global.as_deref(),
            &config::project_config_path(&project_root),
        );

        Ok(Self::new(project_root, config))
    }

    /// Get the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the asset index.
    pub fn index_mut(&mut self) -> &mut dyn AssetIndex {
        self.index.as_mut()
    }

    /// Folder gitdeps is installed in.
    ///
    /// Found through the unit descriptor named [`RESOLVER_ASSEMBLY_NAME`]: the
    /// system root is the parent of the folder holding it, never above the
    /// project root. If several such descriptors exist the first one is used
    /// and an error is logged.
    pub fn system_root(&mut self) -> Result<PathBuf, ManifestError> {
        if let Some(root) = &self.system_root {
            return Ok(root.clone());
        }

        let matches = self.index.find_descriptors_named(RESOLVER_ASSEMBLY_NAME);
        let Some(first) = matches.first() else {
            tracing::error!(
                "there should be one unit descriptor named {}, found none",
                RESOLVER_ASSEMBLY_NAME
            );
            return Err(ManifestError::DescriptorNotFound {
                name: RESOLVER_ASSEMBLY_NAME.to_string(),
                root: self.project_root.clone(),
            });
        };

        if matches.len() > 1 {
            tracing::error!(
                "there should be only one unit descriptor named {}, found {}; using {}",
                RESOLVER_ASSEMBLY_NAME,
                matches.len(),
                first.display()
            );
        }

        let root = match first.parent().and_then(Path::parent) {
            Some(root) if root.starts_with(&self.project_root) => root.to_path_buf(),
            _ => self.project_root.clone(),
        };

        tracing::debug!("system root: {}", root.display());
        self.system_root = Some(root.clone());
        Ok(root)
    }

    /// Path of the package manifest.
    pub fn manifest_path(&mut self) -> Result<PathBuf, ManifestError> {
        Ok(self.system_root()?.join(MANIFEST_FILE_NAME))
    }

    /// The package manifest, loaded on first access.
    pub fn manifest(&mut self) -> Result<&Manifest, ManifestError> {
        let manifest = match self.manifest.take() {
            Some(manifest) => manifest,
            None => {
                let path = self.manifest_path()?;
                Manifest::load(&path)?
            }
        };
        Ok(self.manifest.insert(manifest))
    }

    /// Discard the cached manifest and system root, then load again.
    pub fn reload(&mut self) -> Result<&Manifest, ManifestError> {
        self.invalidate();
        self.manifest()
    }

    /// Discard the cached manifest and system root without reloading.
    pub fn invalidate(&mut self) {
        self.manifest = None;
        self.system_root = None;
    }
}
