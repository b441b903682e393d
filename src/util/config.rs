//! Configuration file support for gitdeps.
//!
//! gitdeps supports two configuration file locations:
//! - Global: `~/.gitdeps/config.toml` - User-wide defaults
//! - Project: `.gitdeps/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::build_target::BuildTarget;

/// Default location of the defines file, relative to the project root.
pub const DEFAULT_SYMBOLS_FILE: &str = "ProjectSettings/ScriptingDefines.toml";

/// gitdeps configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Registry settings
    pub registry: RegistryConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Active build target (defaults to the host's standalone target)
    pub active_target: Option<BuildTarget>,

    /// Defines file, relative to the project root
    pub symbols_file: Option<PathBuf>,
}

/// Registry (installer) configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RegistryConfig {
    /// Installer program. When unset, requests are only logged.
    pub command: Option<String>,

    /// Arguments placed before the source locations when adding
    pub add_args: Option<Vec<String>>,

    /// Arguments placed before the package names when removing
    pub remove_args: Option<Vec<String>>,
}

impl RegistryConfig {
    /// Arguments for an add request, `["add"]` unless configured.
    pub fn add_args(&self) -> Vec<String> {
        self.add_args
            .clone()
            .unwrap_or_else(|| vec!["add".to_string()])
    }

    /// Arguments for a remove request, `["remove"]` unless configured.
    pub fn remove_args(&self) -> Vec<String> {
        self.remove_args
            .clone()
            .unwrap_or_else(|| vec!["remove".to_string()])
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.active_target.is_some() {
            self.build.active_target = other.build.active_target;
        }
        if other.build.symbols_file.is_some() {
            self.build.symbols_file = other.build.symbols_file;
        }
        if other.registry.command.is_some() {
            self.registry.command = other.registry.command;
        }
        if other.registry.add_args.is_some() {
            self.registry.add_args = other.registry.add_args;
        }
        if other.registry.remove_args.is_some() {
            self.registry.remove_args = other.registry.remove_args;
        }
    }

    /// The active build target, falling back to the host target.
    pub fn active_target(&self) -> BuildTarget {
        self.build.active_target.unwrap_or_default()
    }

    /// Absolute path of the defines file for a project.
    pub fn symbols_path(&self, project_root: &Path) -> PathBuf {
        let relative = self
            .build
            .symbols_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYMBOLS_FILE));
        project_root.join(relative)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.gitdeps/config.toml)
/// 2. Global config (~/.gitdeps/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global gitdeps config directory (~/.gitdeps).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".gitdeps"))
}

/// Get the global config path (~/.gitdeps/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.gitdeps/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".gitdeps").join("config.toml")
}
