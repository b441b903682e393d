//! Test fixtures for common test scenarios.
//!
//! A fixture describes a host project on disk: the gitdeps package folder
//! with its manifest and resolver descriptor, plus any number of other unit
//! descriptors.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::marker::RESOLVER_ASSEMBLY_NAME;

/// Package folder, relative to the project root.
pub const PACKAGE_DIR: &str = "Packages/com.x.pkg";

/// The manifest used by most tests.
pub const STANDARD_MANIFEST: &str = r#"{
  "name": "com.x.pkg",
  "version": "1.0.0",
  "gitDependencies": {
    "libA": "https://host/a.git",
    "libB": "https://host/b.git"
  }
}
"#;

/// Fixture for a host project.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// package.json content
    pub manifest: String,
    /// Unit descriptors: (folder relative to project root, identity, content)
    pub units: Vec<(PathBuf, String, String)>,
}

impl ProjectFixture {
    /// A project with only the resolver's own descriptor.
    pub fn new(manifest: impl Into<String>) -> Self {
        ProjectFixture {
            manifest: manifest.into(),
            units: vec![(
                Path::new(PACKAGE_DIR).join("Editor"),
                RESOLVER_ASSEMBLY_NAME.to_string(),
                format!(r#"{{"name": "{}"}}"#, RESOLVER_ASSEMBLY_NAME),
            )],
        }
    }

    /// The standard project: two gated-candidate units inside the package,
    /// one unit outside it.
    pub fn standard() -> Self {
        ProjectFixture::new(STANDARD_MANIFEST)
            .with_unit(
                format!("{}/Runtime", PACKAGE_DIR),
                "Runtime",
                r#"{"name": "Runtime", "references": [], "autoReferenced": true}"#,
            )
            .with_unit(
                format!("{}/Samples", PACKAGE_DIR),
                "Samples",
                r#"{"name": "Samples", "defineConstraints": ["UNITY_EDITOR"]}"#,
            )
            .with_unit("Assets/Game", "Game", r#"{"name": "Game"}"#)
    }

    /// Add a unit descriptor.
    pub fn with_unit(
        mut self,
        folder: impl Into<PathBuf>,
        identity: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.units
            .push((folder.into(), identity.into(), content.into()));
        self
    }

    /// Write the project into a fresh temp directory.
    pub fn write(self) -> WrittenProject {
        let tmp = TempDir::new().unwrap();
        let project = WrittenProject { tmp };

        project.write_manifest(&self.manifest);
        for (folder, identity, content) in &self.units {
            let dir = project.root().join(folder);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join(format!("{}.asmdef", identity)), content).unwrap();
        }

        project
    }
}

/// A fixture written to disk. The directory is removed on drop.
#[derive(Debug)]
pub struct WrittenProject {
    tmp: TempDir,
}

impl WrittenProject {
    /// Project root.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Folder holding package.json.
    pub fn package_root(&self) -> PathBuf {
        self.root().join(PACKAGE_DIR)
    }

    /// Overwrite package.json.
    pub fn write_manifest(&self, content: &str) {
        let dir = self.package_root();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.json"), content).unwrap();
    }

    /// Path of the descriptor with the given identity, searched anywhere.
    pub fn unit_path(&self, identity: &str) -> PathBuf {
        crate::util::fs::find_files_with_extension(self.root(), "asmdef")
            .into_iter()
            .find(|p| p.file_stem().and_then(|s| s.to_str()) == Some(identity))
            .unwrap_or_else(|| panic!("no unit named {identity}"))
    }

    /// Raw descriptor text.
    pub fn read_unit(&self, identity: &str) -> String {
        std::fs::read_to_string(self.unit_path(identity)).unwrap()
    }

    /// Parsed `defineConstraints` of a descriptor (empty when absent).
    pub fn unit_constraints(&self, identity: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(&self.read_unit(identity)).unwrap();
        value
            .get("defineConstraints")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .map(|i| i.as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
