//! Test utilities and fakes for gitdeps unit tests.
//!
//! This module provides recording implementations of the collaborators that
//! sit outside gitdeps (the registry and the build symbol store), so tests can
//! assert on exactly which requests were issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use gitdeps::test_support::{ProjectFixture, RecordingRegistry};
//!
//! #[test]
//! fn test_example() {
//!     let project = ProjectFixture::standard().write();
//!     let registry = RecordingRegistry::new();
//!
//!     // Hand `registry.clone()` to the code under test, then:
//!     assert_eq!(registry.requests().len(), 1);
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};

use crate::core::build_target::{BuildTarget, TargetGroup};
use crate::core::symbols::SymbolStore;
use crate::registry::Registry;

// Re-export fixtures for convenience
pub use fixtures::*;

/// One batched request received by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRequest {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

/// Registry that records every request. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistry {
    requests: Arc<Mutex<Vec<RegistryRequest>>>,
    fail: bool,
}

impl RecordingRegistry {
    /// Create a registry that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that records, then fails, every request.
    pub fn failing() -> Self {
        RecordingRegistry {
            fail: true,
            ..Self::default()
        }
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RegistryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Registry for RecordingRegistry {
    fn apply_changes(&mut self, to_add: &[String], to_remove: &[String]) -> Result<()> {
        self.requests.lock().unwrap().push(RegistryRequest {
            to_add: to_add.to_vec(),
            to_remove: to_remove.to_vec(),
        });
        if self.fail {
            bail!("registry unavailable");
        }
        Ok(())
    }
}

/// In-memory symbol store. Clones share state.
#[derive(Debug, Clone)]
pub struct MemorySymbolStore {
    active_target: BuildTarget,
    sets: Arc<Mutex<HashMap<TargetGroup, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemorySymbolStore {
    /// Create an empty store with `active_target` selected.
    pub fn new(active_target: BuildTarget) -> Self {
        MemorySymbolStore {
            active_target,
            sets: Arc::new(Mutex::new(HashMap::new())),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    /// Seed the symbol set of a group.
    pub fn with_symbols(self, group: TargetGroup, symbols: &str) -> Self {
        self.sets.lock().unwrap().insert(group, symbols.to_string());
        self
    }

    /// Current symbol set of a group.
    pub fn symbols(&self, group: TargetGroup) -> String {
        self.sets
            .lock()
            .unwrap()
            .get(&group)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `set_symbols` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SymbolStore for MemorySymbolStore {
    fn active_target(&self) -> BuildTarget {
        self.active_target
    }

    fn get_symbols(&self, group: TargetGroup) -> Result<String> {
        Ok(self.symbols(group))
    }

    fn set_symbols(&mut self, group: TargetGroup, symbols: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.sets.lock().unwrap().insert(group, symbols.to_string());
        Ok(())
    }
}
