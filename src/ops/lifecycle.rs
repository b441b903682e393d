//! Process-wide entry points.
//!
//! The host calls into gitdeps at two moments: once after its editor context
//! has finished initializing, and every time its registry reports packages
//! removed. [`Lifecycle`] implements both as a [`PackageEventListener`];
//! [`EventDispatcher`] is the registration point a host forwards its events
//! to.
//!
//! All callbacks run on the host's main thread and never concurrently, so
//! none of this is synchronized.

use crate::core::symbols::SymbolStore;
use crate::ops::inject_constraints::{inject_marker_into_all_units, InjectReport};
use crate::ops::publish_symbols::{publish_marker_for_active_target, PublishOutcome};
use crate::ops::sync_deps::{sync_add, sync_remove, SyncError};
use crate::registry::Registry;
use crate::util::context::ResolverContext;

/// A package removed from the project, as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedPackage {
    pub name: String,
}

impl RemovedPackage {
    pub fn new(name: impl Into<String>) -> Self {
        RemovedPackage { name: name.into() }
    }
}

/// Callbacks a host delivers to gitdeps.
pub trait PackageEventListener {
    /// The host finished initializing and assets are queryable.
    fn on_startup(&mut self) -> Option<StartupReport>;

    /// The registry removed packages in one registration batch. Returns
    /// `None` when the batch did not concern the listener, otherwise the
    /// outcome of its reaction.
    fn on_packages_removed(&mut self, removed: &[RemovedPackage]) -> Option<RemovalOutcome>;
}

/// Dependency names sent for removal, or why the request failed.
pub type RemovalOutcome = Result<Vec<String>, SyncError>;

/// What the start-up trigger did. Every step runs even if an earlier one
/// failed; failures are collected in `errors`.
#[derive(Debug, Clone, Default)]
pub struct StartupReport {
    pub injected: Option<InjectReport>,
    pub requested: Option<Vec<String>>,
    pub published: Option<PublishOutcome>,
    pub errors: Vec<String>,
}

impl StartupReport {
    /// True when every step succeeded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drives the reconciliation steps from host events.
pub struct Lifecycle<R, S> {
    ctx: ResolverContext,
    registry: R,
    symbols: S,
    started: bool,
}

impl<R, S> Lifecycle<R, S>
where
    R: Registry,
    S: SymbolStore,
{
    /// Create a lifecycle over a context and its collaborators.
    pub fn new(ctx: ResolverContext, registry: R, symbols: S) -> Self {
        Lifecycle {
            ctx,
            registry,
            symbols,
            started: false,
        }
    }

    /// Whether the start-up trigger has fired.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Run the start-up steps in order: gate units, request dependencies,
    /// publish the build define. Failures are logged and do not stop later
    /// steps.
    pub fn startup(&mut self) -> StartupReport {
        let mut report = StartupReport::default();

        match inject_marker_into_all_units(&mut self.ctx) {
            Ok(injected) => report.injected = Some(injected),
            Err(e) => {
                tracing::error!("failed to gate units: {:#}", e);
                report.errors.push(format!("{:#}", e));
            }
        }

        match sync_add(&mut self.ctx, &mut self.registry) {
            Ok(requested) => report.requested = Some(requested),
            Err(e) => {
                let e = anyhow::Error::new(e);
                tracing::error!("failed to add git dependencies: {:#}", e);
                report.errors.push(format!("{:#}", e));
            }
        }

        match publish_marker_for_active_target(&mut self.symbols) {
            Ok(published) => report.published = Some(published),
            Err(e) => {
                tracing::error!("failed to publish build define: {:#}", e);
                report.errors.push(format!("{:#}", e));
            }
        }

        report
    }

    /// Handle a removal batch. If the manifest's own package is among the
    /// removed entries, request removal of its git dependencies once.
    ///
    /// Failures are logged and returned; the caller decides whether they are
    /// fatal. An unreadable manifest is a failure, since ownership of the
    /// batch cannot be decided without it.
    pub fn packages_removed(&mut self, removed: &[RemovedPackage]) -> Option<RemovalOutcome> {
        if removed.is_empty() {
            return None;
        }

        let own_name = match self.ctx.manifest() {
            Ok(manifest) => manifest.name().to_string(),
            Err(e) => {
                let e = SyncError::from(e);
                tracing::error!("cannot handle removed packages: {}", error_chain(&e));
                return Some(Err(e));
            }
        };

        if !removed.iter().any(|p| p.name == own_name) {
            tracing::debug!("ignoring removal of unrelated packages");
            return None;
        }

        tracing::info!("{} was removed; removing its git dependencies", own_name);
        let outcome = sync_remove(&mut self.ctx, &mut self.registry);
        if let Err(e) = &outcome {
            tracing::error!("failed to remove git dependencies: {}", error_chain(e));
        }
        Some(outcome)
    }
}

impl<R, S> PackageEventListener for Lifecycle<R, S>
where
    R: Registry,
    S: SymbolStore,
{
    fn on_startup(&mut self) -> Option<StartupReport> {
        if self.started {
            tracing::debug!("start-up already ran in this process");
            return None;
        }
        self.started = true;
        Some(self.startup())
    }

    fn on_packages_removed(&mut self, removed: &[RemovedPackage]) -> Option<RemovalOutcome> {
        self.packages_removed(removed)
    }
}

/// Render an error and its sources on one line, like anyhow's `{:#}`.
fn error_chain(e: &SyncError) -> String {
    anyhow::Chain::new(e)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Registration point for host events.
///
/// A host registers listeners once and forwards its own events here.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Box<dyn PackageEventListener>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn register(&mut self, listener: Box<dyn PackageEventListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver the deferred start-up call to every listener.
    pub fn dispatch_startup(&mut self) -> Vec<StartupReport> {
        self.listeners
            .iter_mut()
            .filter_map(|l| l.on_startup())
            .collect()
    }

    /// Deliver a removal batch to every listener. Returns the outcome of
    /// each listener the batch concerned.
    pub fn dispatch_packages_removed(&mut self, removed: &[RemovedPackage]) -> Vec<RemovalOutcome> {
        self.listeners
            .iter_mut()
            .filter_map(|l| l.on_packages_removed(removed))
            .collect()
    }
}
