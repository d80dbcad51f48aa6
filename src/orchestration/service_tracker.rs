//! # Service Tracker
//!
//! Wraps a single transformation service to track lifecycle state and other
//! runtime metadata.
//!
//! The tracker is the single source of truth for "is this service usable".
//! Its load phase absorbs the one recoverable failure a service can report
//! (an incompatible environment) into the [`ServiceState::LoadInvalid`]
//! state; everything after load is an unconditional forward that the caller
//! must gate on [`ServiceTracker::is_valid`].

use crate::constants::phases;
use crate::environment::Environment;
use crate::error::{LauncherError, Result};
use crate::registry::{TargetValidator, TransformerRegistry};
use crate::services::{ModuleLayerManager, Resource, SharedService};
use crate::state_machine::ServiceState;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, error};

/// Decorates a transformation service with lifecycle tracking.
pub struct ServiceTracker {
    service: SharedService,
    state: ServiceState,
    loaded_at: Option<DateTime<Utc>>,
}

impl ServiceTracker {
    /// Wrap a service; the tracker starts in the unloaded state
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: ServiceState::default(),
            loaded_at: None,
        }
    }

    /// Drive the service's load hook.
    ///
    /// `other_services` carries the names of every other service known in
    /// this run so the service can detect conflicts itself. A successful load
    /// records [`ServiceState::LoadValid`]; an incompatible-environment
    /// report is caught, logged, and recorded as [`ServiceState::LoadInvalid`]
    /// without propagating. Any other failure propagates and leaves the
    /// tracker unloaded — load is considered not to have completed.
    pub fn on_load(
        &mut self,
        environment: &mut Environment,
        other_services: &HashSet<String>,
    ) -> Result<()> {
        debug!(
            service = self.service.name(),
            phase = phases::LOAD,
            "Loading service"
        );
        match self.service.on_load(environment, other_services) {
            Ok(()) => {
                self.state = ServiceState::LoadValid;
                self.loaded_at = Some(Utc::now());
                debug!(
                    service = self.service.name(),
                    phase = phases::LOAD,
                    "Loaded service"
                );
                Ok(())
            }
            Err(err @ LauncherError::IncompatibleEnvironment { .. }) => {
                error!(
                    service = self.service.name(),
                    phase = phases::LOAD,
                    error = %err,
                    "Service failed to load"
                );
                self.state = ServiceState::LoadInvalid;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Check whether the service loaded validly
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// When the service loaded validly, if it has
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Forward to the service's initialize hook.
    ///
    /// No gating happens here; the caller must have checked
    /// [`is_valid`](Self::is_valid). Failures propagate unchanged.
    pub fn initialize(&self, environment: &mut Environment) -> Result<()> {
        debug!(
            service = self.service.name(),
            phase = phases::INITIALIZE,
            "Initializing transformation service"
        );
        self.service.initialize(environment)?;
        debug!(
            service = self.service.name(),
            phase = phases::INITIALIZE,
            "Initialized transformation service"
        );
        Ok(())
    }

    /// Validate and register the service's transformer rules into `registry`.
    ///
    /// Fails fast with a configuration error on the first inconsistent rule;
    /// entries registered before the failure stay (the error aborts startup
    /// entirely, so partial registry state is moot).
    pub fn gather_transformers(&self, registry: &mut dyn TransformerRegistry) -> Result<()> {
        debug!(
            service = self.service.name(),
            phase = phases::GATHER_TRANSFORMERS,
            "Initializing transformers for transformation service"
        );
        let summary = TargetValidator::new().gather(&self.service, registry)?;
        debug!(
            service = self.service.name(),
            phase = phases::GATHER_TRANSFORMERS,
            rules = summary.rules_seen,
            skipped = summary.rules_skipped,
            entries = summary.entries_registered,
            "Initialized transformers for transformation service"
        );
        Ok(())
    }

    /// Forward to the service's scan hook, returning its resources unchanged
    pub fn run_scan(&self, environment: &mut Environment) -> Result<Vec<Resource>> {
        debug!(
            service = self.service.name(),
            phase = phases::SCAN,
            "Beginning scan trigger"
        );
        let scan_results = self.service.begin_scanning(environment)?;
        debug!(
            service = self.service.name(),
            phase = phases::SCAN,
            "End scan trigger"
        );
        Ok(scan_results)
    }

    /// Forward to the service's scan-completion hook
    pub fn complete_scan(&self, layers: &dyn ModuleLayerManager) -> Result<Vec<Resource>> {
        self.service.complete_scanning(layers)
    }

    /// The wrapped service handle; identical on every call
    pub fn service(&self) -> &SharedService {
        &self.service
    }
}
