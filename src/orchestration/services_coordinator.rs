//! # Services Coordinator
//!
//! Drives every registered transformation service through the startup
//! protocol in the fixed phase order, so launchers consume one component
//! instead of re-implementing the sequencing and validity gating around
//! individual trackers.
//!
//! Services that reject the environment at load are reported once and then
//! skipped by every later phase. Any other failure, in any phase, aborts the
//! phase and propagates to the launcher.

use crate::constants::phases;
use crate::environment::Environment;
use crate::error::{LauncherError, Result};
use crate::logging::log_service_operation;
use crate::orchestration::service_tracker::ServiceTracker;
use crate::registry::TransformerRegistry;
use crate::services::{ModuleLayerManager, Resource, SharedService};
use std::collections::HashSet;
use tracing::{debug, info};

/// Outcome of the load phase across all services
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Services that loaded validly, in registration order
    pub loaded: Vec<String>,
    /// Services that rejected the environment and will be skipped
    pub invalid: Vec<String>,
}

/// Owns one tracker per service and runs each startup phase across them.
pub struct ServicesCoordinator {
    trackers: Vec<ServiceTracker>,
}

impl std::fmt::Debug for ServicesCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServicesCoordinator")
            .field("services", &self.trackers.len())
            .finish()
    }
}

impl ServicesCoordinator {
    /// Build a coordinator over the given services.
    ///
    /// Service names must be unique; a duplicate is a packaging error in the
    /// service set and is rejected up front.
    pub fn new(services: Vec<SharedService>) -> Result<Self> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.name().to_string()) {
                return Err(LauncherError::contract_violation(
                    service.name(),
                    "duplicate service name",
                ));
            }
        }

        Ok(Self {
            trackers: services.into_iter().map(ServiceTracker::new).collect(),
        })
    }

    /// Run the load phase for every service.
    ///
    /// Each service receives the names of all other services in the run.
    /// Incompatible-environment reports are absorbed by the trackers; any
    /// other load failure propagates immediately. The summary lists which
    /// services remain for the rest of startup.
    pub fn load_services(&mut self, environment: &mut Environment) -> Result<LoadSummary> {
        let names: Vec<String> = self
            .trackers
            .iter()
            .map(|tracker| tracker.service().name().to_string())
            .collect();

        for (index, tracker) in self.trackers.iter_mut().enumerate() {
            let other_services: HashSet<String> = names
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, name)| name.clone())
                .collect();
            tracker.on_load(environment, &other_services)?;
        }

        let mut summary = LoadSummary::default();
        for tracker in &self.trackers {
            let name = tracker.service().name().to_string();
            if tracker.is_valid() {
                summary.loaded.push(name);
            } else {
                summary.invalid.push(name);
            }
        }

        info!(
            loaded = summary.loaded.len(),
            invalid = summary.invalid.len(),
            "Service load phase complete"
        );
        for name in &summary.invalid {
            log_service_operation(
                phases::LOAD,
                name,
                "skipped",
                Some("service rejected the environment"),
            );
        }

        Ok(summary)
    }

    /// Initialize every valid service
    pub fn initialize_services(&self, environment: &mut Environment) -> Result<()> {
        for tracker in self.valid_trackers() {
            tracker.initialize(environment)?;
        }
        debug!(phase = phases::INITIALIZE, "Service initialize phase complete");
        Ok(())
    }

    /// Gather and register transformers from every valid service.
    ///
    /// Aborts on the first service whose rules fail validation; earlier
    /// services' registrations stay in the registry.
    pub fn gather_transformers(&self, registry: &mut dyn TransformerRegistry) -> Result<()> {
        for tracker in self.valid_trackers() {
            tracker.gather_transformers(registry)?;
        }
        debug!(
            phase = phases::GATHER_TRANSFORMERS,
            "Transformer gather phase complete"
        );
        Ok(())
    }

    /// Run the scan hook on every valid service, concatenating their
    /// resources in registration order
    pub fn run_scans(&self, environment: &mut Environment) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        for tracker in self.valid_trackers() {
            resources.extend(tracker.run_scan(environment)?);
        }
        debug!(
            phase = phases::SCAN,
            resources = resources.len(),
            "Service scan phase complete"
        );
        Ok(resources)
    }

    /// Complete the scan on every valid service once module layers exist
    pub fn complete_scans(&self, layers: &dyn ModuleLayerManager) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        for tracker in self.valid_trackers() {
            resources.extend(tracker.complete_scan(layers)?);
        }
        debug!(
            phase = phases::COMPLETE_SCAN,
            resources = resources.len(),
            "Service scan completion phase complete"
        );
        Ok(resources)
    }

    /// Names of all registered services, in registration order
    pub fn service_names(&self) -> Vec<&str> {
        self.trackers
            .iter()
            .map(|tracker| tracker.service().name())
            .collect()
    }

    /// Look up the tracker for a service by name
    pub fn tracker(&self, name: &str) -> Option<&ServiceTracker> {
        self.trackers
            .iter()
            .find(|tracker| tracker.service().name() == name)
    }

    /// Number of services that loaded validly
    pub fn valid_count(&self) -> usize {
        self.valid_trackers().count()
    }

    fn valid_trackers(&self) -> impl Iterator<Item = &ServiceTracker> {
        self.trackers.iter().filter(|tracker| tracker.is_valid())
    }
}
