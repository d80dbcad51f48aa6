//! # Transform Store
//!
//! Target-keyed index of validated transformer registrations.
//!
//! The store is the one resource shared across all services in a run: every
//! tracker's gather phase appends entries here. It is append-only — a broken
//! service aborts startup entirely, so there is no rollback of entries
//! registered before the failure.

use crate::services::SharedService;
use crate::transformer::{SharedRule, Target, TargetKind};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// One validated registration: a concrete target, the rule that transforms
/// it, and the service that contributed the rule.
#[derive(Clone)]
pub struct RegistrationEntry {
    pub target: Target,
    pub rule: SharedRule,
    pub service: SharedService,
}

impl fmt::Debug for RegistrationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationEntry")
            .field("target", &self.target)
            .field("rule", &self.rule.label())
            .field("service", &self.service.name())
            .finish()
    }
}

/// Sink for validated registrations.
///
/// Implementations only need to append; the validator never reads back and
/// never asks for rollback.
pub trait TransformerRegistry {
    fn add_entry(&mut self, entry: RegistrationEntry);
}

/// In-memory registry indexing entries by their concrete target.
#[derive(Debug, Default)]
pub struct TransformStore {
    entries: HashMap<Target, Vec<RegistrationEntry>>,
    total_entries: usize,
}

impl TransformStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries registered for the given target, in registration order
    pub fn entries_for(&self, target: &Target) -> &[RegistrationEntry] {
        self.entries.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over the distinct targets with at least one registration
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.entries.keys()
    }

    /// Total number of registrations across all targets
    pub fn len(&self) -> usize {
        self.total_entries
    }

    /// Check whether any registrations have been made
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }

    /// Breakdown of the store contents by target kind
    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            distinct_targets: self.entries.len(),
            ..StoreStats::default()
        };

        for (target, entries) in &self.entries {
            stats.total_entries += entries.len();
            match target.kind() {
                TargetKind::Class => stats.class_entries += entries.len(),
                TargetKind::PreClass => stats.pre_class_entries += entries.len(),
                TargetKind::Method => stats.method_entries += entries.len(),
                TargetKind::Field => stats.field_entries += entries.len(),
            }
        }

        stats
    }
}

impl TransformerRegistry for TransformStore {
    fn add_entry(&mut self, entry: RegistrationEntry) {
        debug!(
            service = entry.service.name(),
            transformer = entry.rule.label(),
            target_label = %entry.target,
            "Registered transformer entry"
        );
        self.total_entries += 1;
        self.entries.entry(entry.target.clone()).or_default().push(entry);
    }
}

/// Statistics about registered entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total_entries: usize,
    pub distinct_targets: usize,
    pub class_entries: usize,
    pub pre_class_entries: usize,
    pub method_entries: usize,
    pub field_entries: usize,
}
