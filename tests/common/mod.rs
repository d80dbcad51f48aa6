//! Scripted mock services and rules shared by the integration tests.

#![allow(dead_code)]

use launcher_core::{
    Environment, LauncherError, Layer, ModuleLayerManager, Resource, Result, SharedRule,
    Target, TargetKind, TransformationService,
};
use std::cell::Cell;
use std::collections::HashSet;
use std::sync::Arc;

/// What the mock's load hook should do.
pub enum LoadOutcome {
    Valid,
    Incompatible(&'static str),
    Fail(&'static str),
}

/// A transformation service whose behavior is fully scripted up front.
pub struct ScriptedService {
    name: String,
    load_outcome: LoadOutcome,
    rules: Option<Vec<SharedRule>>,
    scan_resources: Vec<Resource>,
    completed_resources: Vec<Resource>,
    pub initialize_calls: Cell<usize>,
}

impl ScriptedService {
    pub fn builder(name: &str) -> ScriptedServiceBuilder {
        ScriptedServiceBuilder {
            name: name.to_string(),
            load_outcome: LoadOutcome::Valid,
            rules: Some(vec![]),
            scan_resources: vec![],
            completed_resources: vec![],
        }
    }
}

pub struct ScriptedServiceBuilder {
    name: String,
    load_outcome: LoadOutcome,
    rules: Option<Vec<SharedRule>>,
    scan_resources: Vec<Resource>,
    completed_resources: Vec<Resource>,
}

impl ScriptedServiceBuilder {
    pub fn incompatible(mut self, reason: &'static str) -> Self {
        self.load_outcome = LoadOutcome::Incompatible(reason);
        self
    }

    pub fn failing_load(mut self, message: &'static str) -> Self {
        self.load_outcome = LoadOutcome::Fail(message);
        self
    }

    pub fn rule(mut self, rule: SharedRule) -> Self {
        self.rules.get_or_insert_with(Vec::new).push(rule);
        self
    }

    pub fn absent_rules(mut self) -> Self {
        self.rules = None;
        self
    }

    pub fn scan_resource(mut self, resource: Resource) -> Self {
        self.scan_resources.push(resource);
        self
    }

    pub fn completed_resource(mut self, resource: Resource) -> Self {
        self.completed_resources.push(resource);
        self
    }

    pub fn build(self) -> Arc<ScriptedService> {
        Arc::new(ScriptedService {
            name: self.name,
            load_outcome: self.load_outcome,
            rules: self.rules,
            scan_resources: self.scan_resources,
            completed_resources: self.completed_resources,
            initialize_calls: Cell::new(0),
        })
    }
}

impl TransformationService for ScriptedService {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_load(&self, _: &mut Environment, _: &HashSet<String>) -> Result<()> {
        match self.load_outcome {
            LoadOutcome::Valid => Ok(()),
            LoadOutcome::Incompatible(reason) => {
                Err(LauncherError::incompatible_environment(&self.name, reason))
            }
            LoadOutcome::Fail(message) => Err(LauncherError::service_failure(&self.name, message)),
        }
    }

    fn initialize(&self, _: &mut Environment) -> Result<()> {
        self.initialize_calls.set(self.initialize_calls.get() + 1);
        Ok(())
    }

    fn transformers(&self) -> Option<Vec<SharedRule>> {
        self.rules.clone()
    }

    fn begin_scanning(&self, _: &mut Environment) -> Result<Vec<Resource>> {
        Ok(self.scan_resources.clone())
    }

    fn complete_scanning(&self, _: &dyn ModuleLayerManager) -> Result<Vec<Resource>> {
        Ok(self.completed_resources.clone())
    }
}

/// A transformer rule whose declared kind and targets are scripted up front.
pub struct ScriptedRule {
    label: String,
    kind: Option<TargetKind>,
    targets: Vec<Target>,
}

impl ScriptedRule {
    pub fn new(label: &str, kind: TargetKind, targets: Vec<Target>) -> SharedRule {
        Arc::new(Self {
            label: label.to_string(),
            kind: Some(kind),
            targets,
        })
    }

    /// A rule that breaks the contract by not declaring its kind.
    pub fn undeclared(label: &str, targets: Vec<Target>) -> SharedRule {
        Arc::new(Self {
            label: label.to_string(),
            kind: None,
            targets,
        })
    }
}

impl launcher_core::TransformerRule for ScriptedRule {
    fn label(&self) -> &str {
        &self.label
    }

    fn target_kind(&self) -> Option<TargetKind> {
        self.kind
    }

    fn targets(&self) -> Vec<Target> {
        self.targets.clone()
    }
}

/// Module layer manager stub that reports every layer as built (or not).
pub struct StaticLayers(pub bool);

impl ModuleLayerManager for StaticLayers {
    fn has_layer(&self, _: Layer) -> bool {
        self.0
    }
}
