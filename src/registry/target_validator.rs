//! # Transformer Target Validation
//!
//! Converts a service's self-reported transformer rules into per-target
//! registrations, rejecting structurally inconsistent rules.
//!
//! A rule must be internally and externally consistent about the kind of thing
//! it transforms: every concrete target's derived kind must equal the rule's
//! declared kind. One bad rule fails the entire gather operation for its
//! service — that signals a broken service contract, not a condition worth
//! limping past. Entries registered for earlier valid rules are not rolled
//! back; the surrounding launcher aborts startup on the error anyway.

use crate::error::{LauncherError, Result};
use crate::registry::transform_store::{RegistrationEntry, TransformerRegistry};
use crate::services::SharedService;
use crate::transformer::TargetKind;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of one gather pass over a service's rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatherSummary {
    /// Rules the service reported
    pub rules_seen: usize,
    /// Rules skipped because their target set was empty
    pub rules_skipped: usize,
    /// Entries handed to the registry
    pub entries_registered: usize,
}

/// Validates transformer rules and feeds the survivors into a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetValidator;

impl TargetValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Run the validation/registration protocol for one service.
    ///
    /// Rules are processed in the order the service reports them. Each valid
    /// rule emits one [`RegistrationEntry`] per target. The first inconsistent
    /// rule aborts the pass: an absent rule list or absent declared kind is a
    /// [`LauncherError::ContractViolation`], a target-kind mismatch is a
    /// [`LauncherError::InvalidTransformerTargets`]. Rules with no targets
    /// contribute nothing and are not an error.
    pub fn gather(
        &self,
        service: &SharedService,
        registry: &mut dyn TransformerRegistry,
    ) -> Result<GatherSummary> {
        let service_name = service.name().to_string();

        let rules = service.transformers().ok_or_else(|| {
            LauncherError::contract_violation(
                &service_name,
                "the transformer list must be present",
            )
        })?;

        let mut summary = GatherSummary {
            rules_seen: rules.len(),
            ..GatherSummary::default()
        };

        for rule in rules {
            let declared = rule.target_kind().ok_or_else(|| {
                LauncherError::contract_violation(
                    &service_name,
                    format!("transformer {} does not declare a target kind", rule.label()),
                )
            })?;

            let targets = rule.targets();
            if targets.is_empty() {
                debug!(
                    service = %service_name,
                    transformer = rule.label(),
                    "Transformer lists no targets, skipping"
                );
                summary.rules_skipped += 1;
                continue;
            }

            // Single pass: count targets per derived kind, then check that
            // exactly the declared kind appeared.
            let mut kinds: HashMap<TargetKind, usize> = HashMap::new();
            for target in &targets {
                *kinds.entry(target.kind()).or_insert(0) += 1;
            }

            if kinds.len() > 1 || !kinds.contains_key(&declared) {
                error!(
                    service = %service_name,
                    transformer = rule.label(),
                    declared = %declared,
                    "Transformer targets do not match its declared target kind"
                );
                return Err(LauncherError::invalid_transformer_targets(
                    &service_name,
                    rule.label(),
                    declared,
                ));
            }

            for target in targets {
                registry.add_entry(RegistrationEntry {
                    target,
                    rule: Arc::clone(&rule),
                    service: Arc::clone(service),
                });
                summary.entries_registered += 1;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::registry::transform_store::TransformStore;
    use crate::services::{ModuleLayerManager, Resource, TransformationService};
    use crate::transformer::{SharedRule, Target, TransformerRule};
    use std::collections::HashSet;

    struct ScriptedRule {
        label: String,
        kind: Option<TargetKind>,
        targets: Vec<Target>,
    }

    impl ScriptedRule {
        fn shared(
            label: &str,
            kind: Option<TargetKind>,
            targets: Vec<Target>,
        ) -> SharedRule {
            Arc::new(Self {
                label: label.to_string(),
                kind,
                targets,
            })
        }
    }

    impl TransformerRule for ScriptedRule {
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

    struct RuleService {
        name: String,
        rules: Option<Vec<SharedRule>>,
    }

    impl RuleService {
        fn shared(name: &str, rules: Option<Vec<SharedRule>>) -> SharedService {
            Arc::new(Self {
                name: name.to_string(),
                rules,
            })
        }
    }

    impl TransformationService for RuleService {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_load(&self, _: &mut Environment, _: &HashSet<String>) -> crate::error::Result<()> {
            Ok(())
        }

        fn initialize(&self, _: &mut Environment) -> crate::error::Result<()> {
            Ok(())
        }

        fn transformers(&self) -> Option<Vec<SharedRule>> {
            self.rules.clone()
        }

        fn begin_scanning(&self, _: &mut Environment) -> crate::error::Result<Vec<Resource>> {
            Ok(vec![])
        }

        fn complete_scanning(
            &self,
            _: &dyn ModuleLayerManager,
        ) -> crate::error::Result<Vec<Resource>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_matching_targets_register_one_entry_each() {
        let foo = Target::method("ClassA", "fooMethod", "()V");
        let bar = Target::method("ClassA", "barMethod", "()V");
        let service = RuleService::shared(
            "mixin",
            Some(vec![ScriptedRule::shared(
                "method_patcher",
                Some(TargetKind::Method),
                vec![foo.clone(), bar.clone()],
            )]),
        );
        let mut store = TransformStore::new();

        let summary = TargetValidator::new().gather(&service, &mut store).unwrap();

        assert_eq!(summary.rules_seen, 1);
        assert_eq!(summary.rules_skipped, 0);
        assert_eq!(summary.entries_registered, 2);
        assert_eq!(store.len(), 2);
        for target in [&foo, &bar] {
            let entries = store.entries_for(target);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].rule.label(), "method_patcher");
            assert_eq!(entries[0].service.name(), "mixin");
        }
    }

    #[test]
    fn test_empty_target_set_is_skipped_silently() {
        let service = RuleService::shared(
            "mixin",
            Some(vec![ScriptedRule::shared(
                "noop",
                Some(TargetKind::Class),
                vec![],
            )]),
        );
        let mut store = TransformStore::new();

        let summary = TargetValidator::new().gather(&service, &mut store).unwrap();

        assert_eq!(summary.rules_seen, 1);
        assert_eq!(summary.rules_skipped, 1);
        assert_eq!(summary.entries_registered, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_mixed_target_kinds_fail_the_gather() {
        let service = RuleService::shared(
            "mixin",
            Some(vec![ScriptedRule::shared(
                "mixed",
                Some(TargetKind::Method),
                vec![
                    Target::method("ClassA", "fooMethod", "()V"),
                    Target::field("ClassA", "someField"),
                ],
            )]),
        );
        let mut store = TransformStore::new();

        let err = TargetValidator::new()
            .gather(&service, &mut store)
            .unwrap_err();

        assert_eq!(
            err,
            LauncherError::invalid_transformer_targets("mixin", "mixed", TargetKind::Method)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_uniform_targets_of_undeclared_kind_fail() {
        let service = RuleService::shared(
            "mixin",
            Some(vec![ScriptedRule::shared(
                "mislabeled",
                Some(TargetKind::Method),
                vec![Target::field("ClassA", "someField")],
            )]),
        );
        let mut store = TransformStore::new();

        let err = TargetValidator::new()
            .gather(&service, &mut store)
            .unwrap_err();

        assert!(matches!(
            err,
            LauncherError::InvalidTransformerTargets { .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_bad_rule_stops_later_rules_but_keeps_earlier_entries() {
        let service = RuleService::shared(
            "mixin",
            Some(vec![
                ScriptedRule::shared(
                    "good",
                    Some(TargetKind::Field),
                    vec![Target::field("ClassA", "width")],
                ),
                ScriptedRule::shared(
                    "bad",
                    Some(TargetKind::Field),
                    vec![Target::class("ClassA")],
                ),
                ScriptedRule::shared(
                    "never_reached",
                    Some(TargetKind::Class),
                    vec![Target::class("ClassB")],
                ),
            ]),
        );
        let mut store = TransformStore::new();

        let err = TargetValidator::new()
            .gather(&service, &mut store)
            .unwrap_err();

        assert!(matches!(
            err,
            LauncherError::InvalidTransformerTargets { ref transformer, .. } if transformer == "bad"
        ));
        // No rollback of the earlier valid rule, and nothing past the bad one.
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.entries_for(&Target::field("ClassA", "width")).len(),
            1
        );
        assert!(store.entries_for(&Target::class("ClassB")).is_empty());
    }

    #[test]
    fn test_absent_rule_list_is_a_contract_violation() {
        let service = RuleService::shared("broken", None);
        let mut store = TransformStore::new();

        let err = TargetValidator::new()
            .gather(&service, &mut store)
            .unwrap_err();

        assert!(matches!(err, LauncherError::ContractViolation { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_absent_declared_kind_is_a_contract_violation() {
        let service = RuleService::shared(
            "broken",
            Some(vec![ScriptedRule::shared(
                "undeclared",
                None,
                vec![Target::class("ClassA")],
            )]),
        );
        let mut store = TransformStore::new();

        let err = TargetValidator::new()
            .gather(&service, &mut store)
            .unwrap_err();

        assert!(matches!(
            err,
            LauncherError::ContractViolation { ref reason, .. } if reason.contains("undeclared")
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_rule_list_registers_nothing() {
        let service = RuleService::shared("quiet", Some(vec![]));
        let mut store = TransformStore::new();

        let summary = TargetValidator::new().gather(&service, &mut store).unwrap();

        assert_eq!(summary, GatherSummary::default());
        assert!(store.is_empty());
    }
}
