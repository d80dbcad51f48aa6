use super::target::{Target, TargetKind};
use std::sync::Arc;

/// A unit of registration a transformation service contributes.
///
/// Implementations declare the one target kind they operate on and the
/// concrete targets they apply to. The gather phase verifies that every
/// listed target's derived kind equals the declared kind before anything is
/// registered; a rule with an empty target list simply contributes nothing.
pub trait TransformerRule {
    /// Identity of this rule, used in diagnostics when validation rejects it
    fn label(&self) -> &str;

    /// The declared target kind.
    ///
    /// Returning `None` is a contract violation and fails the whole gather
    /// operation for the contributing service.
    fn target_kind(&self) -> Option<TargetKind>;

    /// The concrete targets this rule applies to. May be empty.
    fn targets(&self) -> Vec<Target>;
}

/// Shared handle to a rule, cloned into one registration per target.
pub type SharedRule = Arc<dyn TransformerRule>;
