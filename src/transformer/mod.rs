//! # Transformer Model
//!
//! The units a transformation service contributes: rules, the concrete targets
//! they apply to, and the target kind classification that ties them together.
//!
//! A rule declares exactly one [`TargetKind`] and lists the [`Target`]s it
//! transforms. Every target independently derives its own kind from its shape;
//! the gather phase rejects any rule whose targets disagree with the declared
//! kind (see `registry::TargetValidator`).

pub mod rule;
pub mod target;

// Re-export main types for convenient access
pub use rule::{SharedRule, TransformerRule};
pub use target::{Target, TargetKind};
