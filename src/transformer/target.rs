use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of addressable points a transformer rule can operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A whole class, after parsing
    Class,
    /// A whole class, before any parsing has happened
    PreClass,
    /// A single method within a class
    Method,
    /// A single field within a class
    Field,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::PreClass => write!(f, "pre_class"),
            Self::Method => write!(f, "method"),
            Self::Field => write!(f, "field"),
        }
    }
}

/// A concrete, classification-tagged address within the host's transformable
/// surface.
///
/// The shape of the descriptor determines its kind; the two never disagree.
/// Targets are immutable values and key registrations in the transform store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Class {
        class_name: String,
    },
    PreClass {
        class_name: String,
    },
    Method {
        class_name: String,
        method_name: String,
        method_descriptor: String,
    },
    Field {
        class_name: String,
        field_name: String,
    },
}

impl Target {
    /// Target an entire class
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::Class {
            class_name: class_name.into(),
        }
    }

    /// Target a class before parsing
    pub fn pre_class(class_name: impl Into<String>) -> Self {
        Self::PreClass {
            class_name: class_name.into(),
        }
    }

    /// Target a single method by name and descriptor
    pub fn method(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        method_descriptor: impl Into<String>,
    ) -> Self {
        Self::Method {
            class_name: class_name.into(),
            method_name: method_name.into(),
            method_descriptor: method_descriptor.into(),
        }
    }

    /// Target a single field by name
    pub fn field(class_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::Field {
            class_name: class_name.into(),
            field_name: field_name.into(),
        }
    }

    /// The classification derived from this target's shape
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Class { .. } => TargetKind::Class,
            Self::PreClass { .. } => TargetKind::PreClass,
            Self::Method { .. } => TargetKind::Method,
            Self::Field { .. } => TargetKind::Field,
        }
    }

    /// The class that owns this target
    pub fn class_name(&self) -> &str {
        match self {
            Self::Class { class_name }
            | Self::PreClass { class_name }
            | Self::Method { class_name, .. }
            | Self::Field { class_name, .. } => class_name,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class { class_name } => write!(f, "{class_name}"),
            Self::PreClass { class_name } => write!(f, "{class_name} (pre)"),
            Self::Method {
                class_name,
                method_name,
                method_descriptor,
            } => write!(f, "{class_name}.{method_name}{method_descriptor}"),
            Self::Field {
                class_name,
                field_name,
            } => write!(f, "{class_name}.{field_name}"),
        }
    }
}
