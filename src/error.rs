//! # Launcher Error Types
//!
//! Structured error handling for the launcher core using thiserror
//! for typed errors instead of `Box<dyn Error>` patterns.
//!
//! Two kinds of failure matter to callers: the recoverable
//! [`LauncherError::IncompatibleEnvironment`] raised by a service's load hook,
//! which the tracker absorbs into an invalid lifecycle state, and the fatal
//! configuration/contract errors that abort startup. Everything a service
//! raises through [`LauncherError::ServiceFailure`] passes through the core
//! uninterpreted.

use crate::transformer::TargetKind;
use thiserror::Error;

/// Errors surfaced by the launcher core and by transformation service hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LauncherError {
    /// The service reported that the current environment is unsuitable during
    /// its load hook. Recoverable: the tracker records the service as invalid
    /// and startup continues without it.
    #[error("Service {service} is incompatible with the environment: {reason}")]
    IncompatibleEnvironment { service: String, reason: String },

    /// The service broke a programming contract: absent transformer list,
    /// absent declared target kind, or duplicate service names.
    #[error("Contract violation in service {service}: {reason}")]
    ContractViolation { service: String, reason: String },

    /// A transformer's concrete targets disagree with its declared target
    /// kind. Fatal configuration error; aborts the gather phase.
    #[error("Transformer {transformer} from service {service} declares target kind {declared} but lists targets of another kind")]
    InvalidTransformerTargets {
        service: String,
        transformer: String,
        declared: TargetKind,
    },

    /// Arbitrary failure raised by a service hook. The core never interprets
    /// this; it propagates with the service's own message intact.
    #[error("Service {service} failed: {message}")]
    ServiceFailure { service: String, message: String },
}

impl LauncherError {
    /// Create an incompatible-environment error
    pub fn incompatible_environment(
        service: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::IncompatibleEnvironment {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract_violation(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-transformer-targets error
    pub fn invalid_transformer_targets(
        service: impl Into<String>,
        transformer: impl Into<String>,
        declared: TargetKind,
    ) -> Self {
        Self::InvalidTransformerTargets {
            service: service.into(),
            transformer: transformer.into(),
            declared,
        }
    }

    /// Create a generic service failure
    pub fn service_failure(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceFailure {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Check if this error is recoverable at load time (the caller skips the
    /// service instead of aborting startup)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompatibleEnvironment { .. })
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
