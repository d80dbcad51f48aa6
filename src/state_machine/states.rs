use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a wrapped transformation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    /// Initial state; the load hook has not completed
    Unloaded,
    /// Load completed and the service accepted the environment
    LoadValid,
    /// Load completed but the service rejected the environment
    LoadInvalid,
}

impl ServiceState {
    /// Check if the service is safe to drive through later phases
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::LoadValid)
    }

    /// Check if the load outcome has been recorded (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::LoadValid | Self::LoadInvalid)
    }

    /// Check if the load hook has not yet completed
    pub fn is_unloaded(&self) -> bool {
        matches!(self, Self::Unloaded)
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unloaded => write!(f, "unloaded"),
            Self::LoadValid => write!(f, "load_valid"),
            Self::LoadInvalid => write!(f, "load_invalid"),
        }
    }
}

impl std::str::FromStr for ServiceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unloaded" => Ok(Self::Unloaded),
            "load_valid" => Ok(Self::LoadValid),
            "load_invalid" => Ok(Self::LoadInvalid),
            _ => Err(format!("Invalid service state: {s}")),
        }
    }
}

/// Default state for newly wrapped services
impl Default for ServiceState {
    fn default() -> Self {
        Self::Unloaded
    }
}
