use crate::environment::Environment;
use crate::error::Result;
use crate::transformer::SharedRule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Module layers the host assembles during startup, in build order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Boot,
    Service,
    Plugin,
    Game,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boot => write!(f, "boot"),
            Self::Service => write!(f, "service"),
            Self::Plugin => write!(f, "plugin"),
            Self::Game => write!(f, "game"),
        }
    }
}

/// Paths a service contributes to one of the host's module layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub layer: Layer,
    pub paths: Vec<PathBuf>,
}

impl Resource {
    /// Create a resource contribution for the given layer
    pub fn new(layer: Layer, paths: Vec<PathBuf>) -> Self {
        Self { layer, paths }
    }
}

/// Opaque handle to the host's module layer manager.
///
/// The core forwards it unchanged into [`TransformationService::complete_scanning`];
/// only services inspect it.
pub trait ModuleLayerManager {
    /// Check whether the given layer has been built yet
    fn has_layer(&self, layer: Layer) -> bool;
}

/// Capability set of one pluggable transformation service.
///
/// Hooks take `&self`: services are shared behind [`SharedService`] handles and
/// the startup protocol is single-threaded, so implementations that need
/// internal state use interior mutability.
///
/// Every hook other than [`on_load`](Self::on_load) may fail with any
/// [`LauncherError`](crate::error::LauncherError); the core propagates those
/// failures without interpreting them. `on_load` is special: an
/// [`IncompatibleEnvironment`](crate::error::LauncherError::IncompatibleEnvironment)
/// failure is recoverable and marks the service invalid instead of aborting
/// startup.
pub trait TransformationService {
    /// Human-readable, unique name of this service
    fn name(&self) -> &str;

    /// Load hook. Receives the environment and the names of all other
    /// services known in this run, for inter-service conflict detection.
    fn on_load(&self, environment: &mut Environment, other_services: &HashSet<String>)
        -> Result<()>;

    /// Initialize hook, called only for services that loaded validly
    fn initialize(&self, environment: &mut Environment) -> Result<()>;

    /// The transformer rules this service contributes.
    ///
    /// May legitimately be empty; returning `None` is a contract violation
    /// that fails the gather phase.
    fn transformers(&self) -> Option<Vec<SharedRule>>;

    /// Begin scanning for resources to contribute
    fn begin_scanning(&self, environment: &mut Environment) -> Result<Vec<Resource>>;

    /// Complete the scan once the host's module layers are available
    fn complete_scanning(&self, layers: &dyn ModuleLayerManager) -> Result<Vec<Resource>>;
}

/// Shared handle to a service; one tracker owns each handle, and registrations
/// carry clones of it.
pub type SharedService = Arc<dyn TransformationService>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_display() {
        assert_eq!(Layer::Boot.to_string(), "boot");
        assert_eq!(Layer::Game.to_string(), "game");
    }

    #[test]
    fn test_layer_serde() {
        let json = serde_json::to_string(&Layer::Plugin).unwrap();
        assert_eq!(json, "\"plugin\"");
        let parsed: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Layer::Plugin);
    }

    #[test]
    fn test_resource_round_trip() {
        let resource = Resource::new(
            Layer::Service,
            vec![PathBuf::from("mods/core.jar"), PathBuf::from("mods/extra.jar")],
        );
        let json = serde_json::to_string(&resource).unwrap();
        let parsed: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resource);
    }
}
