#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Launcher Core
//!
//! Rust core for transformation-service orchestration: lifecycle tracking and
//! transformer target validation for pluggable code-transformation services.
//!
//! ## Overview
//!
//! A launcher that supports in-flight code transformation hosts a set of
//! externally supplied **transformation services**. Each service participates
//! in a fixed startup protocol: it is loaded against the launch environment,
//! initialized, asked for the transformer rules it contributes, and driven
//! through a resource scan. This crate is the thin, synchronous layer between
//! the launcher and those services — it tracks each service's lifecycle
//! validity and validates/registers the transformer rules the service
//! reports, so the launcher only ever applies rules whose targets are
//! consistent with what the rule declared.
//!
//! ## Architecture
//!
//! - **ServiceTracker** wraps one service and records the outcome of its load
//!   phase; it is the sole readable indicator of whether that service is safe
//!   to drive further.
//! - **TargetValidator** checks every reported rule — all of a rule's concrete
//!   targets must carry the rule's declared target kind — and forwards valid
//!   rules to the registry, one entry per target.
//! - **ServicesCoordinator** runs the whole protocol across many services,
//!   skipping the ones that rejected the environment.
//!
//! The protocol is single-threaded and synchronous: every operation is a
//! direct call-and-return with no suspension points, and each tracker owns
//! exactly one service handle.
//!
//! ## Module Organization
//!
//! - [`services`] - The capability trait services implement, plus scan resources
//! - [`transformer`] - Rules, targets, and target kind classification
//! - [`state_machine`] - Service lifecycle states
//! - [`orchestration`] - The tracker and the multi-service coordinator
//! - [`registry`] - Target validation and the transform store
//! - [`environment`] - Opaque key-value launch context
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging bootstrap and helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launcher_core::{Environment, LauncherError, ServicesCoordinator, TransformStore};
//! # use launcher_core::{ModuleLayerManager, Resource, SharedRule, TransformationService};
//! # use std::collections::HashSet;
//! # use std::sync::Arc;
//! # struct MyService;
//! # impl TransformationService for MyService {
//! #     fn name(&self) -> &str { "my_service" }
//! #     fn on_load(&self, _: &mut Environment, _: &HashSet<String>) -> Result<(), LauncherError> { Ok(()) }
//! #     fn initialize(&self, _: &mut Environment) -> Result<(), LauncherError> { Ok(()) }
//! #     fn transformers(&self) -> Option<Vec<SharedRule>> { Some(vec![]) }
//! #     fn begin_scanning(&self, _: &mut Environment) -> Result<Vec<Resource>, LauncherError> { Ok(vec![]) }
//! #     fn complete_scanning(&self, _: &dyn ModuleLayerManager) -> Result<Vec<Resource>, LauncherError> { Ok(vec![]) }
//! # }
//!
//! fn main() -> Result<(), LauncherError> {
//!     launcher_core::logging::init_structured_logging();
//!
//!     let mut environment = Environment::new();
//!     let mut coordinator = ServicesCoordinator::new(vec![Arc::new(MyService)])?;
//!
//!     let summary = coordinator.load_services(&mut environment)?;
//!     println!(
//!         "{} services loaded, {} skipped",
//!         summary.loaded.len(),
//!         summary.invalid.len()
//!     );
//!
//!     coordinator.initialize_services(&mut environment)?;
//!
//!     let mut store = TransformStore::new();
//!     coordinator.gather_transformers(&mut store)?;
//!
//!     let resources = coordinator.run_scans(&mut environment)?;
//!     println!("services contributed {} resources", resources.len());
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod environment;
pub mod error;
pub mod logging;
pub mod orchestration;
pub mod registry;
pub mod services;
pub mod state_machine;
pub mod transformer;

pub use environment::Environment;
pub use error::{LauncherError, Result};
pub use orchestration::{LoadSummary, ServiceTracker, ServicesCoordinator};
pub use registry::{
    GatherSummary, RegistrationEntry, StoreStats, TargetValidator, TransformStore,
    TransformerRegistry,
};
pub use services::{Layer, ModuleLayerManager, Resource, SharedService, TransformationService};
pub use state_machine::ServiceState;
pub use transformer::{SharedRule, Target, TargetKind, TransformerRule};
