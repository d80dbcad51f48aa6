//! # Startup Orchestration
//!
//! Drives transformation services through the fixed startup protocol:
//! load → validity check → initialize → gather transformers → scan →
//! complete scan.
//!
//! ## Core Components
//!
//! - **ServiceTracker**: Wraps a single service, records its load outcome, and
//!   is the sole readable indicator of whether that service is safe to use
//! - **ServicesCoordinator**: Owns one tracker per service and runs each phase
//!   across all of them, skipping services that rejected the environment
//!
//! The tracker performs no gating of its own after load — later phases are
//! unconditional forwards, and it is the caller's job (normally the
//! coordinator's) to consult [`ServiceTracker::is_valid`] first.

pub mod service_tracker;
pub mod services_coordinator;

// Re-export core components for easy access
pub use service_tracker::ServiceTracker;
pub use services_coordinator::{LoadSummary, ServicesCoordinator};
