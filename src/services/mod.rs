//! # Transformation Services
//!
//! The capability surface a pluggable transformation service implements, and
//! the value types its scan hooks hand back to the launcher.
//!
//! Services are externally supplied; this crate only defines the seam. Each
//! service participates in the fixed startup protocol: load, initialize,
//! contribute transformers, scan for resources, complete the scan.

pub mod transformation_service;

pub use transformation_service::{
    Layer, ModuleLayerManager, Resource, SharedService, TransformationService,
};
