//! The feature gate and the wrappers it produces.
//!
//! This module provides:
//! - `core`: `FeatureGate`, validation of feature names at wrap time
//! - `wrapper`: `GatedFn`, `Decorator` and `Gated`, the call-time dispatch
//! - `tests`: unit tests for the dispatch rules

pub mod core;
pub mod wrapper;

pub use self::core::FeatureGate;
pub use wrapper::Decorator;
pub use wrapper::Gated;
pub use wrapper::GatedFn;
