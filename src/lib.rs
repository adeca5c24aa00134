// Library exports for gating functions behind feature flags

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod logger;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use config::{BackendType, BaseConfig};
pub use error::FeatureError;
pub use gate::{Decorator, FeatureGate, Gated, GatedFn};
pub use traits::{FeatureBackend, GateLogger};
pub use types::{Dispatch, FnMeta};

// Re-export backend and logger implementations for convenience
pub use backend::{BackendVariant, JsonFileBackend, MemoryBackend, NoopBackend};
pub use logger::{RecordingLogger, TracingLogger};
