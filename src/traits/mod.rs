pub mod backend;
pub mod logger;

pub use backend::FeatureBackend;
pub use logger::GateLogger;
