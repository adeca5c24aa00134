pub mod recording;
pub mod tracing_logger;

pub use recording::RecordingLogger;
pub use tracing_logger::TracingLogger;
