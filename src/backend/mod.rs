pub mod json_file;
pub mod memory;
pub mod noop;
pub mod variant;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use noop::NoopBackend;
pub use variant::BackendVariant;
