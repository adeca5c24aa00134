use super::json_file::JsonFileBackend;
use super::memory::MemoryBackend;
use super::noop::NoopBackend;
use crate::traits::FeatureBackend;

/// Enum representing all built-in backend implementations.
pub enum BackendVariant {
    Noop(NoopBackend),
    Memory(MemoryBackend),
    JsonFile(JsonFileBackend),
}

impl FeatureBackend for BackendVariant {
    fn name(&self) -> &'static str {
        match self {
            BackendVariant::Noop(inner) => inner.name(),
            BackendVariant::Memory(inner) => inner.name(),
            BackendVariant::JsonFile(inner) => inner.name(),
        }
    }

    fn exists(&self, name: &str) -> bool {
        match self {
            BackendVariant::Noop(inner) => inner.exists(name),
            BackendVariant::Memory(inner) => inner.exists(name),
            BackendVariant::JsonFile(inner) => inner.exists(name),
        }
    }

    fn is_active(&self, name: &str) -> bool {
        match self {
            BackendVariant::Noop(inner) => inner.is_active(name),
            BackendVariant::Memory(inner) => inner.is_active(name),
            BackendVariant::JsonFile(inner) => inner.is_active(name),
        }
    }

    fn features(&self) -> Vec<String> {
        match self {
            BackendVariant::Noop(inner) => inner.features(),
            BackendVariant::Memory(inner) => inner.features(),
            BackendVariant::JsonFile(inner) => inner.features(),
        }
    }
}
