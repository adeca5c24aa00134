use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use clap::Args;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

use crate::backend::BackendVariant;
use crate::backend::JsonFileBackend;
use crate::backend::MemoryBackend;
use crate::backend::NoopBackend;

/// Which backend implementation answers feature queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BackendType {
    /// Empty in-memory store.
    Memory,
    /// JSON flags file (requires `flags_path`).
    JsonFile,
    /// Knows no features.
    Noop,
}

/// Base configuration for building a gate.
/// The CLI flattens these into its global options.
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct BaseConfig {
    /// Backend implementation to use.
    #[arg(long, value_enum, default_value = "json-file")]
    pub backend: BackendType,

    /// Path to the JSON flags file for the `json-file` backend.
    #[arg(long = "flags", env = "FEATURE_GATE_FLAGS")]
    pub flags_path: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, default_value = "feature_gate=info")]
    pub log_filter: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        BaseConfig {
            backend: BackendType::JsonFile,
            flags_path: None,
            log_filter: "feature_gate=info".to_string(),
        }
    }
}

impl BaseConfig {
    pub fn build_backend(&self) -> Result<BackendVariant> {
        let backend = match self.backend {
            BackendType::Memory => BackendVariant::Memory(MemoryBackend::new()),
            BackendType::Noop => BackendVariant::Noop(NoopBackend),
            BackendType::JsonFile => {
                let Some(path) = self.flags_path.as_ref() else {
                    bail!("the json-file backend requires a flags path (--flags)");
                };
                BackendVariant::JsonFile(JsonFileBackend::open(path)?)
            }
        };
        Ok(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FeatureBackend;

    #[test]
    fn test_json_file_requires_path() {
        let config = BaseConfig::default();
        assert!(config.build_backend().is_err());
    }

    #[test]
    fn test_build_memory_and_noop() -> Result<()> {
        let mut config = BaseConfig {
            backend: BackendType::Memory,
            ..BaseConfig::default()
        };
        assert_eq!(config.build_backend()?.name(), "memory");

        config.backend = BackendType::Noop;
        assert_eq!(config.build_backend()?.name(), "noop");
        Ok(())
    }

    #[test]
    fn test_backend_type_serde_names() -> Result<()> {
        let parsed: BackendType = serde_json::from_str("\"json-file\"")?;
        assert_eq!(parsed, BackendType::JsonFile);
        Ok(())
    }
}
