use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::PoisonError;
use std::sync::RwLock;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::traits::FeatureBackend;

/// One entry of a flags file.
///
/// Both `"search": true` and `"search": { "active": true }` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagEntry {
    Bool(bool),
    Table { active: bool },
}

impl FlagEntry {
    pub fn active(self) -> bool {
        match self {
            FlagEntry::Bool(active) => active,
            FlagEntry::Table { active } => active,
        }
    }
}

/// Feature backend reading a JSON object of feature name to state.
///
/// The file is read eagerly on `open`; later edits are picked up by `reload`.
pub struct JsonFileBackend {
    path: PathBuf,
    features: RwLock<HashMap<String, bool>>,
}

impl JsonFileBackend {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let features = load(&path)?;
        tracing::debug!(
            "JSON file backend: loaded {} features from {:?}",
            features.len(),
            path
        );
        Ok(Self {
            path,
            features: RwLock::new(features),
        })
    }

    /// Re-read the file. On error the previously loaded state is kept.
    ///
    /// Returns the number of features now known.
    pub fn reload(&self) -> Result<usize> {
        let features = load(&self.path)?;
        let count = features.len();
        *self
            .features
            .write()
            .unwrap_or_else(PoisonError::into_inner) = features;
        tracing::info!(
            "JSON file backend: reloaded {} features from {:?}",
            count,
            self.path
        );
        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> Result<HashMap<String, bool>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read flags file {:?}", path))?;
    let entries: HashMap<String, FlagEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse flags file {:?}", path))?;
    Ok(entries
        .into_iter()
        .map(|(name, entry)| (name, entry.active()))
        .collect())
}

impl FeatureBackend for JsonFileBackend {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn exists(&self, name: &str) -> bool {
        self.features
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    fn is_active(&self, name: &str) -> bool {
        self.features
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .unwrap_or(false)
    }

    fn features(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .features
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_entry_shapes() {
        let entries: HashMap<String, FlagEntry> =
            serde_json::from_str(r#"{"a": true, "b": {"active": false}}"#).unwrap();
        assert!(entries["a"].active());
        assert!(!entries["b"].active());
    }

    #[test]
    fn test_flag_entry_rejects_strings() {
        let parsed: std::result::Result<HashMap<String, FlagEntry>, _> =
            serde_json::from_str(r#"{"a": "yes"}"#);
        assert!(parsed.is_err());
    }
}
