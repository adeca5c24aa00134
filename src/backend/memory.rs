use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::traits::FeatureBackend;

/// In-memory feature backend.
/// Clones share the same state, so a feature can be toggled while a gate
/// built on another clone is in use.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    features: Arc<RwLock<HashMap<String, bool>>>,
    active_queries: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend pre-populated with `(name, active)` pairs.
    pub fn with_features<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let backend = Self::new();
        for (name, active) in features {
            backend.set(name, active);
        }
        backend
    }

    /// Register a feature or change its state.
    pub fn set(&self, name: impl Into<String>, active: bool) {
        self.features
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), active);
    }

    pub fn enable(&self, name: impl Into<String>) {
        self.set(name, true);
    }

    pub fn disable(&self, name: impl Into<String>) {
        self.set(name, false);
    }

    /// Forget a feature. Returns true if it was known.
    pub fn remove(&self, name: &str) -> bool {
        self.features
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    /// Number of `is_active` queries answered so far.
    pub fn active_queries(&self) -> usize {
        self.active_queries.load(Ordering::SeqCst)
    }
}

impl FeatureBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn exists(&self, name: &str) -> bool {
        self.features
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    fn is_active(&self, name: &str) -> bool {
        self.active_queries.fetch_add(1, Ordering::SeqCst);
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
    fn test_unknown_feature_is_inactive() {
        let backend = MemoryBackend::new();
        assert!(!backend.exists("missing"));
        assert!(!backend.is_active("missing"));
        assert_eq!(backend.active_queries(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let backend = MemoryBackend::with_features([("search", true)]);
        let other = backend.clone();

        other.disable("search");
        assert!(backend.exists("search"));
        assert!(!backend.is_active("search"));

        assert!(backend.remove("search"));
        assert!(!other.exists("search"));
        assert!(!other.remove("search"));
    }

    #[test]
    fn test_features_sorted() {
        let backend = MemoryBackend::with_features([("b", true), ("a", false), ("c", true)]);
        assert_eq!(backend.features(), vec!["a", "b", "c"]);
    }
}
