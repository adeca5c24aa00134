/// Trait for the stores that answer feature queries (memory, JSON file, etc.).
///
/// Implementations are responsible for:
/// - Knowing which feature names exist
/// - Reporting whether an existing feature is currently active
/// - Synchronising their own state; the gate adds no locking around calls
pub trait FeatureBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &'static str;

    /// Whether the backend knows a feature with this name.
    fn exists(&self, name: &str) -> bool;

    /// Whether the feature is currently active.
    ///
    /// Names the backend does not know are reported as inactive.
    fn is_active(&self, name: &str) -> bool;

    /// All feature names the backend knows, sorted.
    ///
    /// Default implementation reports nothing.
    fn features(&self) -> Vec<String> {
        Vec::new()
    }
}
