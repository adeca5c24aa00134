use crate::traits::FeatureBackend;

/// Backend that knows no features.
/// Every wrap against it fails, which makes it a safe placeholder when
/// gating must stay closed.
pub struct NoopBackend;

impl FeatureBackend for NoopBackend {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn exists(&self, _name: &str) -> bool {
        false
    }

    fn is_active(&self, _name: &str) -> bool {
        false
    }
}
