use std::fmt;
use std::sync::Arc;

use super::wrapper::Decorator;
use super::wrapper::GatedFn;
use crate::error::FeatureError;
use crate::logger::TracingLogger;
use crate::traits::FeatureBackend;
use crate::traits::GateLogger;

/// Turns a backend's answer into a dispatch decision for gated functions.
///
/// Holds shared handles to the backend and logger only; cloning is cheap and
/// every clone talks to the same backend.
#[derive(Clone)]
pub struct FeatureGate {
    pub(crate) backend: Arc<dyn FeatureBackend>,
    pub(crate) logger: Arc<dyn GateLogger>,
}

impl FeatureGate {
    pub fn new(backend: Arc<dyn FeatureBackend>, logger: Arc<dyn GateLogger>) -> Self {
        logger.debug(&format!(
            "The feature gate has been created with the {} backend",
            backend.name()
        ));
        Self { backend, logger }
    }

    /// Gate logging through `tracing`.
    pub fn with_tracing(backend: Arc<dyn FeatureBackend>) -> Self {
        Self::new(backend, Arc::new(TracingLogger))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Validate `name` against the backend and return a decorator for it.
    ///
    /// Only `exists` is consulted here. The default, if any, is stored but
    /// never run.
    pub fn wrap<A, R>(
        &self,
        name: &str,
        default: Option<GatedFn<A, R>>,
    ) -> Result<Decorator<A, R>, FeatureError> {
        if !self.backend.exists(name) {
            self.logger.error(&format!("An unknown feature was requested: {}", name));
            return Err(FeatureError::UnknownFeature {
                name: name.to_string(),
            });
        }
        Ok(Decorator::new(self.clone(), name, default))
    }

    /// Decorator without a default: disabled calls fail.
    pub fn feature<A, R>(&self, name: &str) -> Result<Decorator<A, R>, FeatureError> {
        self.wrap(name, None)
    }

    /// Decorator falling back to `default` while the feature is disabled.
    #[track_caller]
    pub fn feature_with_default<A, R, D>(
        &self,
        name: &str,
        default: D,
    ) -> Result<Decorator<A, R>, FeatureError>
    where
        D: Fn(A) -> R + Send + Sync + 'static,
    {
        self.wrap(name, Some(GatedFn::new(default)))
    }

    /// Ask the backend directly. No validation, no logging.
    pub fn is_active(&self, name: &str) -> bool {
        self.backend.is_active(name)
    }
}

impl fmt::Debug for FeatureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureGate")
            .field("backend", &self.backend.name())
            .finish_non_exhaustive()
    }
}
