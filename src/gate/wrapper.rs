use std::fmt;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;

use tracing::Level;

use super::core::FeatureGate;
use crate::error::FeatureError;
use crate::types::Dispatch;
use crate::types::FnMeta;

/// A callable together with the identity used in log lines.
///
/// Several positional arguments are passed as one tuple `A`.
pub struct GatedFn<A, R> {
    func: Arc<dyn Fn(A) -> R + Send + Sync>,
    meta: FnMeta,
}

impl<A, R> GatedFn<A, R> {
    /// Capture `func` with its type name and the caller's location.
    #[track_caller]
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            meta: FnMeta::of::<F>(),
        }
    }

    /// Replace the recorded name, e.g. to label a closure.
    pub fn named(mut self, name: &'static str) -> Self {
        self.meta.name = name;
        self
    }

    pub fn meta(&self) -> FnMeta {
        self.meta
    }

    fn invoke(&self, args: A) -> R {
        (self.func)(args)
    }
}

impl<A, R> Clone for GatedFn<A, R> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            meta: self.meta,
        }
    }
}

impl<A, R> fmt::Debug for GatedFn<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatedFn").field("meta", &self.meta).finish()
    }
}

/// A feature name already validated against the backend, with its optional
/// default. Produced by `FeatureGate::wrap`; wraps any number of functions.
pub struct Decorator<A, R> {
    gate: FeatureGate,
    name: Arc<str>,
    default: Option<GatedFn<A, R>>,
}

impl<A, R> Decorator<A, R> {
    pub(crate) fn new(gate: FeatureGate, name: &str, default: Option<GatedFn<A, R>>) -> Self {
        Self {
            gate,
            name: Arc::from(name),
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_fn(&self) -> Option<&GatedFn<A, R>> {
        self.default.as_ref()
    }

    /// Wrap `func`, recording its type name and the caller's location.
    #[track_caller]
    pub fn wrap<F>(&self, func: F) -> Gated<A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.wrap_fn(GatedFn::new(func))
    }

    pub fn wrap_fn(&self, func: GatedFn<A, R>) -> Gated<A, R> {
        Gated {
            decorator: self.clone(),
            func,
        }
    }

    /// Query the backend and decide which branch a call would take.
    pub fn dispatch(&self) -> Dispatch {
        Dispatch::decide(
            self.gate.backend.is_active(&self.name),
            self.default.is_some(),
        )
    }
}

impl<A, R> Clone for Decorator<A, R> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            name: Arc::clone(&self.name),
            default: self.default.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Decorator<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

/// Drop-in replacement for a function, gated on a feature.
///
/// Every call re-queries the backend; nothing about the decision is cached.
///
/// `A` is a single concrete type. A borrowed argument type such as
/// `&'a str` fixes `'a` when the wrapper is built, so every value passed to
/// `call` must outlive the wrapper itself. Wrap functions taking owned
/// arguments (`String`, `Vec<T>`) when callers build their inputs after the
/// wrapper exists.
pub struct Gated<A, R> {
    decorator: Decorator<A, R>,
    func: GatedFn<A, R>,
}

impl<A, R> Gated<A, R> {
    pub fn feature(&self) -> &str {
        self.decorator.name()
    }

    pub fn meta(&self) -> FnMeta {
        self.func.meta()
    }

    pub fn dispatch(&self) -> Dispatch {
        self.decorator.dispatch()
    }
}

impl<A: Debug, R> Gated<A, R> {
    /// Run the wrapped function, the default, or fail, depending on the
    /// backend's answer right now.
    ///
    /// Whatever the chosen function returns (including an `Err` inside `R`)
    /// is handed back untouched, and panics unwind through.
    pub fn call(&self, args: A) -> Result<R, FeatureError> {
        let name = self.decorator.name();
        let logger = &self.decorator.gate.logger;

        if self.decorator.gate.backend.is_active(name) {
            logger.debug(&format!("{} func={}({:?})", name, self.func.meta, args));
            return Ok(self.func.invoke(args));
        }

        match self.decorator.default.as_ref() {
            Some(default) => {
                logger.warn(&format!(
                    "Disabled feature {} was requested. Using default.",
                    name
                ));
                if logger.enabled(Level::DEBUG) {
                    logger.debug(&format!("{} default={}({:?})", name, default.meta, args));
                }
                Ok(default.invoke(args))
            }
            None => {
                logger.warn(&format!("Disabled feature {} was requested", name));
                Err(FeatureError::Disabled {
                    name: name.to_string(),
                })
            }
        }
    }
}

impl<A: Debug, T, E> Gated<A, Result<T, E>>
where
    E: From<FeatureError>,
{
    /// `call` for fallible functions: gate errors are converted into the
    /// function's own error type so one `?` covers both.
    pub fn try_call(&self, args: A) -> Result<T, E> {
        match self.call(args) {
            Ok(result) => result,
            Err(err) => Err(E::from(err)),
        }
    }
}

impl<A: Debug, Fut: Future> Gated<A, Fut> {
    /// `call` for functions returning a future. The gate decides before the
    /// future is created and then awaits it as-is.
    pub async fn call_async(&self, args: A) -> Result<Fut::Output, FeatureError> {
        let fut = self.call(args)?;
        Ok(fut.await)
    }
}

impl<A, R> Clone for Gated<A, R> {
    fn clone(&self) -> Self {
        Self {
            decorator: self.decorator.clone(),
            func: self.func.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Gated<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gated")
            .field("feature", &self.decorator.name)
            .field("func", &self.func)
            .finish()
    }
}
