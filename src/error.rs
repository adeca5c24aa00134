use thiserror::Error;

/// Conditions raised by the gate itself.
///
/// Failures from the wrapped or default function are never converted into
/// this type; they reach the caller as they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// The backend does not know the feature. Raised when wrapping.
    #[error("Unknown feature: {name}")]
    UnknownFeature { name: String },

    /// The feature exists but is inactive and no default was supplied.
    /// Raised on every call while the feature stays disabled.
    #[error("name '{name}' is not enabled")]
    Disabled { name: String },
}

impl FeatureError {
    /// Feature name the error refers to.
    pub fn feature(&self) -> &str {
        match self {
            FeatureError::UnknownFeature { name } => name,
            FeatureError::Disabled { name } => name,
        }
    }
}
