//! Error types for xrdgen-crd

use thiserror::Error;

/// Result type for xrdgen-crd operations
pub type Result<T> = std::result::Result<T, CrdError>;

/// Errors that can occur while synthesizing CRDs from a definition
///
/// Every variant describes a defect in the authored definition. None of them
/// is transient, so callers should surface them instead of retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CrdError {
    /// Claim names are absent or only partially specified
    #[error("claim names must be fully specified (kind, listKind, singular and plural)")]
    MissingClaimNames,

    /// A claim name collides with one of the composite resource names
    #[error("claim name '{name}' conflicts with a composite resource name")]
    ConflictingClaimName { name: String },

    /// The schema fragment redefines a generated spec property
    #[error("spec property '{name}' is reserved and cannot be set in the schema template")]
    ReservedFieldName { name: String },

    /// The schema fragment has an unexpected shape above `spec`
    #[error("malformed schema template: {0}")]
    MalformedTemplateSchema(String),

    /// No controller reference could be built for the definition
    #[error("cannot build an owner reference to definition '{name}': name and uid are required")]
    OwnerReference { name: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CrdError {
    fn from(e: serde_json::Error) -> Self {
        CrdError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CrdError {
    fn from(e: serde_yaml::Error) -> Self {
        CrdError::Serialization(e.to_string())
    }
}
