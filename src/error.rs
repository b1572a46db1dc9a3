//! Error types for shortcut reconciliation

use thiserror::Error;

/// Errors that can occur while parsing accelerator strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccelError {
    #[error("unknown modifier: <{0}>")]
    UnknownModifier(String),

    #[error("unterminated modifier in accelerator: {0}")]
    UnterminatedModifier(String),

    #[error("missing base key in accelerator: {0}")]
    MissingBaseKey(String),

    #[error("empty accelerator string")]
    Empty,
}

/// Errors that can occur while loading or validating a preset definition
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("duplicate assignment for {0}")]
    DuplicateAssignment(String),

    #[error("{0} is both assigned and protected")]
    ProtectedOverlap(String),

    #[error("invalid storage key (expected schema.key): {0}")]
    InvalidStorageKey(String),

    #[error("invalid accelerator for {key}: {source}")]
    InvalidAccelerator {
        key: String,
        #[source]
        source: AccelError,
    },

    #[error("preset id cannot be empty")]
    EmptyId,

    #[error("invalid preset document: {0}")]
    Document(String),
}

/// Errors raised by a binding store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("write rejected for {0}: {1}")]
    WriteRejected(String, String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether the backend as a whole is unreachable, as opposed to a
    /// single entry rejecting a write.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Errors that can occur in the preset library on disk
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("invalid preset: {0}")]
    Invalid(#[from] PresetError),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by the reconciliation engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("accelerator error: {0}")]
    Accel(#[from] AccelError),
}
