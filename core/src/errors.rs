use std::fmt;
use std::path::PathBuf;

use crate::model::ModelFormat;

/// Result type used across graphpeek crates.
pub type PeekResult<T> = anyhow::Result<T>;
pub type PeekError = anyhow::Error;

/// The failure kinds a caller may want to tell apart.
///
/// They travel inside a [`PeekError`] and are recovered with [`IntrospectError::kind_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectError {
    /// The artifact path does not resolve to anything on disk.
    ArtifactNotFound(PathBuf),
    /// The artifact bytes do not match the declared format.
    DeserializationError { format: ModelFormat, reason: String },
    /// The requested operation has no meaning for this format.
    UnsupportedOperation { format: ModelFormat, operation: &'static str },
    /// The saved-model does not declare the requested signature.
    SignatureNotFound { key: String, available: Vec<String> },
}

impl IntrospectError {
    pub fn deserialization(format: ModelFormat, reason: impl fmt::Display) -> IntrospectError {
        IntrospectError::DeserializationError { format, reason: reason.to_string() }
    }

    /// Find the first typed kind in an error chain, if any.
    pub fn kind_of(e: &PeekError) -> Option<&IntrospectError> {
        e.chain().find_map(|cause| cause.downcast_ref::<IntrospectError>())
    }

    /// Process exit code for this kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            IntrospectError::ArtifactNotFound(_) => 2,
            IntrospectError::DeserializationError { .. } => 3,
            IntrospectError::UnsupportedOperation { .. } => 4,
            IntrospectError::SignatureNotFound { .. } => 5,
        }
    }
}

impl fmt::Display for IntrospectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrospectError::ArtifactNotFound(path) => write!(f, "model not found: {path:?}"),
            IntrospectError::DeserializationError { format, reason } => {
                write!(f, "Failed to read {format} model: {reason}")
            }
            IntrospectError::UnsupportedOperation { format, operation } => {
                write!(f, "Listing {operation} is not supported for {format} models")
            }
            IntrospectError::SignatureNotFound { key, available } => {
                write!(f, "No signature {key:?} in saved model (available: {available:?})")
            }
        }
    }
}

impl std::error::Error for IntrospectError {}

/// Fail with `ArtifactNotFound` unless `path` exists.
pub fn ensure_exists(path: &std::path::Path) -> PeekResult<()> {
    if !path.exists() {
        Err(IntrospectError::ArtifactNotFound(path.to_path_buf()))?
    }
    Ok(())
}
