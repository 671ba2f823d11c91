//! Document store trait and error types.

use tidal_core::CodecError;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by document stores and codec-backed maps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed to read or write a document.
    #[error("Backend error: {0}")]
    Backend(String),

    /// A value could not be encoded or a stored document could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The codec does not match the configured state type.
    #[error("Codec mismatch: expected {expected}, got {actual}")]
    CodecMismatch {
        /// Codec ID required by the configured state type
        expected: String,
        /// Codec ID actually supplied
        actual: String,
    },

    /// A batch write supplied a different number of keys and values.
    #[error("Length mismatch: {keys} keys, {values} values")]
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Create a backend error
    pub fn backend(detail: impl Into<String>) -> Self {
        StoreError::Backend(detail.into())
    }

    /// Create a configuration error
    pub fn config(detail: impl Into<String>) -> Self {
        StoreError::Config(detail.into())
    }
}

/// Document store collaborator.
///
/// Persists opaque document bytes under a string identifier. Transport,
/// connection management and batching all live behind this trait.
///
/// # Thread Safety
///
/// Stores must be `Send + Sync`; a single store is shared by every map that
/// writes to it.
pub trait DocumentStore: Send + Sync {
    /// Write `bytes` under `key`, replacing any existing document.
    fn put(&self, key: &str, bytes: Vec<u8>) -> StoreResult<()>;

    /// Read the document stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<S> {
    fn put(&self, key: &str, bytes: Vec<u8>) -> StoreResult<()> {
        (**self).put(key, bytes)
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }
}
