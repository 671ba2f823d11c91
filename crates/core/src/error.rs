//! Error types for tidal
//!
//! This module defines the errors raised by the value codecs and by the
//! opaque-state helpers. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Codec errors.
///
/// Neither variant is retriable: an encode failure is a schema or
/// programming error, and a decode failure means the stored bytes are
/// malformed or were written under a different layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The in-memory value cannot be represented in the wire format.
    #[error("Encode error (codec={codec_id}): {detail}")]
    EncodeError {
        /// Human-readable error description
        detail: String,
        /// Codec ID that attempted the encode
        codec_id: String,
    },

    /// The bytes are malformed, or a required field is missing or mistyped.
    ///
    /// Carries the codec identity and data length so callers can
    /// distinguish a wrong-codec error from data corruption.
    #[error("Decode error (codec={codec_id}, data_len={data_len}): {detail}")]
    DecodeError {
        /// Human-readable error description
        detail: String,
        /// Codec ID that attempted the decode
        codec_id: String,
        /// Length of the data that failed to decode
        data_len: usize,
    },
}

impl CodecError {
    /// Create an encode error.
    pub fn encode(detail: impl Into<String>, codec_id: impl Into<String>) -> Self {
        CodecError::EncodeError {
            detail: detail.into(),
            codec_id: codec_id.into(),
        }
    }

    /// Create a decode error with full diagnostic context.
    pub fn decode(detail: impl Into<String>, codec_id: impl Into<String>, data_len: usize) -> Self {
        CodecError::DecodeError {
            detail: detail.into(),
            codec_id: codec_id.into(),
            data_len,
        }
    }

    /// Check if this error was raised while encoding
    pub fn is_encode(&self) -> bool {
        matches!(self, CodecError::EncodeError { .. })
    }

    /// Check if this error was raised while decoding
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::DecodeError { .. })
    }

    /// Codec ID that raised the error
    pub fn codec_id(&self) -> &str {
        match self {
            CodecError::EncodeError { codec_id, .. } => codec_id,
            CodecError::DecodeError { codec_id, .. } => codec_id,
        }
    }
}

/// Errors raised when resolving opaque state against a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The batch being applied is older than the transaction already stored.
    #[error("Current batch ({batch_txid}) is behind state's batch ({curr_txid})")]
    StaleTransaction {
        /// Transaction id of the incoming batch
        batch_txid: i64,
        /// Transaction id recorded in the stored value
        curr_txid: i64,
    },
}
