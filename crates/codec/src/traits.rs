//! Value codec trait definitions.

use tidal_core::CodecResult;

/// Value codec trait.
///
/// Every value a state store writes to its backing document store passes
/// through a codec, and every document it reads back is decoded by the same
/// codec.
///
/// # Contract
///
/// - `decode(encode(v)) == v` for every valid `v`
/// - `decode` does not depend on the field order produced by `encode`
/// - Optional fields that are null never cause a decode failure
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync`. They hold no mutable state, so one instance
/// can be shared by any number of threads without locking.
///
/// # Codec Identity
///
/// Each codec has a unique identifier. A state store checks it against its
/// configured `StateType` so that documents written under one layout are
/// never read with another.
pub trait ValueCodec: Send + Sync {
    /// The in-memory value this codec persists.
    type Value;

    /// Encode a value into document bytes.
    ///
    /// Fails with `CodecError::EncodeError` if the value contains something
    /// the document format cannot represent (for example a map with
    /// non-string keys). That is a schema error and is not retriable.
    fn encode(&self, value: &Self::Value) -> CodecResult<Vec<u8>>;

    /// Decode document bytes into a value.
    ///
    /// Fails with `CodecError::DecodeError` if the bytes are not a well-formed
    /// document, or if a required field is missing or mistyped.
    fn decode(&self, bytes: &[u8]) -> CodecResult<Self::Value>;

    /// Unique codec identifier.
    fn codec_id(&self) -> &str;
}
