//! Plain (non-transactional) value codec.

use crate::document;
use crate::traits::ValueCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tidal_core::CodecResult;

/// Codec for bare payloads.
///
/// The payload's own fields are written at the top level of the document,
/// with no version metadata.
pub struct PlainValueCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> PlainValueCodec<T> {
    /// Codec identifier
    pub const CODEC_ID: &'static str = "plain";

    /// Create a new plain codec
    pub const fn new() -> Self {
        PlainValueCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for PlainValueCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PlainValueCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PlainValueCodec<T> {}

impl<T> fmt::Debug for PlainValueCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainValueCodec").finish()
    }
}

impl<T> ValueCodec for PlainValueCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn encode(&self, value: &T) -> CodecResult<Vec<u8>> {
        document::to_bytes(value, Self::CODEC_ID)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<T> {
        document::from_bytes(bytes, Self::CODEC_ID)
    }

    fn codec_id(&self) -> &str {
        Self::CODEC_ID
    }
}
