//! Opaque value codec.
//!
//! ## Document Layout
//!
//! ```text
//! {
//!   "currTxid": <i64>,
//!   "curr":     { ...payload fields... },
//!   "prev":     { ...payload fields... } | null
//! }
//! ```
//!
//! `prev` is always written, as `null` when the value has no previous
//! version. On decode a `null` or a missing `prev` both mean "no previous
//! version"; neither is an error.

use crate::document::Document;
use crate::traits::ValueCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tidal_core::fields::{FIELD_CURR, FIELD_CURR_TXID, FIELD_PREV};
use tidal_core::{CodecResult, OpaqueValue};

/// Codec for `OpaqueValue<T>`.
///
/// Preserves the three-way distinction between `curr_txid`, `curr` and
/// `prev` exactly, including an absent `prev`. The state layer relies on it
/// to re-apply a retried batch on top of `prev`.
pub struct OpaqueValueCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> OpaqueValueCodec<T> {
    /// Codec identifier
    pub const CODEC_ID: &'static str = "opaque";

    /// Create a new opaque codec
    pub const fn new() -> Self {
        OpaqueValueCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for OpaqueValueCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OpaqueValueCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OpaqueValueCodec<T> {}

impl<T> fmt::Debug for OpaqueValueCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueValueCodec").finish()
    }
}

impl<T> ValueCodec for OpaqueValueCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = OpaqueValue<T>;

    fn encode(&self, value: &OpaqueValue<T>) -> CodecResult<Vec<u8>> {
        Document::builder(Self::CODEC_ID)
            .with_int(FIELD_CURR_TXID, value.curr_txid)
            .with_nested(FIELD_CURR, &value.curr)?
            .with_optional_nested(FIELD_PREV, value.prev.as_ref())?
            .into_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<OpaqueValue<T>> {
        let mut doc = Document::parse(bytes, Self::CODEC_ID)?;
        let curr_txid = doc.take_txid(FIELD_CURR_TXID)?;
        let curr = doc.take_nested(FIELD_CURR)?;
        // missing and null `prev` both mean no previous version
        let prev = doc.take_optional_nested(FIELD_PREV)?;
        Ok(OpaqueValue::new(curr_txid, curr, prev))
    }

    fn codec_id(&self) -> &str {
        Self::CODEC_ID
    }
}
