//! Transactional value codec.
//!
//! ## Document Layout
//!
//! ```text
//! {
//!   "txid": <i64>,
//!   "val":  { ...payload fields... }
//! }
//! ```

use crate::document::Document;
use crate::traits::ValueCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tidal_core::fields::{FIELD_TXID, FIELD_VAL};
use tidal_core::{CodecResult, TransactionalValue};

/// Codec for `TransactionalValue<T>`.
///
/// Both fields are required on decode. The transaction id is exposed
/// losslessly so the state layer can discard replayed batches whose id is
/// not newer than the stored one.
pub struct TransactionalValueCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TransactionalValueCodec<T> {
    /// Codec identifier
    pub const CODEC_ID: &'static str = "transactional";

    /// Create a new transactional codec
    pub const fn new() -> Self {
        TransactionalValueCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TransactionalValueCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TransactionalValueCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TransactionalValueCodec<T> {}

impl<T> fmt::Debug for TransactionalValueCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionalValueCodec").finish()
    }
}

impl<T> ValueCodec for TransactionalValueCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = TransactionalValue<T>;

    fn encode(&self, value: &TransactionalValue<T>) -> CodecResult<Vec<u8>> {
        Document::builder(Self::CODEC_ID)
            .with_int(FIELD_TXID, value.txid)
            .with_nested(FIELD_VAL, &value.val)?
            .into_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<TransactionalValue<T>> {
        let mut doc = Document::parse(bytes, Self::CODEC_ID)?;
        let txid = doc.take_txid(FIELD_TXID)?;
        let val = doc.take_nested(FIELD_VAL)?;
        Ok(TransactionalValue::new(txid, val))
    }

    fn codec_id(&self) -> &str {
        Self::CODEC_ID
    }
}
