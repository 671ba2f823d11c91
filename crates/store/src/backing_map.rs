//! Codec-backed state map
//!
//! Pairs a `ValueCodec` with a `DocumentStore`. The map is the seam between
//! the state layer, which reasons about typed values, and the document store,
//! which only sees bytes.

use crate::config::StateConfig;
use crate::traits::{DocumentStore, StoreError, StoreResult};
use tidal_codec::ValueCodec;
use tracing::{debug, warn};

/// Multi-key get/put of typed state values over a document store.
#[derive(Debug)]
pub struct CodecBackingMap<C, S> {
    codec: C,
    store: S,
    config: StateConfig,
}

impl<C, S> CodecBackingMap<C, S>
where
    C: ValueCodec,
    S: DocumentStore,
{
    /// Create a map.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CodecMismatch` if `codec` is not the codec for
    /// `config.state_type`. Reading documents written under one layout with
    /// another codec would silently misinterpret state.
    pub fn new(codec: C, store: S, config: StateConfig) -> StoreResult<Self> {
        let expected = config.state_type.codec_id();
        if codec.codec_id() != expected {
            return Err(StoreError::CodecMismatch {
                expected: expected.to_string(),
                actual: codec.codec_id().to_string(),
            });
        }
        Ok(CodecBackingMap {
            codec,
            store,
            config,
        })
    }

    /// Get the codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Read the values stored under `ids`.
    ///
    /// The result has one entry per id, `None` where no document exists.
    ///
    /// # Errors
    ///
    /// Returns the first store or decode failure. Decoded values before it
    /// are discarded.
    pub fn multi_get(&self, ids: &[&str]) -> StoreResult<Vec<Option<C::Value>>> {
        debug!(target: "tidal::store", index = %self.config.index, count = ids.len(), "multi_get");
        ids.iter().map(|id| self.get(id)).collect()
    }

    /// Read a single value.
    pub fn get(&self, id: &str) -> StoreResult<Option<C::Value>> {
        let key = self.config.document_key(id);
        match self.store.get(&key)? {
            None => Ok(None),
            Some(bytes) => match self.codec.decode(&bytes) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!(target: "tidal::store", key = %key, error = %e, "Failed to decode stored document");
                    Err(e.into())
                }
            },
        }
    }

    /// Write `values[i]` under `ids[i]`.
    ///
    /// Every value is encoded before any document is written, so an encode
    /// failure leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LengthMismatch` if the slices differ in length,
    /// or the first encode or store failure.
    pub fn multi_put(&self, ids: &[&str], values: &[C::Value]) -> StoreResult<()> {
        if ids.len() != values.len() {
            return Err(StoreError::LengthMismatch {
                keys: ids.len(),
                values: values.len(),
            });
        }

        let documents = ids
            .iter()
            .zip(values)
            .map(|(id, value)| -> StoreResult<(String, Vec<u8>)> {
                Ok((self.config.document_key(id), self.codec.encode(value)?))
            })
            .collect::<StoreResult<Vec<_>>>()?;

        debug!(target: "tidal::store", index = %self.config.index, count = documents.len(), "multi_put");
        for (key, bytes) in documents {
            self.store.put(&key, bytes)?;
        }
        Ok(())
    }

    /// Write a single value.
    pub fn put(&self, id: &str, value: &C::Value) -> StoreResult<()> {
        let bytes = self.codec.encode(value)?;
        self.store.put(&self.config.document_key(id), bytes)
    }
}
