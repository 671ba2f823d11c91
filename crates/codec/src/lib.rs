//! Value codecs for tidal
//!
//! This crate turns the values a transactional state store persists into
//! self-describing JSON documents and back:
//! - ValueCodec: the shared encode/decode contract
//! - PlainValueCodec: bare payloads (non-transactional state)
//! - TransactionalValueCodec: `{"txid", "val"}` documents
//! - OpaqueValueCodec: `{"currTxid", "curr", "prev"}` documents
//!
//! All codecs are stateless and zero-sized. Payload types are mapped
//! field-by-field through `serde`, so the target type is fixed at compile
//! time by the codec's type parameter. Payloads holding NaN or infinite
//! floats are rejected at encode time.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod document;
mod finite;
pub mod opaque;
pub mod plain;
pub mod traits;
pub mod transactional;

pub use opaque::OpaqueValueCodec;
pub use plain::PlainValueCodec;
pub use traits::ValueCodec;
pub use transactional::TransactionalValueCodec;

pub use tidal_core::{CodecError, CodecResult};
