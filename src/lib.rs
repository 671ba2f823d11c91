//! Tidal - versioned state values for transactional stream processing
//!
//! Tidal encodes the values a transactional state store persists to an
//! external document store, under three processing guarantees:
//! non-transactional, transactional (at-least-once) and opaque
//! (exactly-once with replay).
//!
//! # Quick Start
//!
//! ```
//! use tidal::{OpaqueValue, OpaqueValueCodec, ValueCodec};
//!
//! let codec = OpaqueValueCodec::<u64>::new();
//! let bytes = codec.encode(&OpaqueValue::first(1, 5)).unwrap();
//! assert_eq!(codec.decode(&bytes).unwrap().prev, None);
//! ```
//!
//! # Architecture
//!
//! - `tidal-core`: value shapes, wire field names, errors
//! - `tidal-codec`: the codecs
//! - `tidal-store`: document store trait, in-memory store, codec-backed map,
//!   configuration

pub use tidal_codec::{OpaqueValueCodec, PlainValueCodec, TransactionalValueCodec, ValueCodec};
pub use tidal_core::fields;
pub use tidal_core::{
    CodecError, CodecResult, OpaqueValue, StateError, StateType, TransactionalValue,
};
pub use tidal_store::{
    ClusterConfig, CodecBackingMap, DocumentStore, InMemoryDocumentStore, StateConfig,
    StoreError, StoreResult, TransportAddress, DEFAULT_PORT,
};
