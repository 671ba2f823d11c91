//! Document store layer for tidal
//!
//! This crate connects the value codecs to the document store a state store
//! persists into:
//! - DocumentStore: the byte-level store collaborator
//! - InMemoryDocumentStore: concurrent in-memory implementation
//! - CodecBackingMap: typed multi-get/multi-put through a codec
//! - StateConfig: TOML configuration (state type, index, cluster hosts)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backing_map;
pub mod config;
pub mod memory;
pub mod traits;

pub use backing_map::CodecBackingMap;
pub use config::{ClusterConfig, StateConfig, TransportAddress, DEFAULT_PORT};
pub use memory::InMemoryDocumentStore;
pub use traits::{DocumentStore, StoreError, StoreResult};
