//! Core types for tidal
//!
//! This crate defines the foundational types shared by the codecs and the
//! document store:
//! - TransactionalValue: payload tagged with its producing transaction
//! - OpaqueValue: current/previous payloads for replay-safe state
//! - StateType: processing guarantee selecting a codec
//! - Wire field names of the persisted documents
//! - Error: Codec and state error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod fields;

pub use contract::{OpaqueValue, StateType, TransactionalValue};
pub use error::{CodecError, CodecResult, StateError};
