//! Contract types for versioned state
//!
//! This module contains the value shapes a transactional state store persists.
//! Each shape corresponds to one processing guarantee:
//!
//! 1. **Non-transactional**: the bare payload, no version metadata
//! 2. **Transactional**: `TransactionalValue<T>`, the payload tagged with the
//!    transaction that produced it (at-least-once deduplication)
//! 3. **Opaque**: `OpaqueValue<T>`, the current payload, its transaction id and
//!    the payload that existed before it (replay-safe exactly-once)
//!
//! ## Module Structure
//!
//! - `transactional`: Payload + txid wrapper
//! - `opaque`: Current/previous payload wrapper with replay resolution
//! - `state_type`: Processing-guarantee enumeration
//!
//! ## Usage
//!
//! ```
//! use tidal_core::contract::{OpaqueValue, StateType, TransactionalValue};
//! ```

pub mod opaque;
pub mod state_type;
pub mod transactional;

// Re-exports
pub use opaque::OpaqueValue;
pub use state_type::StateType;
pub use transactional::TransactionalValue;
