//! Wire field names
//!
//! These names are part of the persisted-data contract. Documents already
//! stored under this layout must stay decodable, so they never change.

/// Transaction id of a transactional value
pub const FIELD_TXID: &str = "txid";

/// Payload of a transactional value
pub const FIELD_VAL: &str = "val";

/// Current transaction id of an opaque value
pub const FIELD_CURR_TXID: &str = "currTxid";

/// Current payload of an opaque value
pub const FIELD_CURR: &str = "curr";

/// Previous payload of an opaque value (may be null)
pub const FIELD_PREV: &str = "prev";
