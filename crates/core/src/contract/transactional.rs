//! Transaction-tagged value wrapper
//!
//! Used when processing is at-least-once: the state layer only needs to know
//! which transaction produced a value so that a replayed batch carrying an
//! older id can be recognised and skipped.

/// A payload as of transaction `txid`
///
/// ## Invariants
///
/// - `txid` is assigned by the state layer and is never rewritten by a codec
/// - A serialize/deserialize round trip preserves `txid` exactly
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionalValue<T> {
    /// Transaction that produced `val`
    pub txid: i64,
    /// The payload
    pub val: T,
}

impl<T> TransactionalValue<T> {
    /// Create a value tagged with `txid`
    pub fn new(txid: i64, val: T) -> Self {
        TransactionalValue { txid, val }
    }

    /// Get the transaction id
    #[inline]
    pub fn txid(&self) -> i64 {
        self.txid
    }

    /// Get a reference to the payload
    #[inline]
    pub fn val(&self) -> &T {
        &self.val
    }

    /// Consume and return the payload
    #[inline]
    pub fn into_val(self) -> T {
        self.val
    }

    /// Map the payload to a new type, keeping the transaction id
    pub fn map<U, F>(self, f: F) -> TransactionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        TransactionalValue {
            txid: self.txid,
            val: f(self.val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactional_new() {
        let tv = TransactionalValue::new(42, "hello");

        assert_eq!(tv.txid(), 42);
        assert_eq!(*tv.val(), "hello");
    }

    #[test]
    fn test_transactional_into_val() {
        let tv = TransactionalValue::new(-1, vec![1, 2, 3]);
        assert_eq!(tv.into_val(), vec![1, 2, 3]);
    }

    #[test]
    fn test_transactional_map_keeps_txid() {
        let tv = TransactionalValue::new(i64::MAX, 5u32);
        let mapped = tv.map(|v| v.to_string());

        assert_eq!(mapped.txid, i64::MAX);
        assert_eq!(mapped.val, "5");
    }
}
