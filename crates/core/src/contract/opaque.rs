//! Opaque value wrapper
//!
//! An opaque value stores the result of the latest transaction together with
//! the value that existed before it. When a batch is retried (for example
//! after a worker crash) its transaction id matches `curr_txid`, and the
//! state layer re-applies it on top of `prev` instead of `curr`, so the
//! batch is never counted twice.
//!
//! ## Resolution table
//!
//! ```text
//! batch_txid          base value     resulting prev
//! ----------------    -----------    --------------
//! None / > curr_txid  curr           curr
//! == curr_txid        prev           prev
//! < curr_txid         StaleTransaction error
//! ```

use crate::error::StateError;
use std::cmp::Ordering;

/// A payload with its current transaction id and its previous version
///
/// ## Invariants
///
/// - `curr` is the result of applying transaction `curr_txid`
/// - `prev` is the value before `curr_txid` was applied
/// - `prev == None` means `curr_txid` was the first transaction ever applied
///   to this key. It is a valid state, not missing data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueValue<T> {
    /// Transaction that produced `curr`
    pub curr_txid: i64,
    /// Current payload
    pub curr: T,
    /// Payload before `curr_txid`, absent for the first transaction
    pub prev: Option<T>,
}

impl<T> OpaqueValue<T> {
    /// Create an opaque value with an explicit previous payload
    pub fn new(curr_txid: i64, curr: T, prev: Option<T>) -> Self {
        OpaqueValue {
            curr_txid,
            curr,
            prev,
        }
    }

    /// Create the value written by the first transaction on a key
    pub fn first(curr_txid: i64, curr: T) -> Self {
        Self::new(curr_txid, curr, None)
    }

    /// Get the current transaction id
    #[inline]
    pub fn curr_txid(&self) -> i64 {
        self.curr_txid
    }

    /// Get a reference to the current payload
    #[inline]
    pub fn curr(&self) -> &T {
        &self.curr
    }

    /// Get a reference to the previous payload, if any
    #[inline]
    pub fn prev(&self) -> Option<&T> {
        self.prev.as_ref()
    }

    /// Resolve the payload a batch should build on.
    ///
    /// Returns `curr` for a new batch (or when no batch id is known), `prev`
    /// for a retry of the batch that produced `curr`.
    ///
    /// # Errors
    ///
    /// Returns `StateError::StaleTransaction` if `batch_txid` is older than
    /// `curr_txid`.
    pub fn get(&self, batch_txid: Option<i64>) -> Result<Option<&T>, StateError> {
        match self.order(batch_txid)? {
            Ordering::Greater => Ok(Some(&self.curr)),
            _ => Ok(self.prev.as_ref()),
        }
    }

    fn order(&self, batch_txid: Option<i64>) -> Result<Ordering, StateError> {
        match batch_txid {
            None => Ok(Ordering::Greater),
            Some(txid) if txid < self.curr_txid => Err(StateError::StaleTransaction {
                batch_txid: txid,
                curr_txid: self.curr_txid,
            }),
            Some(txid) => Ok(txid.cmp(&self.curr_txid)),
        }
    }
}

impl<T: Clone> OpaqueValue<T> {
    /// Produce the value stored after applying `batch_txid`.
    ///
    /// A new batch moves `curr` into `prev`; a retried batch keeps the
    /// existing `prev` so the retry replaces, rather than stacks on, its own
    /// earlier result.
    ///
    /// # Errors
    ///
    /// Returns `StateError::StaleTransaction` if `batch_txid` is older than
    /// `curr_txid`.
    pub fn update(&self, batch_txid: Option<i64>, new_val: T) -> Result<Self, StateError> {
        let prev = match self.order(batch_txid)? {
            Ordering::Greater => Some(self.curr.clone()),
            _ => self.prev.clone(),
        };
        Ok(OpaqueValue {
            curr_txid: batch_txid.unwrap_or(self.curr_txid),
            curr: new_val,
            prev,
        })
    }
}
