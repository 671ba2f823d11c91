//! Processing-guarantee enumeration
//!
//! Every state store is configured for exactly one guarantee, and each
//! guarantee is served by exactly one codec.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The processing guarantee a state store provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateType {
    /// Bare payloads, no version metadata
    NonTransactional,
    /// Payloads tagged with the producing transaction id
    Transactional,
    /// Current and previous payloads with the current transaction id
    #[default]
    Opaque,
}

impl StateType {
    /// All state types
    pub const ALL: [StateType; 3] = [
        StateType::NonTransactional,
        StateType::Transactional,
        StateType::Opaque,
    ];

    /// Identifier of the codec that persists values for this state type
    pub const fn codec_id(&self) -> &'static str {
        match self {
            StateType::NonTransactional => "plain",
            StateType::Transactional => "transactional",
            StateType::Opaque => "opaque",
        }
    }

    /// Check if values carry transaction metadata
    #[inline]
    pub const fn is_versioned(&self) -> bool {
        !matches!(self, StateType::NonTransactional)
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateType::NonTransactional => write!(f, "non_transactional"),
            StateType::Transactional => write!(f, "transactional"),
            StateType::Opaque => write!(f, "opaque"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_ids_are_distinct() {
        let ids: std::collections::HashSet<_> =
            StateType::ALL.iter().map(|t| t.codec_id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_is_versioned() {
        assert!(!StateType::NonTransactional.is_versioned());
        assert!(StateType::Transactional.is_versioned());
        assert!(StateType::Opaque.is_versioned());
    }

    #[test]
    fn test_serde_names_match_display() {
        for state_type in StateType::ALL {
            let json = serde_json::to_string(&state_type).unwrap();
            assert_eq!(json, format!("\"{}\"", state_type));
            let back: StateType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state_type);
        }
    }
}
