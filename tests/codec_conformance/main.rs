//! Codec conformance suite
//!
//! Checks every codec against the persisted-document contract:
//! - Round trip: `decode(encode(v)) == v`
//! - Transaction ids survive exactly, across the whole i64 range
//! - An absent `prev` stays absent; a present `prev` stays equal
//! - Documents missing a transaction id are rejected, never defaulted
//! - Documents written by other implementations stay decodable
//! - Values the document format cannot represent fail at encode time

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tidal::fields::{FIELD_CURR, FIELD_CURR_TXID, FIELD_PREV, FIELD_TXID, FIELD_VAL};
use tidal::{
    OpaqueValue, OpaqueValueCodec, PlainValueCodec, TransactionalValue, TransactionalValueCodec,
    ValueCodec,
};

// ============================================================================
// Payload types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    text: String,
    count: i64,
    tags: Vec<String>,
    score: Option<u32>,
    ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Text {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Count {
    count: u64,
}

fn record() -> impl Strategy<Value = Record> {
    (
        any::<String>(),
        any::<i64>(),
        prop::collection::vec(any::<String>(), 0..4),
        any::<Option<u32>>(),
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
    )
        .prop_map(|(text, count, tags, score, ratio)| Record {
            text,
            count,
            tags,
            score,
            ratio,
        })
}

/// Helper: parse encoded bytes as a JSON document
fn document(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

/// Helper: drop a top-level field and re-serialize
fn without_field(bytes: &[u8], field: &str) -> Vec<u8> {
    let mut doc = document(bytes);
    doc.as_object_mut().unwrap().remove(field);
    serde_json::to_vec(&doc).unwrap()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn transactional_hello_scenario() {
    let codec = TransactionalValueCodec::<Text>::new();
    let value = TransactionalValue::new(
        42,
        Text {
            text: "hello".to_string(),
        },
    );

    let bytes = codec.encode(&value).unwrap();
    let doc = document(&bytes);
    assert_eq!(doc[FIELD_TXID], 42);
    assert_eq!(doc[FIELD_VAL], json!({"text": "hello"}));

    assert_eq!(codec.decode(&bytes).unwrap(), value);
}

#[test]
fn opaque_first_transaction_scenario() {
    let codec = OpaqueValueCodec::<Count>::new();
    let value = OpaqueValue::first(1, Count { count: 5 });

    let decoded = codec.decode(&codec.encode(&value).unwrap()).unwrap();

    assert_eq!(decoded.curr_txid, 1);
    assert_eq!(decoded.curr, Count { count: 5 });
    assert!(decoded.prev.is_none());
}

#[test]
fn opaque_subsequent_transaction_scenario() {
    let codec = OpaqueValueCodec::<Count>::new();
    let value = OpaqueValue::new(2, Count { count: 8 }, Some(Count { count: 5 }));

    let bytes = codec.encode(&value).unwrap();
    assert_eq!(document(&bytes)[FIELD_PREV], json!({"count": 5}));
    assert_eq!(codec.decode(&bytes).unwrap(), value);
}

#[test]
fn stored_documents_from_other_writers_decode() {
    // Field order and whitespace as another writer might produce them
    let transactional = br#"{ "val" : { "text" : "hello" } , "txid" : 42 }"#;
    let opaque = br#"{"prev":null,"curr":{"count":5},"currTxid":1}"#;

    assert_eq!(
        TransactionalValueCodec::<Text>::new()
            .decode(transactional)
            .unwrap(),
        TransactionalValue::new(
            42,
            Text {
                text: "hello".to_string()
            }
        )
    );
    assert_eq!(
        OpaqueValueCodec::<Count>::new().decode(opaque).unwrap(),
        OpaqueValue::first(1, Count { count: 5 })
    );
}

#[test]
fn missing_txid_is_rejected_not_defaulted() {
    let tcodec = TransactionalValueCodec::<Count>::new();
    let bytes = tcodec
        .encode(&TransactionalValue::new(0, Count { count: 1 }))
        .unwrap();
    assert!(tcodec
        .decode(&without_field(&bytes, FIELD_TXID))
        .unwrap_err()
        .is_decode());

    let ocodec = OpaqueValueCodec::<Count>::new();
    let bytes = ocodec
        .encode(&OpaqueValue::first(0, Count { count: 1 }))
        .unwrap();
    assert!(ocodec
        .decode(&without_field(&bytes, FIELD_CURR_TXID))
        .unwrap_err()
        .is_decode());
    assert!(ocodec
        .decode(&without_field(&bytes, FIELD_CURR))
        .unwrap_err()
        .is_decode());
}

#[test]
fn present_null_prev_is_not_an_error() {
    let codec = OpaqueValueCodec::<Count>::new();
    let decoded = codec
        .decode(br#"{"currTxid": 9, "curr": {"count": 2}, "prev": null}"#)
        .unwrap();
    assert_eq!(decoded.prev, None);
}

#[test]
fn non_finite_floats_rejected_at_encode() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(PlainValueCodec::<f64>::new().encode(&bad).unwrap_err().is_encode());
        assert!(TransactionalValueCodec::<f64>::new()
            .encode(&TransactionalValue::new(1, bad))
            .unwrap_err()
            .is_encode());

        let opaque = OpaqueValueCodec::<f64>::new();
        assert!(opaque
            .encode(&OpaqueValue::first(1, bad))
            .unwrap_err()
            .is_encode());
        assert!(opaque
            .encode(&OpaqueValue::new(2, 1.0, Some(bad)))
            .unwrap_err()
            .is_encode());
    }
}

#[test]
fn prev_serializing_to_null_rejected_at_encode() {
    let codec = OpaqueValueCodec::<Option<u32>>::new();
    let err = codec
        .encode(&OpaqueValue::new(2, Some(1), Some(None)))
        .unwrap_err();
    assert!(err.is_encode());

    // A null payload in `curr` is still representable.
    let value = OpaqueValue::new(2, None, Some(Some(1)));
    assert_eq!(codec.decode(&codec.encode(&value).unwrap()).unwrap(), value);
}

#[test]
fn codecs_shared_across_threads() {
    let codec = std::sync::Arc::new(OpaqueValueCodec::<Count>::new());

    let handles: Vec<_> = (0..8i64)
        .map(|t| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || {
                for i in 0..100u64 {
                    let value = OpaqueValue::new(t, Count { count: i }, Some(Count { count: t as u64 }));
                    let decoded = codec.decode(&codec.encode(&value).unwrap()).unwrap();
                    assert_eq!(decoded, value);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn plain_roundtrip(value in record()) {
        let codec = PlainValueCodec::<Record>::new();
        let decoded = codec.decode(&codec.encode(&value).unwrap()).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn transactional_roundtrip(txid in any::<i64>(), val in record()) {
        let codec = TransactionalValueCodec::<Record>::new();
        let value = TransactionalValue::new(txid, val);

        let bytes = codec.encode(&value).unwrap();
        prop_assert_eq!(document(&bytes)[FIELD_TXID].as_i64(), Some(txid));
        prop_assert_eq!(codec.decode(&bytes).unwrap(), value);
    }

    #[test]
    fn opaque_roundtrip(
        curr_txid in any::<i64>(),
        curr in record(),
        prev in prop::option::of(record()),
    ) {
        let codec = OpaqueValueCodec::<Record>::new();
        let value = OpaqueValue::new(curr_txid, curr, prev);

        let bytes = codec.encode(&value).unwrap();
        let doc = document(&bytes);
        prop_assert_eq!(doc[FIELD_CURR_TXID].as_i64(), Some(curr_txid));
        prop_assert_eq!(doc[FIELD_PREV].is_null(), value.prev.is_none());

        let decoded = codec.decode(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn opaque_update_chain_roundtrips(counts in prop::collection::vec(any::<u64>(), 1..8)) {
        let codec = OpaqueValueCodec::<Count>::new();
        let mut stored = codec
            .encode(&OpaqueValue::first(1, Count { count: counts[0] }))
            .unwrap();

        for (i, count) in counts.iter().enumerate().skip(1) {
            let current = codec.decode(&stored).unwrap();
            let next = current.update(Some(i as i64 + 1), Count { count: *count }).unwrap();
            stored = codec.encode(&next).unwrap();
        }

        let last = codec.decode(&stored).unwrap();
        prop_assert_eq!(last.curr_txid, counts.len() as i64);
        prop_assert_eq!(last.curr.count, counts[counts.len() - 1]);
        let expected_prev = counts.len().checked_sub(2).map(|i| Count { count: counts[i] });
        prop_assert_eq!(last.prev, expected_prev);
    }
}
