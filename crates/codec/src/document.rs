//! Document encoding helpers shared by the codecs.
//!
//! Versioned values are stored as a top-level JSON object whose fields hold
//! the version metadata and nested payload documents. Payloads are nested as
//! structured sub-documents, never as embedded byte strings.

use crate::finite::check_finite;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tidal_core::{CodecError, CodecResult};
use tracing::trace;

/// Serialize a payload into a nested document value.
///
/// Non-finite floats are rejected rather than written as `null`.
pub(crate) fn nested<S: Serialize + ?Sized>(value: &S, codec_id: &str) -> CodecResult<Value> {
    check_finite(value).map_err(|e| CodecError::encode(e.to_string(), codec_id))?;
    serde_json::to_value(value).map_err(|e| CodecError::encode(e.to_string(), codec_id))
}

/// Serialize a value into document bytes.
///
/// Non-finite floats are rejected rather than written as `null`.
pub(crate) fn to_bytes<S: Serialize + ?Sized>(value: &S, codec_id: &str) -> CodecResult<Vec<u8>> {
    check_finite(value).map_err(|e| CodecError::encode(e.to_string(), codec_id))?;
    let bytes =
        serde_json::to_vec(value).map_err(|e| CodecError::encode(e.to_string(), codec_id))?;
    trace!(target: "tidal::codec", codec = codec_id, bytes = bytes.len(), "Encoded document");
    Ok(bytes)
}

/// Deserialize document bytes straight into a payload.
pub(crate) fn from_bytes<T: DeserializeOwned>(bytes: &[u8], codec_id: &str) -> CodecResult<T> {
    let value = serde_json::from_slice(bytes)
        .map_err(|e| CodecError::decode(e.to_string(), codec_id, bytes.len()))?;
    trace!(target: "tidal::codec", codec = codec_id, bytes = bytes.len(), "Decoded document");
    Ok(value)
}

/// Short JSON type name used in error messages
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed top-level document whose fields are consumed one by one.
///
/// Fields are looked up by name, so the order in which they were written
/// does not matter. Unknown fields are ignored.
pub(crate) struct Document<'a> {
    fields: Map<String, Value>,
    codec_id: &'a str,
    data_len: usize,
}

impl<'a> Document<'a> {
    /// Parse bytes as a top-level JSON object.
    pub(crate) fn parse(bytes: &[u8], codec_id: &'a str) -> CodecResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| CodecError::decode(e.to_string(), codec_id, bytes.len()))?;
        match value {
            Value::Object(fields) => {
                trace!(
                    target: "tidal::codec",
                    codec = codec_id,
                    bytes = bytes.len(),
                    fields = fields.len(),
                    "Parsed document"
                );
                Ok(Document {
                    fields,
                    codec_id,
                    data_len: bytes.len(),
                })
            }
            other => Err(CodecError::decode(
                format!("expected a document object, found {}", kind(&other)),
                codec_id,
                bytes.len(),
            )),
        }
    }

    /// Start a document for encoding.
    pub(crate) fn builder(codec_id: &'a str) -> Self {
        Document {
            fields: Map::new(),
            codec_id,
            data_len: 0,
        }
    }

    /// Set an integer field.
    pub(crate) fn with_int(mut self, field: &str, value: i64) -> Self {
        self.fields.insert(field.to_string(), Value::from(value));
        self
    }

    /// Set a required nested payload field.
    pub(crate) fn with_nested<S: Serialize>(mut self, field: &str, value: &S) -> CodecResult<Self> {
        let value = nested(value, self.codec_id)?;
        self.fields.insert(field.to_string(), value);
        Ok(self)
    }

    /// Set a nullable nested payload field. `None` is written as an explicit
    /// null.
    ///
    /// A present payload that itself serializes to null (such as
    /// `Some(None::<U>)`) is rejected: it would decode as absent.
    pub(crate) fn with_optional_nested<S: Serialize>(
        mut self,
        field: &str,
        value: Option<&S>,
    ) -> CodecResult<Self> {
        let value = match value {
            Some(v) => match nested(v, self.codec_id)? {
                Value::Null => {
                    return Err(CodecError::encode(
                        format!(
                            "field `{}` serializes to null and would decode as absent",
                            field
                        ),
                        self.codec_id,
                    ))
                }
                value => value,
            },
            None => Value::Null,
        };
        self.fields.insert(field.to_string(), value);
        Ok(self)
    }

    /// Serialize the document into bytes.
    pub(crate) fn into_bytes(self) -> CodecResult<Vec<u8>> {
        to_bytes(&self.fields, self.codec_id)
    }

    fn error(&self, detail: String) -> CodecError {
        CodecError::decode(detail, self.codec_id, self.data_len)
    }

    fn missing(&self, field: &str) -> CodecError {
        self.error(format!("missing required field `{}`", field))
    }

    /// Take a required transaction id field.
    ///
    /// The field must be a JSON integer that fits in an `i64`. Floats,
    /// strings and out-of-range integers are rejected, never defaulted.
    pub(crate) fn take_txid(&mut self, field: &str) -> CodecResult<i64> {
        match self.fields.remove(field) {
            None => Err(self.missing(field)),
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
                self.error(format!("field `{}` is not a 64-bit integer: {}", field, n))
            }),
            Some(other) => Err(self.error(format!(
                "field `{}` must be an integer, found {}",
                field,
                kind(&other)
            ))),
        }
    }

    /// Take a required nested payload field.
    pub(crate) fn take_nested<T: DeserializeOwned>(&mut self, field: &str) -> CodecResult<T> {
        match self.fields.remove(field) {
            None => Err(self.missing(field)),
            Some(value) => self.decode_nested(field, value),
        }
    }

    /// Take a nested payload field that may be null.
    ///
    /// A null value and a missing field both decode to `None`.
    pub(crate) fn take_optional_nested<T: DeserializeOwned>(
        &mut self,
        field: &str,
    ) -> CodecResult<Option<T>> {
        match self.fields.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.decode_nested(field, value).map(Some),
        }
    }

    fn decode_nested<T: DeserializeOwned>(&self, field: &str, value: Value) -> CodecResult<T> {
        serde_json::from_value(value)
            .map_err(|e| self.error(format!("field `{}`: {}", field, e)))
    }
}
