use crate::cache::coercion::{self, Delta, Position};
use crate::cache::error::Result;
use crate::cache::value::{Value, ValueKind};
use bytes::Bytes;

/// How a store engine keeps values in memory.
/// Both codecs apply the same coercion rules, so engines are interchangeable.
pub trait ValueCodec: Send + Sync + 'static {
    type Stored: Send + Sync;

    fn encode(value: Value) -> Self::Stored;

    fn decode(stored: &Self::Stored) -> Value;

    fn apply_delta(stored: &Self::Stored, delta: i64) -> Result<Delta<Self::Stored>>;

    fn concat(stored: &Self::Stored, operand: &Value, position: Position) -> Result<Self::Stored>;
}

/// Keeps the caller's value as is
pub struct TypedCodec;

impl ValueCodec for TypedCodec {
    type Stored = Value;

    fn encode(value: Value) -> Value {
        value
    }

    fn decode(stored: &Value) -> Value {
        stored.clone()
    }

    fn apply_delta(stored: &Value, delta: i64) -> Result<Delta<Value>> {
        coercion::apply_delta(stored, delta)
    }

    fn concat(stored: &Value, operand: &Value, position: Position) -> Result<Value> {
        coercion::concat(stored, operand, position)
    }
}

/// Serialized value: raw bytes plus the kind needed to parse them back
#[derive(Clone, Debug, PartialEq)]
pub struct SerializedValue {
    pub(crate) kind: ValueKind,
    pub(crate) bytes: Bytes,
}

/// Keeps every value as bytes, the way a memcached server does
pub struct SerializedCodec;

impl ValueCodec for SerializedCodec {
    type Stored = SerializedValue;

    fn encode(value: Value) -> SerializedValue {
        SerializedValue {
            kind: value.kind(),
            bytes: value.to_bytes(),
        }
    }

    fn decode(stored: &SerializedValue) -> Value {
        // encode and the coercion rules only write bytes that parse back
        stored.kind.parse(&stored.bytes).unwrap_or_else(|| {
            warn!("Stored {} value does not parse, returning raw bytes", stored.kind.as_str());
            Value::Opaque(stored.bytes.clone())
        })
    }

    fn apply_delta(stored: &SerializedValue, delta: i64) -> Result<Delta<SerializedValue>> {
        coercion::apply_delta_serialized(stored.kind, &stored.bytes, delta).map(|result| Delta {
            stored: SerializedValue {
                kind: stored.kind,
                bytes: result.stored,
            },
            number: result.number,
        })
    }

    fn concat(
        stored: &SerializedValue,
        operand: &Value,
        position: Position,
    ) -> Result<SerializedValue> {
        coercion::concat_serialized(stored.kind, &stored.bytes, operand, position).map(|bytes| {
            SerializedValue {
                kind: stored.kind,
                bytes,
            }
        })
    }
}
