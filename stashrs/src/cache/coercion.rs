//! Rules for combining a stored value with an increment delta or an
//! append/prepend operand.
//!
//! The rules come in two flavours with identical results: one works on
//! typed [`Value`]s, the other directly on serialized bytes tagged with a
//! [`ValueKind`]. Numbers are concatenated as digit strings and re-parsed,
//! never added: `12` appended with `34` is `1234`.

use super::error::{CacheError, Result};
use super::value::{parse_float, parse_integer, Value, ValueKind};
use bytes::{Bytes, BytesMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Append,
    Prepend,
}

/// Result of an increment: the value to store and the number to hand back.
#[derive(Debug, PartialEq)]
pub struct Delta<T> {
    pub stored: T,
    pub number: i64,
}

pub fn apply_delta(current: &Value, delta: i64) -> Result<Delta<Value>> {
    if current.is_falsy() {
        return Err(CacheError::NotFound);
    }
    match current {
        Value::Text(text) => {
            let number = add(parse_integer(text.as_bytes()), delta)?;
            Ok(Delta {
                stored: Value::Text(number.to_string()),
                number,
            })
        }
        Value::Integer(value) => {
            let number = add(Some(*value), delta)?;
            Ok(Delta {
                stored: Value::Integer(number),
                number,
            })
        }
        Value::Float(_) | Value::Opaque(_) => Err(CacheError::ArithOnNonNumeric),
    }
}

pub fn concat(current: &Value, operand: &Value, position: Position) -> Result<Value> {
    if current.is_falsy() {
        return Err(CacheError::ItemNotStored);
    }
    let kind = current.kind();
    if kind == ValueKind::Opaque {
        return Err(CacheError::ItemNotStored);
    }
    let current_text = current.to_text();
    let operand_text = operand.to_text();
    let mut joined = String::with_capacity(current_text.len() + operand_text.len());
    match position {
        Position::Append => {
            joined.push_str(&current_text);
            joined.push_str(&operand_text);
        }
        Position::Prepend => {
            joined.push_str(&operand_text);
            joined.push_str(&current_text);
        }
    }
    match kind {
        ValueKind::Text => Ok(Value::Text(joined)),
        _ => kind
            .parse(joined.as_bytes())
            .ok_or(CacheError::ArithOnNonNumeric),
    }
}

pub fn apply_delta_serialized(kind: ValueKind, current: &[u8], delta: i64) -> Result<Delta<Bytes>> {
    if is_falsy_serialized(kind, current) {
        return Err(CacheError::NotFound);
    }
    match kind {
        ValueKind::Text | ValueKind::Integer => {
            let number = add(parse_integer(current), delta)?;
            Ok(Delta {
                stored: Bytes::from(number.to_string()),
                number,
            })
        }
        ValueKind::Float | ValueKind::Opaque => Err(CacheError::ArithOnNonNumeric),
    }
}

pub fn concat_serialized(
    kind: ValueKind,
    current: &[u8],
    operand: &Value,
    position: Position,
) -> Result<Bytes> {
    if kind == ValueKind::Opaque || is_falsy_serialized(kind, current) {
        return Err(CacheError::ItemNotStored);
    }
    // text form, so invalid UTF-8 is replaced exactly as in `concat`
    let operand = operand.to_text();
    let operand = operand.as_bytes();
    let mut joined = BytesMut::with_capacity(current.len() + operand.len());
    match position {
        Position::Append => {
            joined.extend_from_slice(current);
            joined.extend_from_slice(operand);
        }
        Position::Prepend => {
            joined.extend_from_slice(operand);
            joined.extend_from_slice(current);
        }
    }
    match kind {
        ValueKind::Text => Ok(joined.freeze()),
        // numbers are stored in canonical form so later splices see clean digits
        _ => kind
            .parse(&joined)
            .map(|value| value.to_bytes())
            .ok_or(CacheError::ArithOnNonNumeric),
    }
}

fn is_falsy_serialized(kind: ValueKind, bytes: &[u8]) -> bool {
    match kind {
        ValueKind::Text | ValueKind::Opaque => bytes.is_empty(),
        ValueKind::Integer => parse_integer(bytes) == Some(0),
        ValueKind::Float => parse_float(bytes) == Some(0.0),
    }
}

fn add(value: Option<i64>, delta: i64) -> Result<i64> {
    value
        .and_then(|value| value.checked_add(delta))
        .ok_or(CacheError::ArithOnNonNumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn serialized_delta(value: &Value, delta: i64) -> Result<Value> {
        apply_delta_serialized(value.kind(), &value.to_bytes(), delta).map(|result| {
            value
                .kind()
                .parse(&result.stored)
                .expect("stored bytes should parse")
        })
    }

    fn serialized_concat(value: &Value, operand: &Value, position: Position) -> Result<Value> {
        concat_serialized(value.kind(), &value.to_bytes(), operand, position)
            .map(|bytes| value.kind().parse(&bytes).expect("stored bytes should parse"))
    }

    #[test_case(Value::from("1"), 1, Ok(Value::from("2")) ; "text_counter")]
    #[test_case(Value::from(1), 5, Ok(Value::from(6)) ; "integer_counter")]
    #[test_case(Value::from(6), -5, Ok(Value::from(1)) ; "integer_decrement")]
    #[test_case(Value::from("1"), -3, Ok(Value::from("-2")) ; "signed_result")]
    #[test_case(Value::from("0"), 1, Ok(Value::from("1")) ; "zero_text_is_not_falsy")]
    #[test_case(Value::from(0), 1, Err(CacheError::NotFound) ; "zero_integer_is_falsy")]
    #[test_case(Value::from(""), 1, Err(CacheError::NotFound) ; "empty_text_is_falsy")]
    #[test_case(Value::from("one"), 1, Err(CacheError::ArithOnNonNumeric) ; "word")]
    #[test_case(Value::from(1.5), 1, Err(CacheError::ArithOnNonNumeric) ; "float")]
    #[test_case(Value::from(vec![1u8]), 1, Err(CacheError::ArithOnNonNumeric) ; "opaque")]
    #[test_case(Value::from(i64::MAX), 1, Err(CacheError::ArithOnNonNumeric) ; "overflow")]
    fn test_delta_variants_agree(value: Value, delta: i64, expected: Result<Value>) {
        let typed = apply_delta(&value, delta).map(|result| result.stored);
        assert_eq!(typed, expected);
        assert_eq!(serialized_delta(&value, delta), expected);
    }

    #[test]
    fn test_delta_returns_number() {
        let result = apply_delta(&Value::from("41"), 1).unwrap();
        assert_eq!(result.number, 42);
        let result = apply_delta_serialized(ValueKind::Integer, b"41", 1).unwrap();
        assert_eq!(result.number, 42);
        assert_eq!(&result.stored[..], b"42");
    }

    #[test_case(Value::from("bar"), Value::from("baz"), Position::Append, Ok(Value::from("barbaz")) ; "text_append")]
    #[test_case(Value::from("bar"), Value::from("baz"), Position::Prepend, Ok(Value::from("bazbar")) ; "text_prepend")]
    #[test_case(Value::from(12), Value::from(34), Position::Append, Ok(Value::from(1234)) ; "int_append_int")]
    #[test_case(Value::from(12), Value::from("34"), Position::Prepend, Ok(Value::from(3412)) ; "int_prepend_text")]
    #[test_case(Value::from("12"), Value::from(34), Position::Append, Ok(Value::from("1234")) ; "text_append_int")]
    #[test_case(Value::from(12.34), Value::from("45"), Position::Append, Ok(Value::from(12.3445)) ; "float_append")]
    #[test_case(Value::from(12.34), Value::from(45), Position::Prepend, Ok(Value::from(4512.34)) ; "float_prepend")]
    #[test_case(Value::from(12), Value::from("cows"), Position::Append, Err(CacheError::ArithOnNonNumeric) ; "int_append_word")]
    #[test_case(Value::from(12.34), Value::from(0.0045), Position::Append, Err(CacheError::ArithOnNonNumeric) ; "float_append_float")]
    #[test_case(Value::from("bar"), Value::from(vec![0xc3u8, 0x28]), Position::Append, Ok(Value::from("bar\u{FFFD}(")) ; "text_append_invalid_utf8")]
    #[test_case(Value::from("bar"), Value::from(vec![0xffu8]), Position::Prepend, Ok(Value::from("\u{FFFD}bar")) ; "text_prepend_invalid_utf8")]
    #[test_case(Value::from(vec![1u8]), Value::from("x"), Position::Append, Err(CacheError::ItemNotStored) ; "opaque_target")]
    #[test_case(Value::from(""), Value::from("x"), Position::Append, Err(CacheError::ItemNotStored) ; "empty_target")]
    #[test_case(Value::from(0), Value::from(1), Position::Append, Err(CacheError::ItemNotStored) ; "zero_target")]
    fn test_concat_variants_agree(
        value: Value,
        operand: Value,
        position: Position,
        expected: Result<Value>,
    ) {
        assert_eq!(concat(&value, &operand, position), expected);
        assert_eq!(serialized_concat(&value, &operand, position), expected);
    }

    #[test]
    fn test_serialized_numbers_are_stored_canonically() {
        let operand = Value::from("34 ");
        let bytes =
            concat_serialized(ValueKind::Integer, b"12", &operand, Position::Append).unwrap();
        assert_eq!(&bytes[..], b"1234");
        let operand = Value::from(5);
        let bytes =
            concat_serialized(ValueKind::Integer, &bytes, &operand, Position::Append).unwrap();
        assert_eq!(&bytes[..], b"12345");
    }
}
