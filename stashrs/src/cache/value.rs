use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;
use std::str;

/// Discriminant of a stored value. For serialized records it is also
/// the recipe used to rebuild the value from its bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Opaque,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Opaque => "opaque",
        }
    }

    /// Rebuilds a value of this kind from its serialized form.
    /// Returns None when the bytes are not a valid value of this kind.
    pub fn parse(&self, bytes: &[u8]) -> Option<Value> {
        match self {
            ValueKind::Text => str::from_utf8(bytes)
                .ok()
                .map(|text| Value::Text(text.to_owned())),
            ValueKind::Integer => parse_integer(bytes).map(Value::Integer),
            ValueKind::Float => parse_float(bytes).map(Value::Float),
            ValueKind::Opaque => Some(Value::Opaque(Bytes::copy_from_slice(bytes))),
        }
    }
}

/// A cached value. The store keeps the caller's type so that numeric
/// values come back as numbers and text comes back as text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Compound or pre-serialized data the store never interprets.
    Opaque(Bytes),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Empty text, zero and empty payloads count as "nothing stored" for
    /// increment, append and prepend.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Text(text) => text.is_empty(),
            Value::Integer(value) => *value == 0,
            Value::Float(value) => *value == 0.0,
            Value::Opaque(bytes) => bytes.is_empty(),
        }
    }

    /// Decimal/textual form used when values are concatenated.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Text(text) => Cow::Borrowed(text.as_str()),
            Value::Integer(value) => Cow::Owned(value.to_string()),
            Value::Float(value) => Cow::Owned(format_float(*value)),
            Value::Opaque(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Serialized form; `self.kind().parse(&self.to_bytes())` gives the value back.
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Value::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
            Value::Opaque(bytes) => bytes.clone(),
            other => Bytes::from(other.to_text().into_owned()),
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Text(text) => text.len(),
            Value::Opaque(bytes) => bytes.len(),
            other => other.to_text().len(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Bytes> {
        match self {
            Value::Opaque(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Opaque(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Opaque(Bytes::from(value))
    }
}

// Integral floats keep a trailing ".0" so that concatenation stays a float literal.
pub(crate) fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text + ".0"
    } else {
        text
    }
}

pub(crate) fn parse_integer(bytes: &[u8]) -> Option<i64> {
    str::from_utf8(bytes).ok()?.trim().parse::<i64>().ok()
}

pub(crate) fn parse_float(bytes: &[u8]) -> Option<f64> {
    str::from_utf8(bytes).ok()?.trim().parse::<f64>().ok()
}
