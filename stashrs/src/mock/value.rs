use crate::cache::value::Value;
use bytes::{BufMut, BytesMut};

pub fn text(val: &str) -> Value {
    Value::Text(val.to_owned())
}

pub fn opaque(val: &[u8]) -> Value {
    let mut value = BytesMut::with_capacity(val.len());
    value.put_slice(val);
    Value::Opaque(value.freeze())
}
