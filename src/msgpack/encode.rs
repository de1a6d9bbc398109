//! MessagePack encoding: `Value` → bytes.

use bytes::{BufMut, Bytes, BytesMut};

use super::marker;
use crate::error::MsgPackError;
use crate::types::{Value, ValueMap};

/// Encodes a `Value` into the buffer using MessagePack format.
///
/// Fails with `LengthExceeded` if a string, array, or map is larger than the
/// wire format's 2^32 - 1 ceiling; the input is never mutated.
pub fn encode_value(buf: &mut BytesMut, value: &Value) -> Result<(), MsgPackError> {
    match value {
        Value::Nil => {
            encode_nil(buf);
            Ok(())
        }
        Value::Boolean(b) => {
            encode_bool(buf, *b);
            Ok(())
        }
        Value::Float(f) => {
            encode_float64(buf, *f);
            Ok(())
        }
        Value::String(s) => encode_string(buf, s),
        Value::Array(items) => encode_array(buf, items),
        Value::Map(map) => encode_map(buf, map),
    }
}

/// Encodes a `Value` into a freshly allocated buffer.
pub fn encode(value: &Value) -> Result<Bytes, MsgPackError> {
    let mut buf = BytesMut::new();
    encode_value(&mut buf, value)?;
    Ok(buf.freeze())
}

pub fn encode_nil(buf: &mut BytesMut) {
    buf.put_u8(marker::NIL);
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(if value { marker::TRUE } else { marker::FALSE });
}

pub fn encode_float64(buf: &mut BytesMut, value: f64) {
    buf.put_u8(marker::FLOAT_64);
    buf.put_f64(value);
}

/// Encodes a string (size = byte length, not char count).
pub fn encode_string(buf: &mut BytesMut, value: &str) -> Result<(), MsgPackError> {
    encode_string_header(buf, value.len())?;
    buf.put_slice(value.as_bytes());
    Ok(())
}

fn encode_string_header(buf: &mut BytesMut, len: usize) -> Result<(), MsgPackError> {
    if len <= 31 {
        buf.put_u8(marker::FIXSTR_LOW | len as u8);
    } else if len <= marker::MAX_8BIT {
        buf.put_u8(marker::STR_8);
        buf.put_u8(len as u8);
    } else if len <= marker::MAX_16BIT {
        buf.put_u8(marker::STR_16);
        buf.put_u16(len as u16);
    } else if len as u64 <= marker::MAX_32BIT {
        buf.put_u8(marker::STR_32);
        buf.put_u32(len as u32);
    } else {
        return Err(MsgPackError::LengthExceeded("string"));
    }
    Ok(())
}

pub fn encode_array(buf: &mut BytesMut, items: &[Value]) -> Result<(), MsgPackError> {
    encode_array_header(buf, items.len())?;
    for item in items {
        encode_value(buf, item)?;
    }
    Ok(())
}

fn encode_array_header(buf: &mut BytesMut, len: usize) -> Result<(), MsgPackError> {
    if len <= 15 {
        buf.put_u8(marker::FIXARRAY_LOW | len as u8);
    } else if len <= marker::MAX_16BIT {
        buf.put_u8(marker::ARRAY_16);
        buf.put_u16(len as u16);
    } else if len as u64 <= marker::MAX_32BIT {
        buf.put_u8(marker::ARRAY_32);
        buf.put_u32(len as u32);
    } else {
        return Err(MsgPackError::LengthExceeded("array"));
    }
    Ok(())
}

/// Encodes a map: each pair is the key's string encoding immediately
/// followed by the value's encoding, in the map's iteration order.
pub fn encode_map(buf: &mut BytesMut, map: &ValueMap) -> Result<(), MsgPackError> {
    encode_map_header(buf, map.len())?;
    for (key, value) in map {
        encode_string(buf, key)?;
        encode_value(buf, value)?;
    }
    Ok(())
}

fn encode_map_header(buf: &mut BytesMut, len: usize) -> Result<(), MsgPackError> {
    if len <= 15 {
        buf.put_u8(marker::FIXMAP_LOW | len as u8);
    } else if len <= marker::MAX_16BIT {
        buf.put_u8(marker::MAP_16);
        buf.put_u16(len as u16);
    } else if len as u64 <= marker::MAX_32BIT {
        buf.put_u8(marker::MAP_32);
        buf.put_u32(len as u32);
    } else {
        return Err(MsgPackError::LengthExceeded("map"));
    }
    Ok(())
}
