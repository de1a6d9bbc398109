//! MessagePack decoding: bytes → `Value`.
//!
//! Every decoder takes a fully buffered byte slice and returns the decoded
//! value together with the number of bytes it consumed. Typed decoders and
//! the strict [`decode_value`] dispatcher surface errors; the lenient
//! [`decode_any`] dispatcher never fails and reports undecodable input as
//! `(Value::Nil, 0)`.

use super::marker;
use crate::error::MsgPackError;
use crate::types::{Value, ValueMap};

/// Decodes a single `Value` from the buffer, returning it with the number of
/// bytes consumed.
///
/// The lead byte is classified against the marker predicates in a fixed
/// priority order (boolean, nil, string, float64, array, map); the ranges
/// are disjoint, so exactly one family can claim it. A lead byte outside the
/// six supported families is an `UnsupportedFormat` error, and an empty
/// buffer is an `InsufficientLength` error.
///
/// Container decoding recurses without a depth limit; pathologically nested
/// input can exhaust the call stack.
pub fn decode_value(data: &[u8]) -> Result<(Value, usize), MsgPackError> {
    let m = lead_byte(data)?;

    if marker::is_bool(m) {
        let (b, n) = decode_bool(data)?;
        Ok((Value::Boolean(b), n))
    } else if marker::is_nil(m) {
        let n = decode_nil(data)?;
        Ok((Value::Nil, n))
    } else if marker::is_fix_string(m)
        || marker::is_str8(m)
        || marker::is_str16(m)
        || marker::is_str32(m)
    {
        let (s, n) = decode_string(data)?;
        Ok((Value::String(s), n))
    } else if marker::is_float64(m) {
        let (f, n) = decode_float64(data)?;
        Ok((Value::Float(f), n))
    } else if marker::is_fixed_array(m) || marker::is_array16(m) || marker::is_array32(m) {
        let (items, n) = decode_array(data)?;
        Ok((Value::Array(items), n))
    } else if marker::is_fixed_map(m) || marker::is_map16(m) || marker::is_map32(m) {
        let (map, n) = decode_map(data)?;
        Ok((Value::Map(map), n))
    } else {
        Err(MsgPackError::UnsupportedFormat(m))
    }
}

/// Decodes a single `Value` leniently.
///
/// Runs the strict decoder and downgrades any failure to `(Value::Nil, 0)`,
/// so callers can treat "could not decode here" uniformly. Callers that need
/// error reporting should use [`decode_value`] instead.
pub fn decode_any(data: &[u8]) -> (Value, usize) {
    match decode_value(data) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::trace!(error = %e, "decode error downgraded to nil");
            (Value::Nil, 0)
        }
    }
}

/// Decodes a boolean sentinel; consumes 1 byte.
pub fn decode_bool(data: &[u8]) -> Result<(bool, usize), MsgPackError> {
    let m = lead_byte(data)?;
    if marker::is_bool(m) {
        Ok((m == marker::TRUE, 1))
    } else {
        Err(MsgPackError::UnsupportedFormat(m))
    }
}

/// Decodes the nil sentinel, returning the number of bytes consumed (always 1).
pub fn decode_nil(data: &[u8]) -> Result<usize, MsgPackError> {
    let m = lead_byte(data)?;
    if marker::is_nil(m) {
        Ok(1)
    } else {
        Err(MsgPackError::UnsupportedFormat(m))
    }
}

/// Decodes a float64: the marker byte followed by 8 bytes of big-endian
/// IEEE 754 bits; consumes 9 bytes.
pub fn decode_float64(data: &[u8]) -> Result<(f64, usize), MsgPackError> {
    let m = lead_byte(data)?;
    if !marker::is_float64(m) {
        return Err(MsgPackError::UnsupportedFormat(m));
    }
    ensure_len(data, 9)?;
    let bits = u64::from_be_bytes([
        data[1], data[2], data[3], data[4], data[5], data[6], data[7], data[8],
    ]);
    Ok((f64::from_bits(bits), 9))
}

/// Decodes a string in any of the four width forms; consumes the header plus
/// the payload byte length.
///
/// Payload bytes are copied through `String::from_utf8_lossy`; malformed
/// UTF-8 does not fail the decode.
pub fn decode_string(data: &[u8]) -> Result<(String, usize), MsgPackError> {
    let m = lead_byte(data)?;
    let (len, header) = if marker::is_fix_string(m) {
        ((m & 0x1F) as usize, 1)
    } else if marker::is_str8(m) {
        ensure_len(data, 2)?;
        (data[1] as usize, 2)
    } else if marker::is_str16(m) {
        ensure_len(data, 3)?;
        (u16::from_be_bytes([data[1], data[2]]) as usize, 3)
    } else if marker::is_str32(m) {
        ensure_len(data, 5)?;
        (u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize, 5)
    } else {
        return Err(MsgPackError::UnsupportedFormat(m));
    };

    ensure_len(data, header + len)?;
    let s = String::from_utf8_lossy(&data[header..header + len]).into_owned();
    Ok((s, header + len))
}

/// Decodes an array in any of its three width forms; consumes the header
/// plus the sum of the element encodings.
///
/// Element bytes are verified incrementally as each element decodes, and any
/// element error propagates.
pub fn decode_array(data: &[u8]) -> Result<(Vec<Value>, usize), MsgPackError> {
    let m = lead_byte(data)?;
    let (len, mut n) = if marker::is_fixed_array(m) {
        ((m & 0x0F) as usize, 1)
    } else if marker::is_array16(m) {
        ensure_len(data, 3)?;
        (u16::from_be_bytes([data[1], data[2]]) as usize, 3)
    } else if marker::is_array32(m) {
        ensure_len(data, 5)?;
        (u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize, 5)
    } else {
        return Err(MsgPackError::UnsupportedFormat(m));
    };

    // Each element occupies at least one byte of the remaining input.
    let mut items = Vec::with_capacity(len.min(data.len() - n));
    for _ in 0..len {
        let (item, consumed) = decode_value(&data[n..])?;
        items.push(item);
        n += consumed;
    }

    Ok((items, n))
}

/// Decodes a map in any of its three width forms; consumes the header plus
/// the sum of the key and value encodings.
///
/// Keys must decode as strings; a key position holding any other form fails
/// with `MalformedKey`. Duplicate keys are last-write-wins.
pub fn decode_map(data: &[u8]) -> Result<(ValueMap, usize), MsgPackError> {
    let m = lead_byte(data)?;
    let (len, mut n) = if marker::is_fixed_map(m) {
        ((m & 0x0F) as usize, 1)
    } else if marker::is_map16(m) {
        ensure_len(data, 3)?;
        (u16::from_be_bytes([data[1], data[2]]) as usize, 3)
    } else if marker::is_map32(m) {
        ensure_len(data, 5)?;
        (u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize, 5)
    } else {
        return Err(MsgPackError::UnsupportedFormat(m));
    };

    let mut map = ValueMap::with_capacity(len.min(data.len() - n));
    for _ in 0..len {
        let (key, consumed) = match decode_string(&data[n..]) {
            Ok(decoded) => decoded,
            Err(MsgPackError::UnsupportedFormat(b)) => {
                return Err(MsgPackError::MalformedKey(b));
            }
            Err(e) => return Err(e),
        };
        n += consumed;
        let (value, consumed) = decode_value(&data[n..])?;
        n += consumed;
        map.insert(key, value);
    }

    Ok((map, n))
}

fn lead_byte(data: &[u8]) -> Result<u8, MsgPackError> {
    data.first().copied().ok_or(MsgPackError::InsufficientLength {
        needed: 1,
        remaining: 0,
    })
}

fn ensure_len(data: &[u8], needed: usize) -> Result<(), MsgPackError> {
    if data.len() < needed {
        Err(MsgPackError::InsufficientLength {
            needed,
            remaining: data.len(),
        })
    } else {
        Ok(())
    }
}
