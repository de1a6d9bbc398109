//! Hex-string convenience layer over the binary codec.
//!
//! These entry points carry MessagePack data as hexadecimal text instead of
//! raw bytes. They are a transform on top of the binary codec, not part of
//! the wire format itself.

use crate::error::MsgPackError;
use crate::msgpack::{decode, encode};
use crate::types::Value;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decodes a hex string into a `Value`.
///
/// Hex parse failures are reported as `InvalidHex`. The binary decode runs
/// through the lenient dispatcher, so codec errors come back as
/// `Value::Nil`; callers that need strict error reporting should use
/// [`decode_hex_strict`] or the binary decoder directly.
pub fn decode_hex(input: &str) -> Result<Value, MsgPackError> {
    let data = parse_hex(input)?;
    let (value, _) = decode::decode_any(&data);
    Ok(value)
}

/// Decodes a hex string into a `Value`, surfacing codec errors.
pub fn decode_hex_strict(input: &str) -> Result<(Value, usize), MsgPackError> {
    let data = parse_hex(input)?;
    decode::decode_value(&data)
}

/// Encodes a `Value` as lowercase hex text.
pub fn encode_hex(value: &Value) -> Result<String, MsgPackError> {
    let data = encode::encode(value)?;
    let mut out = String::with_capacity(data.len() * 2);
    for &b in data.iter() {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
    }
    Ok(out)
}

fn parse_hex(input: &str) -> Result<Vec<u8>, MsgPackError> {
    if input.len() % 2 != 0 {
        return Err(MsgPackError::InvalidHex("odd number of digits".into()));
    }
    let mut out = Vec::with_capacity(input.len() / 2);
    for pair in input.as_bytes().chunks_exact(2) {
        out.push((hex_digit(pair[0])? << 4) | hex_digit(pair[1])?);
    }
    Ok(out)
}

fn hex_digit(c: u8) -> Result<u8, MsgPackError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(MsgPackError::InvalidHex(format!(
            "invalid digit {:?}",
            c as char
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueMap;

    #[test]
    fn decode_hex_scalars() {
        assert_eq!(decode_hex("c3").unwrap(), Value::Boolean(true));
        assert_eq!(decode_hex("c2").unwrap(), Value::Boolean(false));
        assert_eq!(decode_hex("c0").unwrap(), Value::Nil);
        assert_eq!(decode_hex("cb3ff0000000000000").unwrap(), Value::Float(1.0));
        assert_eq!(decode_hex("a3616263").unwrap(), Value::String("abc".into()));
    }

    #[test]
    fn decode_hex_map() {
        assert_eq!(
            decode_hex("81a161cb3ff0000000000000").unwrap(),
            Value::Map(ValueMap::from([("a".to_string(), Value::Float(1.0))]))
        );
    }

    #[test]
    fn uppercase_digits_accepted() {
        assert_eq!(decode_hex("C3").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn malformed_hex_is_reported() {
        assert!(matches!(
            decode_hex("c").unwrap_err(),
            MsgPackError::InvalidHex(_)
        ));
        assert!(matches!(
            decode_hex("zz").unwrap_err(),
            MsgPackError::InvalidHex(_)
        ));
    }

    #[test]
    fn codec_errors_are_swallowed_leniently() {
        // 0xCC is an unsupported marker; the lenient path yields nil.
        assert_eq!(decode_hex("cc2a").unwrap(), Value::Nil);
        // Truncated float payload likewise.
        assert_eq!(decode_hex("cb3ff0").unwrap(), Value::Nil);
    }

    #[test]
    fn strict_variant_surfaces_codec_errors() {
        assert!(matches!(
            decode_hex_strict("cc2a").unwrap_err(),
            MsgPackError::UnsupportedFormat(0xCC)
        ));
        assert!(matches!(
            decode_hex_strict("cb3ff0").unwrap_err(),
            MsgPackError::InsufficientLength { .. }
        ));
        assert_eq!(
            decode_hex_strict("c3").unwrap(),
            (Value::Boolean(true), 1)
        );
    }

    #[test]
    fn encode_hex_is_lowercase_and_round_trips() {
        let v = Value::Array(vec![
            Value::Float(1.0),
            Value::String("abc".into()),
            Value::Nil,
        ]);
        let text = encode_hex(&v).unwrap();
        assert_eq!(text, "93cb3ff0000000000000a3616263c0");
        assert_eq!(decode_hex(&text).unwrap(), v);
    }
}
