//! MessagePack marker byte constants and classification predicates.

// Nil
pub const NIL: u8 = 0xC0;

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Float (IEEE 754 double-precision)
pub const FLOAT_64: u8 = 0xCB;

// String
// FIXSTR: 0xA0..=0xBF (low 5 bits = byte length 0..31)
pub const FIXSTR_LOW: u8 = 0xA0;
pub const FIXSTR_HIGH: u8 = 0xBF;
pub const STR_8: u8 = 0xD9;
pub const STR_16: u8 = 0xDA;
pub const STR_32: u8 = 0xDB;

// Array
// FIXARRAY: 0x90..=0x9F (low 4 bits = element count 0..15)
pub const FIXARRAY_LOW: u8 = 0x90;
pub const FIXARRAY_HIGH: u8 = 0x9F;
pub const ARRAY_16: u8 = 0xDC;
pub const ARRAY_32: u8 = 0xDD;

// Map
// FIXMAP: 0x80..=0x8F (low 4 bits = pair count 0..15)
pub const FIXMAP_LOW: u8 = 0x80;
pub const FIXMAP_HIGH: u8 = 0x8F;
pub const MAP_16: u8 = 0xDE;
pub const MAP_32: u8 = 0xDF;

// The integer families (positive fixint 0x00..=0x7F, negative fixint
// 0xF0..=0xFF, uint/int 0xCC..=0xD3), bin 0xC4..=0xC6, ext 0xC7..=0xC9,
// float32 0xCA, and fixext 0xD4..=0xD8 are not part of this value model
// and decode as unsupported-format.

/// Maximum payload length or element count for an 8-bit header.
pub const MAX_8BIT: usize = (1 << 8) - 1;
/// Maximum payload length or element count for a 16-bit header.
pub const MAX_16BIT: usize = (1 << 16) - 1;
/// Maximum payload length or element count for a 32-bit header.
///
/// Held as `u64` so the ceiling comparison is exact on 32-bit targets.
pub const MAX_32BIT: u64 = (1 << 32) - 1;

pub fn is_fixed_map(value: u8) -> bool {
    (FIXMAP_LOW..=FIXMAP_HIGH).contains(&value)
}

pub fn is_map16(value: u8) -> bool {
    value == MAP_16
}

pub fn is_map32(value: u8) -> bool {
    value == MAP_32
}

pub fn is_fixed_array(value: u8) -> bool {
    (FIXARRAY_LOW..=FIXARRAY_HIGH).contains(&value)
}

pub fn is_array16(value: u8) -> bool {
    value == ARRAY_16
}

pub fn is_array32(value: u8) -> bool {
    value == ARRAY_32
}

pub fn is_bool(value: u8) -> bool {
    value == TRUE || value == FALSE
}

pub fn is_float64(value: u8) -> bool {
    value == FLOAT_64
}

pub fn is_nil(value: u8) -> bool {
    value == NIL
}

pub fn is_fix_string(value: u8) -> bool {
    (FIXSTR_LOW..=FIXSTR_HIGH).contains(&value)
}

pub fn is_str8(value: u8) -> bool {
    value == STR_8
}

pub fn is_str16(value: u8) -> bool {
    value == STR_16
}

pub fn is_str32(value: u8) -> bool {
    value == STR_32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_disjoint() {
        for b in 0..=u8::MAX {
            let matches = [
                is_fixed_map(b),
                is_map16(b),
                is_map32(b),
                is_fixed_array(b),
                is_array16(b),
                is_array32(b),
                is_bool(b),
                is_float64(b),
                is_nil(b),
                is_fix_string(b),
                is_str8(b),
                is_str16(b),
                is_str32(b),
            ]
            .iter()
            .filter(|&&m| m)
            .count();
            assert!(matches <= 1, "marker 0x{b:02X} matches {matches} predicates");
        }
    }

    #[test]
    fn fixed_range_boundaries() {
        assert!(is_fixed_map(0x80));
        assert!(is_fixed_map(0x8F));
        assert!(!is_fixed_map(0x90));

        assert!(is_fixed_array(0x90));
        assert!(is_fixed_array(0x9F));
        assert!(!is_fixed_array(0xA0));

        assert!(is_fix_string(0xA0));
        assert!(is_fix_string(0xBF));
        assert!(!is_fix_string(0xC0));
    }

    #[test]
    fn sentinel_predicates() {
        assert!(is_nil(0xC0));
        assert!(is_bool(0xC2));
        assert!(is_bool(0xC3));
        assert!(!is_bool(0xC1));
        assert!(is_float64(0xCB));
        assert!(is_str8(0xD9));
        assert!(is_str16(0xDA));
        assert!(is_str32(0xDB));
        assert!(is_array16(0xDC));
        assert!(is_array32(0xDD));
        assert!(is_map16(0xDE));
        assert!(is_map32(0xDF));
    }
}
