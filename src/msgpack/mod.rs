//! MessagePack binary encoding format.
//!
//! MessagePack is a binary presentation format for the exchange of
//! dynamically-typed data. Every value starts with a single marker byte that
//! classifies its kind and header shape; multi-byte length headers use
//! big-endian byte ordering exclusively.

pub mod decode;
pub mod encode;
pub mod marker;

pub use decode::{decode_any, decode_value};
pub use encode::{encode, encode_value};
