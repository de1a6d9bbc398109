//! msgpackr — a pure-Rust MessagePack wire codec for dynamic values.
//!
//! This crate converts between an in-memory dynamic [`types::Value`] and the
//! MessagePack binary format, covering the nil, boolean, float64, string,
//! array, and map families. Both directions are pure functions: encoding
//! allocates a fresh buffer, decoding reads a fully buffered byte slice and
//! reports how many bytes it consumed.
//!
//! # Architecture
//!
//! - **`msgpack`** — Binary encoding/decoding (marker constants, encoder, decoder)
//! - **`types`** — The dynamic value model
//! - **`hex`** — Hex-string convenience layer over the binary codec
//! - **`error`** — Codec error type

pub mod error;
pub mod hex;
pub mod msgpack;
pub mod types;
