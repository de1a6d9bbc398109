//! Error types for the MessagePack codec.

/// Errors that can occur while encoding or decoding MessagePack data.
#[derive(Debug, thiserror::Error)]
pub enum MsgPackError {
    /// The buffer is shorter than the header or payload demands.
    #[error("data length is insufficient: need {needed} bytes but only {remaining} remaining")]
    InsufficientLength { needed: usize, remaining: usize },

    /// The lead byte matches none of the supported format markers.
    #[error("unsupported format marker: 0x{0:02X}")]
    UnsupportedFormat(u8),

    /// A map key position does not hold a string form.
    #[error("map key must be a string, got marker 0x{0:02X}")]
    MalformedKey(u8),

    /// A string, array, or map exceeds the 2^32 - 1 wire-format ceiling.
    #[error("{0} exceeds maximum encodable length")]
    LengthExceeded(&'static str),

    /// The hex convenience layer received malformed hex text.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}
