//! Decoding strategies for retrieved bytes.

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Decoder ==
/// How raw stored bytes should be interpreted on retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoder {
    /// Bytes unchanged
    #[default]
    Raw,
    /// UTF-8 text
    Utf8,
    /// Signed 64-bit integer parsed from text
    Integer,
}

impl Decoder {
    /// Applies the strategy to `bytes`.
    pub fn decode(self, bytes: Vec<u8>) -> Result<Decoded> {
        match self {
            Decoder::Raw => Ok(Decoded::Raw(bytes)),
            Decoder::Utf8 => decode_utf8(bytes).map(Decoded::Text),
            Decoder::Integer => decode_int(bytes).map(Decoded::Integer),
        }
    }
}

// == Decoded ==
/// A retrieved value after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    Raw(Vec<u8>),
    Text(String),
    Integer(i64),
}

/// Decodes bytes as UTF-8 text.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CacheError::Parse(format!("invalid UTF-8: {}", e)))
}

/// Parses bytes as a base-10 integer. Surrounding whitespace and a leading
/// sign are accepted.
pub fn decode_int(bytes: Vec<u8>) -> Result<i64> {
    let text = decode_utf8(bytes)?;
    text.trim()
        .parse()
        .map_err(|_| CacheError::Parse(format!("invalid integer literal: {:?}", text)))
}
