//! Lossless text compression for storage-constrained places.
//!
//! Text is compressed with an LZ78-family scheme whose dictionary is rebuilt
//! by the decoder from the stream itself, so no table is transmitted. The
//! resulting bit stream is laid out in one of several alphabets:
//!
//! | Strategy | Payload | Use |
//! |---|---|---|
//! | [`Base64`] | `String` | base64 symbols, `=`-padded |
//! | [`UriSafe`] | `String` | query strings and fragments |
//! | [`Utf16Safe`] | `String` | stores that keep strings as UTF-16 |
//! | [`Raw`] | `Vec<u16>` | densest, may hold lone surrogates |
//! | [`Bytes`] | `Vec<u8>` | raw units as UTF-16BE bytes |
//!
//! Every call is independent; nothing is shared between calls except the
//! read-only alphabet tables.

mod alphabet;
mod bitstream;
mod compress;
mod decompress;
mod error;
mod format;
mod strategies;
mod traits;

pub use alphabet::{Alphabet, BASE64, URI_SAFE};
pub use error::CodecError as Error;
pub use error::CodecError;
pub use strategies::{Base64, Bytes, Raw, UriSafe, Utf16Safe};
pub use traits::Codec;

use serde::{Deserialize, Serialize};

/// Alphabets whose payload is a `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// Standard base64 symbols, padded with `=`.
    Base64,
    /// Base64 symbols with `-` for `/`, unpadded.
    UriSafe,
    /// 15-bit units offset into printable UTF-16.
    Utf16,
}

impl TextEncoding {
    /// Compress using the selected alphabet.
    pub fn compress(&self, text: &str) -> String {
        match self {
            TextEncoding::Base64 => Base64.encode(text),
            TextEncoding::UriSafe => UriSafe.encode(text),
            TextEncoding::Utf16 => Utf16Safe.encode(text),
        }
    }

    /// Decompress using the selected alphabet.
    pub fn decompress(&self, packed: &str) -> Result<String, CodecError> {
        match self {
            TextEncoding::Base64 => Base64.decode(packed),
            TextEncoding::UriSafe => UriSafe.decode(packed),
            TextEncoding::Utf16 => Utf16Safe.decode(packed),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::Base64
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::UriSafe => write!(f, "uri-safe"),
            Self::Utf16 => write!(f, "utf16"),
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(Self::Base64),
            "uri-safe" | "uri" => Ok(Self::UriSafe),
            "utf16" => Ok(Self::Utf16),
            _ => Err(format!(
                "Unknown text encoding: {s}. Available: base64, uri-safe, utf16"
            )),
        }
    }
}

impl Codec for TextEncoding {
    type Packed = str;

    fn encode(&self, text: &str) -> String {
        self.compress(text)
    }

    fn decode(&self, packed: &str) -> Result<String, CodecError> {
        self.decompress(packed)
    }
}

/// Compress into base64 symbols, padded to a multiple of 4.
pub fn compress_to_base64(text: &str) -> String {
    Base64.encode(text)
}

pub fn decompress_from_base64(packed: &str) -> Result<String, CodecError> {
    Base64.decode(packed)
}

/// Compress into printable UTF-16 (`U+0020..=U+801F`).
pub fn compress_to_utf16(text: &str) -> String {
    Utf16Safe.encode(text)
}

pub fn decompress_from_utf16(packed: &str) -> Result<String, CodecError> {
    Utf16Safe.decode(packed)
}

/// Compress into UTF-16BE bytes of the raw units.
pub fn compress_to_bytes(text: &str) -> Vec<u8> {
    Bytes.encode(text)
}

pub fn decompress_from_bytes(packed: &[u8]) -> Result<String, CodecError> {
    Bytes.decode(packed)
}

/// Compress into URI-safe symbols, ready for a query string.
pub fn compress_to_uri_safe(text: &str) -> String {
    UriSafe.encode(text)
}

/// Spaces are read as `+`.
pub fn decompress_from_uri_safe(packed: &str) -> Result<String, CodecError> {
    UriSafe.decode(packed)
}

/// Compress into raw 16-bit units.
pub fn compress(text: &str) -> Vec<u16> {
    Raw.encode(text)
}

pub fn decompress(packed: &[u16]) -> Result<String, CodecError> {
    Raw.decode(packed)
}
