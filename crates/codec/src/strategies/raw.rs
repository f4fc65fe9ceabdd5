use crate::compress::compress_with;
use crate::decompress::decompress_text;
use crate::error::CodecError;
use crate::format::{RAW_BITS, RAW_RESET};
use crate::traits::Codec;

/// Strategy: full 16-bit units.
///
/// The densest layout, but the units may include unpaired surrogates and
/// control characters, so they are returned as `Vec<u16>` rather than a
/// `String`.
pub struct Raw;

impl Codec for Raw {
    type Packed = [u16];

    fn encode(&self, text: &str) -> Vec<u16> {
        compress_with(text, RAW_BITS, |v| v as u16)
    }

    fn decode(&self, packed: &[u16]) -> Result<String, CodecError> {
        decompress_text(packed.len(), RAW_RESET, |i| Ok(u32::from(packed[i])))
    }
}
