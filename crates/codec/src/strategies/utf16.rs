use crate::compress::compress_with;
use crate::decompress::decompress_text;
use crate::error::CodecError;
use crate::format::{UTF16_SAFE_BITS, UTF16_SAFE_OFFSET, UTF16_SAFE_RESET};
use crate::traits::Codec;

/// Strategy: 15-bit units shifted up by 32.
///
/// Every emitted code point lies in `U+0020..=U+801F`: no control
/// characters and no surrogates, so the result survives any store that
/// keeps strings as UTF-16.
pub struct Utf16Safe;

impl Codec for Utf16Safe {
    type Packed = str;

    fn encode(&self, text: &str) -> String {
        compress_with(text, UTF16_SAFE_BITS, |v| {
            match char::from_u32(v + u32::from(UTF16_SAFE_OFFSET)) {
                Some(c) => c,
                None => unreachable!("15-bit unit {v} shifted into the surrogate range"),
            }
        })
        .into_iter()
        .collect()
    }

    fn decode(&self, packed: &str) -> Result<String, CodecError> {
        let units: Vec<u16> = packed.encode_utf16().collect();
        decompress_text(units.len(), UTF16_SAFE_RESET, |i| {
            let unit = units[i];
            unit.checked_sub(UTF16_SAFE_OFFSET)
                .map(u32::from)
                .ok_or(CodecError::InvalidUnit(unit))
        })
    }
}
