mod base64;
mod bytes;
mod raw;
mod uri_safe;
mod utf16;

pub use base64::Base64;
pub use bytes::Bytes;
pub use raw::Raw;
pub use uri_safe::UriSafe;
pub use utf16::Utf16Safe;

use crate::alphabet::Alphabet;
use crate::compress::compress_with;
use crate::decompress::decompress_text;
use crate::error::CodecError;
use crate::format::{BASE64_BITS, BASE64_RESET};

/// Compress into 6-bit symbols of `alphabet`, without padding.
fn encode_symbols(alphabet: &Alphabet, text: &str) -> String {
    let symbols = alphabet.symbols();
    compress_with(text, BASE64_BITS, |v| symbols[v as usize])
        .into_iter()
        .collect()
}

/// Decompress a sequence of 6-bit symbols of `alphabet`.
fn decode_symbols(alphabet: &Alphabet, symbols: &[char]) -> Result<String, CodecError> {
    decompress_text(symbols.len(), BASE64_RESET, |i| {
        let symbol = symbols[i];
        alphabet
            .index_of(symbol)
            .map(u32::from)
            .ok_or(CodecError::InvalidSymbol(symbol))
    })
}
