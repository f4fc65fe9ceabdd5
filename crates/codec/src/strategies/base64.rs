use crate::alphabet::BASE64;
use crate::error::CodecError;
use crate::traits::Codec;

use super::{decode_symbols, encode_symbols};

/// Strategy: 6-bit units over the standard base64 symbols.
///
/// Output is padded with `=` to a multiple of 4 characters, so it can be
/// handed to anything expecting well-formed base64 text. It is not the
/// base64 encoding of any byte string.
pub struct Base64;

impl Codec for Base64 {
    type Packed = str;

    fn encode(&self, text: &str) -> String {
        let mut packed = encode_symbols(&BASE64, text);
        match packed.len() % 4 {
            0 => {}
            1 => packed.push_str("==="),
            2 => packed.push_str("=="),
            3 => packed.push('='),
            _ => unreachable!("remainder of a division by 4"),
        }
        packed
    }

    fn decode(&self, packed: &str) -> Result<String, CodecError> {
        let symbols: Vec<char> = packed.chars().collect();
        decode_symbols(&BASE64, &symbols)
    }
}
