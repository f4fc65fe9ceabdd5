use tracing::debug;

use crate::error::CodecError;
use crate::strategies::Raw;
use crate::traits::Codec;

/// Strategy: raw 16-bit units written as big-endian byte pairs (UTF-16BE).
///
/// Unpaired surrogates in the raw units survive the trip, so this path is
/// lossless for every input.
pub struct Bytes;

impl Codec for Bytes {
    type Packed = [u8];

    fn encode(&self, text: &str) -> Vec<u8> {
        Raw.encode(text)
            .into_iter()
            .flat_map(u16::to_be_bytes)
            .collect()
    }

    fn decode(&self, packed: &[u8]) -> Result<String, CodecError> {
        if packed.len() % 2 != 0 {
            debug!(len = packed.len(), "rejected odd-length byte payload");
            return Err(CodecError::OddLength(packed.len()));
        }
        let units: Vec<u16> = packed
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Raw.decode(&units)
    }
}
