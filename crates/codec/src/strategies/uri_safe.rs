use crate::alphabet::URI_SAFE;
use crate::error::CodecError;
use crate::traits::Codec;

use super::{decode_symbols, encode_symbols};

/// Strategy: 6-bit units over a URI-safe alphabet (`-` instead of `/`).
///
/// Output is unpadded and can go into a query string without escaping.
/// Decoding turns spaces back into `+`, undoing form-style URI decoding.
pub struct UriSafe;

impl Codec for UriSafe {
    type Packed = str;

    fn encode(&self, text: &str) -> String {
        encode_symbols(&URI_SAFE, text)
    }

    fn decode(&self, packed: &str) -> Result<String, CodecError> {
        let symbols: Vec<char> = packed
            .chars()
            .map(|c| if c == ' ' { '+' } else { c })
            .collect();
        decode_symbols(&URI_SAFE, &symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::random_text;
    use rand::Rng;

    #[test]
    fn test_encode_empty() {
        assert_eq!(UriSafe.encode(""), "");
        assert_eq!(UriSafe.decode("").unwrap(), "");
    }

    #[test]
    fn test_known_vector() {
        // Same bit stream as base64, without the padding.
        assert_eq!(UriSafe.encode("hello world"), "BYUwNmD2AEDukCcwBMg");
    }

    #[test]
    fn test_output_is_uri_safe() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..500);
            let packed = UriSafe.encode(&random_text(&mut rng, len));
            assert!(packed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-'));
        }
    }

    #[test]
    fn test_space_reads_as_plus() {
        let text = "{\"query\": \"a+b\", \"page\": 12, \"filter\": [1, 2, 3]}".repeat(3);
        let packed = UriSafe.encode(&text);
        assert!(packed.contains('+'), "vector should exercise '+'");
        let mangled = packed.replace('+', " ");
        assert_eq!(UriSafe.decode(&mangled).unwrap(), text);
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..1000);
            let text = random_text(&mut rng, len);
            assert_eq!(UriSafe.decode(&UriSafe.encode(&text)).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_rejects_base64_slash() {
        assert!(matches!(
            UriSafe.decode("BY/w"),
            Err(CodecError::InvalidSymbol('/'))
        ));
    }
}
