use plzsu_codec::{
    compress, compress_to_base64, compress_to_bytes, compress_to_uri_safe, compress_to_utf16,
    decompress, decompress_from_base64, decompress_from_bytes, decompress_from_uri_safe,
    decompress_from_utf16, CodecError, TextEncoding,
};
use rand::Rng;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

fn samples() -> Vec<String> {
    vec![
        String::new(),
        "a".to_string(),
        LOREM.to_string(),
        "ab".repeat(500),
        "z".repeat(1000),
        "Größe, naïve café, 東京, Ελληνικά".to_string(),
        "emoji 😀🎉 and astral 𝄞 characters 😀🎉".to_string(),
        "\u{0}\u{1}\u{ff}\u{100}\u{fffd}\u{ffff}".to_string(),
        "{\"k\":[1,2,3],\"v\":\"value value value\"}".to_string(),
    ]
}

fn assert_all_paths(text: &str) {
    assert_eq!(decompress(&compress(text)).unwrap(), text);
    assert_eq!(decompress_from_base64(&compress_to_base64(text)).unwrap(), text);
    assert_eq!(decompress_from_uri_safe(&compress_to_uri_safe(text)).unwrap(), text);
    assert_eq!(decompress_from_utf16(&compress_to_utf16(text)).unwrap(), text);
    assert_eq!(decompress_from_bytes(&compress_to_bytes(text)).unwrap(), text);
}

#[test]
fn test_round_trip_samples() {
    for text in samples() {
        assert_all_paths(&text);
    }
}

#[test]
fn test_round_trip_random_unicode() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..2000);
        let text: String = (0..len).map(|_| rng.gen::<char>()).collect();
        assert_all_paths(&text);
    }
}

#[test]
fn test_round_trip_random_low_entropy() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..5000);
        let text: String = (0..len)
            .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
            .collect();
        assert_all_paths(&text);
    }
}

#[test]
fn test_bytes_preserve_text_exactly() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let len = rng.gen_range(1..500);
        let text: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let decoded = decompress_from_bytes(&compress_to_bytes(&text)).unwrap();
        assert_eq!(decoded.as_bytes(), text.as_bytes());
    }
}

#[test]
fn test_empty_everywhere() {
    assert!(compress("").is_empty());
    assert_eq!(compress_to_base64(""), "");
    assert_eq!(compress_to_uri_safe(""), "");
    assert_eq!(compress_to_utf16(""), "");
    assert!(compress_to_bytes("").is_empty());

    assert_eq!(decompress(&[]).unwrap(), "");
    assert_eq!(decompress_from_base64("").unwrap(), "");
    assert_eq!(decompress_from_uri_safe("").unwrap(), "");
    assert_eq!(decompress_from_utf16("").unwrap(), "");
    assert_eq!(decompress_from_bytes(&[]).unwrap(), "");
}

#[test]
fn test_lorem_is_shorter() {
    let packed = compress(LOREM);
    assert!(packed.len() < LOREM.len());
    let text = decompress(&packed).unwrap();
    assert_eq!(text.len(), LOREM.len());
    assert_eq!(text, LOREM);
}

#[test]
fn test_repetition_is_sublinear() {
    let text = "x".repeat(1000);
    let packed = compress(&text);
    assert!(packed.len() * 20 < text.len(), "got {} units", packed.len());

    let doubled = compress(&"x".repeat(2000));
    assert!(doubled.len() < packed.len() * 2);
}

#[test]
fn test_base64_length_multiple_of_four() {
    for text in samples() {
        assert_eq!(compress_to_base64(&text).len() % 4, 0);
    }
}

#[test]
fn test_malformed_input_is_an_error() {
    // A single unit whose leading marker reads as 3.
    assert!(matches!(
        decompress(&[0xffff]),
        Err(CodecError::InvalidMarker(3))
    ));
    assert!(matches!(
        decompress_from_base64("/"),
        Err(CodecError::InvalidMarker(3))
    ));
    // A valid start without an end marker.
    let packed = compress(LOREM);
    assert!(matches!(
        decompress(&packed[..4]),
        Err(CodecError::UnexpectedEnd)
    ));
}

#[test]
fn test_calls_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("thread {i} ").repeat(100 + i);
                let packed = compress_to_base64(&text);
                (text, packed)
            })
        })
        .collect();
    for handle in handles {
        let (text, packed) = handle.join().unwrap();
        assert_eq!(decompress_from_base64(&packed).unwrap(), text);
    }
}

#[test]
fn test_text_encoding_selects_alphabet() {
    let encoding: TextEncoding = "uri-safe".parse().unwrap();
    assert_eq!(encoding.compress(LOREM), compress_to_uri_safe(LOREM));
}
