use std::string::FromUtf16Error;
use thiserror::Error;

/// Error type for codec operations.
///
/// Compression never fails; every variant describes a compressed payload
/// that cannot be decoded. Empty input is not an error.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid leading marker: {0} (expected 0 or 1)")]
    InvalidMarker(u32),
    #[error("Stream ended before the end-of-stream marker")]
    UnexpectedEnd,
    #[error("Unresolved dictionary code {code} (next free index is {next})")]
    UnknownCode { code: usize, next: usize },
    #[error("Symbol {0:?} is not part of the alphabet")]
    InvalidSymbol(char),
    #[error("Code unit {0:#06x} is below the UTF-16-safe offset")]
    InvalidUnit(u16),
    #[error("Byte payload has odd length {0}")]
    OddLength(usize),
    #[error("Decoded units are not valid UTF-16: {0}")]
    InvalidUtf16(#[from] FromUtf16Error),
}
