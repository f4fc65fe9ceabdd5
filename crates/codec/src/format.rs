//! Wire-level constants and the adaptive code-width schedule.
//!
//! Both engines must agree on these values exactly; changing any of them
//! breaks compatibility with existing payloads.

/// Marker announcing an 8-bit literal.
pub(crate) const CHAR_8BIT: u32 = 0;
/// Marker announcing a 16-bit literal.
pub(crate) const CHAR_16BIT: u32 = 1;
/// Marker terminating the stream.
pub(crate) const END_OF_STREAM: u32 = 2;
/// First code handed out to a dictionary entry.
pub(crate) const FIRST_CODE: u32 = 3;

/// Bits per output unit and the matching reader reset mask, per alphabet.
pub(crate) const BASE64_BITS: u32 = 6;
pub(crate) const BASE64_RESET: u32 = 32;
pub(crate) const UTF16_SAFE_BITS: u32 = 15;
pub(crate) const UTF16_SAFE_RESET: u32 = 16384;
pub(crate) const RAW_BITS: u32 = 16;
pub(crate) const RAW_RESET: u32 = 32768;

/// Offset applied to every 15-bit unit of the UTF-16-safe alphabet.
pub(crate) const UTF16_SAFE_OFFSET: u16 = 32;

/// Width of dictionary references and the countdown to the next widening.
///
/// Every emitted or consumed token calls [`CodeWidth::advance`]. When the
/// countdown hits zero the addressable code space doubles and the width
/// grows by one bit. The compressor starts one token earlier in the schedule
/// than the decompressor, which begins after the leading literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeWidth {
    bits: u32,
    enlarge_in: u32,
}

impl CodeWidth {
    pub(crate) fn compressing() -> Self {
        Self {
            bits: 2,
            enlarge_in: 2,
        }
    }

    pub(crate) fn decompressing() -> Self {
        Self {
            bits: 3,
            enlarge_in: 4,
        }
    }

    #[inline]
    pub(crate) fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.bits;
            self.bits += 1;
        }
    }
}
