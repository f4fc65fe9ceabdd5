use std::collections::HashMap;

use once_cell::sync::Lazy;

const SHARED_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+";

/// Standard base64 symbols, with `=` at index 64.
pub static BASE64: Lazy<Alphabet> = Lazy::new(|| Alphabet::with_tail("/="));

/// URI-safe symbols, with `$` at index 64.
pub static URI_SAFE: Lazy<Alphabet> = Lazy::new(|| Alphabet::with_tail("-$"));

/// Immutable symbol table for the 6-bit alphabets.
///
/// Index 64 is the padding symbol. It never appears as a payload value, but
/// decoding accepts it and reads it as zero bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Symbol for each 6-bit value
    symbols: Vec<char>,
    /// Mapping from symbol to value for fast lookup
    symbol_to_index: HashMap<char, u8>,
}

impl Alphabet {
    /// Create an alphabet from symbols.
    /// The order determines the index mapping.
    pub fn new(symbols: impl Into<Vec<char>>) -> Self {
        let symbols: Vec<char> = symbols.into();
        let symbol_to_index = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect();

        Self {
            symbols,
            symbol_to_index,
        }
    }

    fn with_tail(tail: &str) -> Self {
        Self::new(SHARED_SYMBOLS.chars().chain(tail.chars()).collect::<Vec<_>>())
    }

    /// Number of symbols, padding included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get symbol by value
    #[inline]
    pub fn symbol(&self, index: u32) -> Option<char> {
        self.symbols.get(index as usize).copied()
    }

    /// Get value by symbol
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u8> {
        self.symbol_to_index.get(&c).copied()
    }

    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.symbol_to_index.contains_key(&c)
    }
}
