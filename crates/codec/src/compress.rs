//! Compression engine.
//!
//! Greedy LZ78-style parsing over UTF-16 code units. Each unit is registered
//! the first time it is seen and travels once as a literal escape; every
//! later reference to it, and every longer phrase, travels as a dictionary
//! code whose width follows [`CodeWidth`].

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::bitstream::BitWriter;
use crate::format::{CodeWidth, CHAR_16BIT, CHAR_8BIT, END_OF_STREAM, FIRST_CODE};

/// A dictionary phrase: its code and its first code unit.
#[derive(Debug, Clone, Copy)]
struct Phrase {
    code: u32,
    head: u16,
}

/// Substring-to-code dictionary.
///
/// A phrase longer than one unit is always an extension of another phrase,
/// so it is keyed by `(prefix code, last unit)` instead of the full string.
#[derive(Debug, Default)]
struct Dictionary {
    units: HashMap<u16, u32>,
    phrases: HashMap<(u32, u16), u32>,
    /// Single-unit entries not yet sent as a literal escape.
    pending: HashSet<u32>,
}

impl Dictionary {
    fn len(&self) -> usize {
        self.units.len() + self.phrases.len()
    }

    fn next_code(&self) -> u32 {
        FIRST_CODE + self.len() as u32
    }

    /// Code of a single unit, registering it as pending on first sight.
    fn intern(&mut self, unit: u16) -> u32 {
        if let Some(&code) = self.units.get(&unit) {
            return code;
        }
        let code = self.next_code();
        self.units.insert(unit, code);
        self.pending.insert(code);
        code
    }

    fn extension(&self, prefix: u32, unit: u16) -> Option<u32> {
        self.phrases.get(&(prefix, unit)).copied()
    }

    fn extend(&mut self, prefix: u32, unit: u16) {
        let code = self.next_code();
        self.phrases.insert((prefix, unit), code);
    }

    /// Clears the pending flag, reporting whether it was set.
    fn take_pending(&mut self, code: u32) -> bool {
        self.pending.remove(&code)
    }
}

/// Per-call compression state.
pub(crate) struct Compressor<T, F> {
    dictionary: Dictionary,
    width: CodeWidth,
    writer: BitWriter<T, F>,
    /// Longest phrase matched so far.
    current: Option<Phrase>,
    consumed: usize,
}

impl<T, F> Compressor<T, F>
where
    F: FnMut(u32) -> T,
{
    pub(crate) fn new(bits_per_unit: u32, to_unit: F) -> Self {
        Self {
            dictionary: Dictionary::default(),
            width: CodeWidth::compressing(),
            writer: BitWriter::new(bits_per_unit, to_unit),
            current: None,
            consumed: 0,
        }
    }

    pub(crate) fn push(&mut self, unit: u16) {
        self.consumed += 1;
        let unit_code = self.dictionary.intern(unit);
        let single = Phrase {
            code: unit_code,
            head: unit,
        };

        let Some(prefix) = self.current else {
            self.current = Some(single);
            return;
        };

        match self.dictionary.extension(prefix.code, unit) {
            Some(code) => {
                self.current = Some(Phrase {
                    code,
                    head: prefix.head,
                });
            }
            None => {
                self.emit(prefix);
                self.dictionary.extend(prefix.code, unit);
                self.current = Some(single);
            }
        }
    }

    fn emit(&mut self, phrase: Phrase) {
        if self.dictionary.take_pending(phrase.code) {
            if phrase.head < 256 {
                self.writer.write(CHAR_8BIT, self.width.bits());
                self.writer.write(u32::from(phrase.head), 8);
            } else {
                self.writer.write(CHAR_16BIT, self.width.bits());
                self.writer.write(u32::from(phrase.head), 16);
            }
            // A literal both creates an entry and references it.
            self.width.advance();
        } else {
            self.writer.write(phrase.code, self.width.bits());
        }
        self.width.advance();
    }

    pub(crate) fn finish(mut self) -> Vec<T> {
        if let Some(phrase) = self.current.take() {
            self.emit(phrase);
        }
        self.writer.write(END_OF_STREAM, self.width.bits());

        let dictionary_len = self.dictionary.len();
        let consumed = self.consumed;
        let units = self.writer.finish();
        trace!(
            input_units = consumed,
            output_units = units.len(),
            dictionary_len,
            "compressed"
        );
        units
    }
}

/// Compress `input` into units of `bits_per_unit` bits mapped through `to_unit`.
///
/// Empty input produces no units at all.
pub(crate) fn compress_with<T, F>(input: &str, bits_per_unit: u32, to_unit: F) -> Vec<T>
where
    F: FnMut(u32) -> T,
{
    if input.is_empty() {
        return Vec::new();
    }
    let mut compressor = Compressor::new(bits_per_unit, to_unit);
    for unit in input.encode_utf16() {
        compressor.push(unit);
    }
    compressor.finish()
}
