//! Decompression engine.
//!
//! Replays the compressor's dictionary construction from the stream itself:
//! literal escapes create single-unit entries, and every resolved token adds
//! the previous value extended by the first unit of the current one.

use tracing::debug;

use crate::bitstream::BitReader;
use crate::error::CodecError;
use crate::format::{CodeWidth, CHAR_16BIT, CHAR_8BIT, END_OF_STREAM, FIRST_CODE};

/// Outcome of looking up a dictionary code.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Resolved<'a> {
    Known(&'a [u16]),
    /// The code names the entry this very token is about to create.
    PendingSelf,
    Unknown,
}

/// Code-to-phrase dictionary, indexed by code.
#[derive(Debug)]
struct Entries(Vec<Vec<u16>>);

impl Entries {
    /// Dictionary holding the reserved codes and the leading literal.
    fn seeded(first: u16) -> Self {
        let mut entries = vec![Vec::new(); FIRST_CODE as usize];
        entries.push(vec![first]);
        Self(entries)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    /// Appends an entry and returns its code.
    fn push(&mut self, phrase: Vec<u16>) -> usize {
        self.0.push(phrase);
        self.0.len() - 1
    }

    fn resolve(&self, code: usize) -> Resolved<'_> {
        match self.0.get(code) {
            Some(phrase) if code >= FIRST_CODE as usize => Resolved::Known(phrase),
            None if code == self.0.len() => Resolved::PendingSelf,
            _ => Resolved::Unknown,
        }
    }
}

/// Decompress `len` units fetched through `unit_at` back into UTF-16 code units.
///
/// `reset` is the top-bit mask of one input unit. Empty input decodes to
/// nothing; a malformed stream is an error and yields no partial output.
pub(crate) fn decompress_with<F>(len: usize, reset: u32, unit_at: F) -> Result<Vec<u16>, CodecError>
where
    F: FnMut(usize) -> Result<u32, CodecError>,
{
    if len == 0 {
        return Ok(Vec::new());
    }
    let mut reader = BitReader::new(len, reset, unit_at)?;

    let first = match reader.read(2)? {
        CHAR_8BIT => reader.read(8)?,
        CHAR_16BIT => reader.read(16)?,
        marker => return Err(CodecError::InvalidMarker(marker)),
    } as u16;

    let mut entries = Entries::seeded(first);
    let mut width = CodeWidth::decompressing();
    let mut previous = vec![first];
    let mut result = vec![first];

    loop {
        if reader.is_exhausted() {
            return Err(CodecError::UnexpectedEnd);
        }

        let code = match reader.read(width.bits())? {
            CHAR_8BIT => {
                let unit = reader.read(8)? as u16;
                width.advance();
                entries.push(vec![unit])
            }
            CHAR_16BIT => {
                let unit = reader.read(16)? as u16;
                width.advance();
                entries.push(vec![unit])
            }
            END_OF_STREAM => return Ok(result),
            code => code as usize,
        };

        let value = match entries.resolve(code) {
            Resolved::Known(phrase) => phrase.to_vec(),
            Resolved::PendingSelf => {
                let mut phrase = previous.clone();
                phrase.push(previous[0]);
                phrase
            }
            Resolved::Unknown => {
                return Err(CodecError::UnknownCode {
                    code,
                    next: entries.len(),
                })
            }
        };
        result.extend_from_slice(&value);

        let mut entry = previous;
        entry.push(value[0]);
        entries.push(entry);
        width.advance();

        previous = value;
    }
}

/// [`decompress_with`] followed by conversion to a `String`.
pub(crate) fn decompress_text<F>(len: usize, reset: u32, unit_at: F) -> Result<String, CodecError>
where
    F: FnMut(usize) -> Result<u32, CodecError>,
{
    let decoded = decompress_with(len, reset, unit_at)
        .and_then(|units| String::from_utf16(&units).map_err(CodecError::from));
    if let Err(err) = &decoded {
        debug!(error = %err, input_units = len, "rejected malformed stream");
    }
    decoded
}
