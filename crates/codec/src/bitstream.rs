use crate::error::CodecError;

/// Bit writer: packs values LSB-first into units of `bits_per_unit` bits.
///
/// Inside a unit the first written bit ends up in the highest position.
/// `to_unit` maps every completed unit value in `[0, 2^bits_per_unit)`
/// onto the output alphabet.
pub(crate) struct BitWriter<T, F> {
    units: Vec<T>,
    to_unit: F,
    bits_per_unit: u32,
    value: u32,
    position: u32,
}

impl<T, F> BitWriter<T, F>
where
    F: FnMut(u32) -> T,
{
    pub(crate) fn new(bits_per_unit: u32, to_unit: F) -> Self {
        Self {
            units: Vec::new(),
            to_unit,
            bits_per_unit,
            value: 0,
            position: 0,
        }
    }

    /// Write the low `count` bits of `value`, lowest bit first.
    pub(crate) fn write(&mut self, mut value: u32, count: u32) {
        for _ in 0..count {
            self.value = (self.value << 1) | (value & 1);
            value >>= 1;
            self.push_bit();
        }
    }

    #[inline]
    fn push_bit(&mut self) {
        if self.position == self.bits_per_unit - 1 {
            self.position = 0;
            let unit = (self.to_unit)(self.value);
            self.units.push(unit);
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Pad with zero bits until one more unit is completed and return the output.
    ///
    /// A unit is always emitted, even when the buffer is empty.
    pub(crate) fn finish(mut self) -> Vec<T> {
        loop {
            self.value <<= 1;
            if self.position == self.bits_per_unit - 1 {
                let unit = (self.to_unit)(self.value);
                self.units.push(unit);
                return self.units;
            }
            self.position += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }
}

/// Bit reader: the mirror of [`BitWriter`].
///
/// `position` is a one-hot mask walking from `reset` down to bit 0 of the
/// current unit. Reading past the last unit yields zero bits; callers detect
/// the overrun with [`BitReader::is_exhausted`].
pub(crate) struct BitReader<F> {
    unit_at: F,
    len: usize,
    reset: u32,
    value: u32,
    position: u32,
    index: usize,
}

impl<F> BitReader<F>
where
    F: FnMut(usize) -> Result<u32, CodecError>,
{
    /// Creates a reader over `len` units and loads the first one.
    ///
    /// `len` must be non-zero.
    pub(crate) fn new(len: usize, reset: u32, mut unit_at: F) -> Result<Self, CodecError> {
        let value = unit_at(0)?;
        Ok(Self {
            unit_at,
            len,
            reset,
            value,
            position: reset,
            index: 1,
        })
    }

    /// Read `count` bits, lowest bit first.
    pub(crate) fn read(&mut self, count: u32) -> Result<u32, CodecError> {
        let mut bits = 0;
        for i in 0..count {
            let bit = self.value & self.position;
            self.position >>= 1;
            if self.position == 0 {
                self.position = self.reset;
                self.value = self.next_unit()?;
            }
            if bit != 0 {
                bits |= 1 << i;
            }
        }
        Ok(bits)
    }

    fn next_unit(&mut self) -> Result<u32, CodecError> {
        let index = self.index;
        self.index += 1;
        if index < self.len {
            (self.unit_at)(index)
        } else {
            Ok(0)
        }
    }

    /// True once the reader has moved beyond the final unit.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.index > self.len
    }
}
