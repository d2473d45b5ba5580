//! MSB-first bit packing.
//!
//! The arithmetic coder produces and consumes an ordered sequence of single
//! bits. On disk those bits are grouped into bytes most significant bit first,
//! with the final byte padded with zero bits on the right.
//!
//! # Example
//!
//! ```
//! use oxiarith_core::bitstream::{pack_bits, unpack_bits};
//!
//! let bits = [true, false, true, true, false, false, true, false, true];
//! let bytes = pack_bits(&bits);
//! assert_eq!(bytes, vec![0b1011_0010, 0b1000_0000]);
//!
//! let restored = unpack_bits(&bytes);
//! assert_eq!(restored.len(), 16);
//! assert_eq!(&restored[..bits.len()], &bits);
//! ```

/// Pack a bit sequence into bytes (MSB-first, zero-padded).
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut writer = MsbBitWriter::with_capacity(bits.len());
    for &bit in bits {
        writer.write_bit(bit);
    }
    writer.into_vec()
}

/// Unpack bytes into a bit sequence (MSB-first).
///
/// The result always holds `8 * bytes.len()` bits; trailing padding is
/// returned as-is and is never validated.
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    let mut reader = MsbBitReader::new(bytes);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    while let Some(bit) = reader.read_bit() {
        bits.push(bit);
    }
    bits
}

/// MSB-first bit writer.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Partially filled byte (bits accumulate from the LSB side).
    buffer: u8,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a writer sized for roughly `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8)),
            ..Self::default()
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.bits_in_buffer += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Flush remaining bits, padding with zeros if needed.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push(self.buffer << remaining);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Get the output data.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}

/// MSB-first bit reader over a byte slice.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit offset inside the current byte (0 = MSB).
    bit_pos: u8,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Read the next bit, or `None` once the input is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.byte_pos)?;
        let bit = (byte >> (7 - self.bit_pos)) & 1 == 1;

        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }

        Some(bit)
    }
}

/// Bit cursor that yields `0` once the underlying sequence is exhausted.
///
/// The decoder relies on this to read a full register's worth of bits at
/// start-up and to keep shifting past the meaningful end of the stream.
/// Substituted bits are counted, but a truncated stream is not an error: it
/// simply decodes to whatever the zero-filled tail implies.
#[derive(Debug)]
pub struct ZeroFillBitSource<'a> {
    bits: &'a [bool],
    pos: usize,
    underrun: u64,
}

impl<'a> ZeroFillBitSource<'a> {
    /// Create a cursor over `bits`.
    pub fn new(bits: &'a [bool]) -> Self {
        Self {
            bits,
            pos: 0,
            underrun: 0,
        }
    }

    /// Next bit as `0` or `1`.
    #[inline]
    pub fn next_bit(&mut self) -> u64 {
        match self.bits.get(self.pos) {
            Some(&bit) => {
                self.pos += 1;
                u64::from(bit)
            }
            None => {
                self.underrun += 1;
                0
            }
        }
    }

    /// Total bits handed out, real and substituted.
    pub fn bits_read(&self) -> u64 {
        self.pos as u64 + self.underrun
    }

    /// Number of zero bits substituted past the end of the input.
    pub fn underrun_bits(&self) -> u64 {
        self.underrun
    }
}
