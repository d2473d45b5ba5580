//! Binary container: serialized frequency model plus packed bitstream.
//!
//! ## Layout (big-endian)
//!
//! ```text
//! +----------------+
//! | symbol count   |  2 bytes
//! +----------------+
//! | symbol id      |  2 bytes  \
//! | count          |  4 bytes  / repeated `symbol count` times, model order
//! +----------------+
//! | bitstream      |  MSB-first, zero-padded to a byte boundary
//! +----------------+
//! ```
//!
//! Coder precision is not recorded; reader and writer must agree on it.

use crate::model::FrequencyModel;
use oxiarith_core::bitstream::{pack_bits, unpack_bits};
use oxiarith_core::error::{OxiArithError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

/// Size of the symbol-count header field.
pub const HEADER_SIZE: usize = 2;

/// Size of one `(symbol, count)` table entry.
pub const ENTRY_SIZE: usize = 6;

/// Frequency model and compressed bits, owned together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    model: FrequencyModel,
    bits: Vec<bool>,
}

impl Container {
    /// Bundle a model with the bits encoded against it.
    pub fn new(model: FrequencyModel, bits: Vec<bool>) -> Self {
        Self { model, bits }
    }

    /// The frequency model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The bit sequence (after reading, includes the trailing pad bits).
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Split into model and bits.
    pub fn into_parts(self) -> (FrequencyModel, Vec<bool>) {
        (self.model, self.bits)
    }

    /// Size in bytes of the serialized model table (header included).
    pub fn table_size(&self) -> usize {
        HEADER_SIZE + self.model.len() * ENTRY_SIZE
    }

    /// Serialize to a writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let symbol_count = u16::try_from(self.model.len()).map_err(|_| {
            OxiArithError::too_many_symbols(self.model.len(), usize::from(u16::MAX))
        })?;
        writer.write_all(&symbol_count.to_be_bytes())?;

        for (symbol, count) in self.model.iter() {
            let count = u32::try_from(count).map_err(|_| {
                OxiArithError::model_format(format!(
                    "count {count} of symbol {symbol} does not fit in 4 bytes"
                ))
            })?;
            writer.write_all(&symbol.to_be_bytes())?;
            writer.write_all(&count.to_be_bytes())?;
        }

        writer.write_all(&pack_bits(&self.bits))?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize to a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.table_size() + self.bits.len().div_ceil(8));
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Parse from a reader, consuming it to the end.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let symbol_count = u16::from_be_bytes(read_array(&mut reader, "symbol count")?);
        if symbol_count == 0 {
            return Err(OxiArithError::model_format("container declares no symbols"));
        }

        let mut pairs = Vec::with_capacity(usize::from(symbol_count));
        for i in 0..symbol_count {
            let entry: [u8; ENTRY_SIZE] = read_array(&mut reader, "symbol table").map_err(|e| {
                match e {
                    OxiArithError::ModelFormat { .. } => OxiArithError::model_format(format!(
                        "header declares {symbol_count} symbols but table ends after {i}"
                    )),
                    other => other,
                }
            })?;
            let symbol = u16::from_be_bytes([entry[0], entry[1]]);
            let count = u32::from_be_bytes([entry[2], entry[3], entry[4], entry[5]]);
            pairs.push((symbol, u64::from(count)));
        }
        let model = FrequencyModel::from_counts(pairs)?;

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        let bits = unpack_bits(&payload);

        Ok(Self { model, bits })
    }

    /// Parse from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from(data)
    }

    /// Write the container to a file.
    ///
    /// The container is serialized before the file is opened, so a model that
    /// does not fit the layout leaves any existing file untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        debug!(
            path = %path.display(),
            symbols = self.model.len(),
            bits = self.bits.len(),
            "container written"
        );
        Ok(())
    }

    /// Read a container from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let container = Self::read_from(BufReader::new(file))?;
        debug!(path = %path.display(), symbols = container.model.len(), "container read");
        Ok(container)
    }
}

/// Read exactly `N` bytes, mapping a short read to a model format error.
fn read_array<R: Read, const N: usize>(reader: &mut R, what: &str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(OxiArithError::model_format(
            format!("truncated {what}"),
        )),
        Err(e) => Err(e.into()),
    }
}
