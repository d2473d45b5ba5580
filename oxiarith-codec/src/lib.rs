//! # OxiArith-Codec: Pure Rust Integer Arithmetic Coding
//!
//! This crate provides a static order-0 arithmetic coder with fixed-width
//! integer registers, carry/underflow renormalization and a compact binary
//! container for the model and the compressed bits.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Order-0 model**: Symbol counts gathered in one pass, in first-occurrence order
//! - **Configurable precision**: 2 to 62 bit registers (32 by default)
//! - **E1/E2/E3 renormalization**: Pending-bit carry handling for arbitrarily long underflow runs
//!
//! ## Pipeline
//!
//! ```text
//! symbols ──► FrequencyModel ──► ArithmeticEncoder ──► bits ──► Container ──► bytes
//! bytes ──► Container ──► (model, bits) ──► ArithmeticDecoder ──► symbols
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiarith_codec::{CoderConfig, compress, decompress};
//!
//! let original = b"ABACABADABACABA";
//!
//! // Compress
//! let compressed = compress(original, CoderConfig::DEFAULT).unwrap();
//!
//! // Decompress
//! let decompressed = decompress(&compressed, CoderConfig::DEFAULT).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Symbol-level API
//!
//! ```rust
//! use oxiarith_codec::{ArithmeticDecoder, ArithmeticEncoder, CoderConfig, EOF_SYMBOL};
//!
//! let symbols = [65, 66, 65, 67, 65, EOF_SYMBOL];
//!
//! let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
//! let (bits, model) = encoder.encode(&symbols).unwrap();
//!
//! let decoder = ArithmeticDecoder::new(CoderConfig::DEFAULT).unwrap();
//! assert_eq!(decoder.decode(&bits, &model).unwrap(), vec![65, 66, 65, 67, 65]);
//! ```
//!
//! ## Truncated input
//!
//! The decoder treats bits past the end of the stream as zeros. A damaged
//! payload (as opposed to a damaged model table) is not detected and decodes
//! to an arbitrary symbol sequence of at most `model.total()` symbols.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod container;
mod decoder;
mod encoder;
mod model;
mod range;
mod symbol;

pub use config::CoderConfig;
pub use container::{Container, ENTRY_SIZE, HEADER_SIZE};
pub use decoder::ArithmeticDecoder;
pub use encoder::ArithmeticEncoder;
pub use model::{CumulativeInterval, CumulativeTable, FrequencyModel};
pub use oxiarith_core::error::{OxiArithError, Result};
pub use symbol::{EOF_SYMBOL, Symbol, symbols_to_bytes, symbols_with_eof};

/// Encode a symbol sequence, returning the bits and the model built for it.
///
/// This is equivalent to `ArithmeticEncoder::new(config)?.encode(symbols)`.
pub fn encode(symbols: &[Symbol], config: CoderConfig) -> Result<(Vec<bool>, FrequencyModel)> {
    ArithmeticEncoder::new(config)?.encode(symbols)
}

/// Decode a bit sequence with the model it was encoded against.
///
/// This is equivalent to `ArithmeticDecoder::new(config)?.decode(bits, model)`.
pub fn decode(bits: &[bool], model: &FrequencyModel, config: CoderConfig) -> Result<Vec<Symbol>> {
    ArithmeticDecoder::new(config)?.decode(bits, model)
}

/// Compress bytes into a container.
///
/// The bytes are mapped to symbols, [`EOF_SYMBOL`] is appended, and the
/// encoded bits are serialized together with the model.
///
/// # Example
///
/// ```rust
/// use oxiarith_codec::{CoderConfig, compress};
///
/// let data = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab";
/// let compressed = compress(data, CoderConfig::DEFAULT).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: CoderConfig) -> Result<Vec<u8>> {
    let symbols = symbols_with_eof(data);
    let (bits, model) = encode(&symbols, config)?;
    Container::new(model, bits).to_bytes()
}

/// Decompress a container produced by [`compress`].
///
/// # Errors
///
/// Returns [`OxiArithError::ModelFormat`] for a malformed model table and
/// [`OxiArithError::NonByteSymbol`] if a decoded symbol is not a byte.
pub fn decompress(data: &[u8], config: CoderConfig) -> Result<Vec<u8>> {
    let (model, bits) = Container::from_bytes(data)?.into_parts();
    let symbols = decode(&bits, &model, config)?;
    symbols_to_bytes(&symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"Esto es un texto de prueba";
        let compressed = compress(original, CoderConfig::DEFAULT).unwrap();
        let decompressed = decompress(&compressed, CoderConfig::DEFAULT).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_empty_bytes_roundtrip() {
        // Only the sentinel is encoded.
        let compressed = compress(b"", CoderConfig::DEFAULT).unwrap();
        let decompressed = decompress(&compressed, CoderConfig::DEFAULT).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original, CoderConfig::DEFAULT).unwrap();
        let decompressed = decompress(&compressed, CoderConfig::DEFAULT).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original, CoderConfig::DEFAULT).unwrap();

        // Nearly all probability mass on one symbol
        assert!(compressed.len() < original.len() / 10);

        let decompressed = decompress(&compressed, CoderConfig::DEFAULT).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_non_byte_symbol_rejected() {
        let (bits, model) = encode(&[65, 400, 65], CoderConfig::DEFAULT).unwrap();
        let data = Container::new(model, bits).to_bytes().unwrap();
        let err = decompress(&data, CoderConfig::DEFAULT).unwrap_err();
        assert!(matches!(err, OxiArithError::NonByteSymbol { symbol: 400 }));
    }
}
