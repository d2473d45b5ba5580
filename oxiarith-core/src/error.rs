//! Error types for OxiArith operations.
//!
//! A single error enum covers the whole pipeline: container parsing, coder
//! configuration, encoding and decoding. I/O errors from the underlying
//! storage handle are propagated unchanged.

use std::io;
use thiserror::Error;

/// The main error type for OxiArith operations.
#[derive(Debug, Error)]
pub enum OxiArithError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The serialized frequency model is truncated or inconsistent.
    #[error("Invalid model format: {message}")]
    ModelFormat {
        /// Description of the format error.
        message: String,
    },

    /// Attempted to encode an empty symbol sequence.
    #[error("Cannot encode an empty symbol sequence")]
    EmptyInput,

    /// Coder precision outside the supported register width.
    #[error("Invalid precision: {precision} (must be {min}-{max})")]
    InvalidPrecision {
        /// Requested precision in bits.
        precision: u32,
        /// Smallest supported precision.
        min: u32,
        /// Largest supported precision.
        max: u32,
    },

    /// The model's total count does not fit the coder's quarter range.
    #[error("Model total {total} exceeds quarter range {quarter} at this precision")]
    ModelTooLarge {
        /// Sum of all symbol counts.
        total: u64,
        /// Quarter of the coder range.
        quarter: u64,
    },

    /// A symbol to encode is not part of the supplied model.
    #[error("Symbol {symbol} is not present in the frequency model")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: u16,
    },

    /// The alphabet is larger than the container can describe.
    #[error("Too many distinct symbols: {count} (max {max})")]
    TooManySymbols {
        /// Number of distinct symbols.
        count: usize,
        /// Maximum number the container can hold.
        max: usize,
    },

    /// The decoder computed a target value that matches no interval.
    #[error("Corrupted bitstream at bit position {bit_position}")]
    CorruptedStream {
        /// Number of bits consumed when the error was detected.
        bit_position: u64,
    },

    /// A decoded symbol does not represent a byte value.
    #[error("Decoded symbol {symbol} is not a byte value")]
    NonByteSymbol {
        /// The offending symbol.
        symbol: u16,
    },
}

/// Result type alias for OxiArith operations.
pub type Result<T> = std::result::Result<T, OxiArithError>;

impl OxiArithError {
    /// Create a model format error.
    pub fn model_format(message: impl Into<String>) -> Self {
        Self::ModelFormat {
            message: message.into(),
        }
    }

    /// Create an invalid precision error.
    pub fn invalid_precision(precision: u32, min: u32, max: u32) -> Self {
        Self::InvalidPrecision {
            precision,
            min,
            max,
        }
    }

    /// Create a model-too-large error.
    pub fn model_too_large(total: u64, quarter: u64) -> Self {
        Self::ModelTooLarge { total, quarter }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u16) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Create a too-many-symbols error.
    pub fn too_many_symbols(count: usize, max: usize) -> Self {
        Self::TooManySymbols { count, max }
    }

    /// Create a corrupted stream error.
    pub fn corrupted(bit_position: u64) -> Self {
        Self::CorruptedStream { bit_position }
    }

    /// Create a non-byte symbol error.
    pub fn non_byte_symbol(symbol: u16) -> Self {
        Self::NonByteSymbol { symbol }
    }
}
