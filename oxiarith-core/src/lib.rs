//! # OxiArith Core
//!
//! Core components for the OxiArith arithmetic coding library.
//!
//! - [`bitstream`]: MSB-first packing between bit sequences and bytes
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     compress / decompress / info                        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency model, arithmetic coder, container        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     Bit packing, zero-fill bit source, errors           │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter, ZeroFillBitSource, pack_bits, unpack_bits};
pub use error::{OxiArithError, Result};
