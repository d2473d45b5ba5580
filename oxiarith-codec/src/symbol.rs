//! Symbol alphabet conventions.

use oxiarith_core::error::{OxiArithError, Result};

/// A coded symbol: `0..=255` are byte values, [`EOF_SYMBOL`] marks the end.
///
/// Any `u16` is accepted by the coder; the byte/sentinel split is only a
/// caller convention.
pub type Symbol = u16;

/// Reserved end-of-stream sentinel.
pub const EOF_SYMBOL: Symbol = 256;

/// Convert bytes into a symbol sequence terminated by [`EOF_SYMBOL`].
pub fn symbols_with_eof(data: &[u8]) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(data.len() + 1);
    symbols.extend(data.iter().map(|&b| Symbol::from(b)));
    symbols.push(EOF_SYMBOL);
    symbols
}

/// Convert decoded symbols back into bytes.
///
/// Fails with [`OxiArithError::NonByteSymbol`] on the first symbol above 255.
pub fn symbols_to_bytes(symbols: &[Symbol]) -> Result<Vec<u8>> {
    symbols
        .iter()
        .map(|&symbol| u8::try_from(symbol).map_err(|_| OxiArithError::non_byte_symbol(symbol)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_with_eof() {
        assert_eq!(symbols_with_eof(b"AB"), vec![65, 66, EOF_SYMBOL]);
        assert_eq!(symbols_with_eof(b""), vec![EOF_SYMBOL]);
    }

    #[test]
    fn test_symbols_to_bytes() {
        assert_eq!(symbols_to_bytes(&[104, 105]).unwrap(), b"hi".to_vec());
        assert!(matches!(
            symbols_to_bytes(&[104, EOF_SYMBOL]),
            Err(OxiArithError::NonByteSymbol { symbol: 256 })
        ));
    }
}
