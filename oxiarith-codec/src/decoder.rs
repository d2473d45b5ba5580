//! Arithmetic decoder (decompression).
//!
//! The decoder replays the encoder's interval arithmetic. Instead of
//! emitting bits on each renormalization step it shifts one more input bit
//! into a `code` register that always lies inside the working range.

use crate::config::CoderConfig;
use crate::model::{CumulativeTable, FrequencyModel};
use crate::range::{Scale, WorkingRange};
use crate::symbol::{EOF_SYMBOL, Symbol};
use oxiarith_core::bitstream::ZeroFillBitSource;
use oxiarith_core::error::{OxiArithError, Result};
use tracing::{debug, trace, warn};

/// Integer arithmetic decoder.
#[derive(Debug, Clone)]
pub struct ArithmeticDecoder {
    config: CoderConfig,
}

impl ArithmeticDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: CoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the decoder configuration.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    /// Decode a bit sequence produced by
    /// [`ArithmeticEncoder`](crate::ArithmeticEncoder) with the same model.
    ///
    /// # Termination
    ///
    /// If the model contains [`EOF_SYMBOL`], decoding stops when the sentinel
    /// is decoded and the sentinel is not included in the output. Otherwise
    /// exactly `model.total()` symbols are decoded. Decoding never produces
    /// more than `model.total()` symbols.
    ///
    /// # Underrun
    ///
    /// Bits past the end of `bits` are read as 0. A truncated or corrupted
    /// stream therefore decodes to some symbol sequence rather than failing.
    pub fn decode(&self, bits: &[bool], model: &FrequencyModel) -> Result<Vec<Symbol>> {
        self.config.check_total(model.total())?;

        let table = model.cumulative();
        let has_eof = model.contains(EOF_SYMBOL);
        let limit = usize::try_from(model.total()).unwrap_or(usize::MAX);

        let mut state = DecoderState::new(&self.config, bits);
        let mut output = Vec::with_capacity(limit.min(bits.len().max(16)));

        loop {
            if output.len() >= limit {
                if has_eof {
                    warn!(
                        decoded = output.len(),
                        "model total reached without an end-of-stream symbol"
                    );
                }
                break;
            }

            let symbol = state.decode_symbol(&table)?;
            if symbol == EOF_SYMBOL {
                break;
            }
            output.push(symbol);
        }

        debug!(
            symbols = output.len(),
            bits = bits.len(),
            precision = self.config.precision,
            "arithmetic decode complete"
        );
        trace!(
            underrun_bits = state.source.underrun_bits(),
            "decoder read past end of bitstream"
        );

        Ok(output)
    }
}

/// Per-call decoder registers and input cursor.
struct DecoderState<'a> {
    range: WorkingRange,
    code: u64,
    source: ZeroFillBitSource<'a>,
}

impl<'a> DecoderState<'a> {
    fn new(config: &CoderConfig, bits: &'a [bool]) -> Self {
        let mut source = ZeroFillBitSource::new(bits);
        let mut code = 0u64;
        for _ in 0..config.precision {
            code = (code << 1) | source.next_bit();
        }

        Self {
            range: WorkingRange::new(config),
            code,
            source,
        }
    }

    /// Decode one symbol and consume the bits its renormalization needs.
    fn decode_symbol(&mut self, table: &CumulativeTable) -> Result<Symbol> {
        let total = u128::from(table.total());
        let width = u128::from(self.range.width());
        let offset = u128::from(self.code - self.range.low);
        let value = ((offset + 1) * total - 1) / width;

        let interval = u64::try_from(value)
            .ok()
            .and_then(|v| table.find(v))
            .ok_or_else(|| OxiArithError::corrupted(self.source.bits_read()))?;

        if interval.symbol == EOF_SYMBOL {
            return Ok(EOF_SYMBOL);
        }

        self.range.narrow(interval, table.total());
        debug_assert!(self.range.low <= self.code && self.code <= self.range.high);

        loop {
            let scale = self.range.classify();
            if scale == Scale::Done {
                break;
            }
            let shift = self.range.rescale(scale);
            self.code = ((self.code - shift) << 1) | self.source.next_bit();
        }

        Ok(interval.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::ArithmeticEncoder;

    fn roundtrip(input: &[Symbol], config: CoderConfig) -> Vec<Symbol> {
        let encoder = ArithmeticEncoder::new(config).unwrap();
        let (bits, model) = encoder.encode(input).unwrap();
        let decoder = ArithmeticDecoder::new(config).unwrap();
        decoder.decode(&bits, &model).unwrap()
    }

    #[test]
    fn test_decode_stops_at_eof() {
        let input = [10, 20, 10, 30, EOF_SYMBOL];
        assert_eq!(roundtrip(&input, CoderConfig::DEFAULT), vec![10, 20, 10, 30]);
    }

    #[test]
    fn test_decode_without_eof_uses_total() {
        let input = [3, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(roundtrip(&input, CoderConfig::DEFAULT), input.to_vec());
    }

    #[test]
    fn test_decode_degenerate_alphabet() {
        let input = [65, 65, 65, 65, EOF_SYMBOL];
        assert_eq!(roundtrip(&input, CoderConfig::DEFAULT), vec![65; 4]);

        let input = [65, 65, 65];
        assert_eq!(roundtrip(&input, CoderConfig::DEFAULT), vec![65; 3]);
    }

    #[test]
    fn test_decode_hand_encoded_stream() {
        // Stream from the encoder test: [0, 1] at precision 8.
        let model = FrequencyModel::build(&[0, 1]);
        let bits = [false, true, false, true];
        let decoder = ArithmeticDecoder::new(CoderConfig::new(8)).unwrap();
        assert_eq!(decoder.decode(&bits, &model).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_decode_small_precision() {
        // total 6 fits the quarter (8) at precision 5.
        let input = [65, 66, 65, 67, 65, EOF_SYMBOL];
        assert_eq!(roundtrip(&input, CoderConfig::new(5)), vec![65, 66, 65, 67, 65]);
    }

    #[test]
    fn test_decode_long_skewed_stream() {
        let mut input: Vec<Symbol> = (0..2000).map(|i| if i % 17 == 0 { 1 } else { 0 }).collect();
        input.push(EOF_SYMBOL);
        let decoded = roundtrip(&input, CoderConfig::DEFAULT);
        assert_eq!(decoded, &input[..input.len() - 1]);
    }

    #[test]
    fn test_decode_empty_bits_terminates() {
        // All-zero input selects the first symbol until the model total is hit.
        let model = FrequencyModel::build(&[7, 7, 8, EOF_SYMBOL]);
        let decoder = ArithmeticDecoder::new(CoderConfig::DEFAULT).unwrap();
        let decoded = decoder.decode(&[], &model).unwrap();
        assert!(decoded.len() <= 4);
        assert!(decoded.iter().all(|&s| s == 7));
    }

    #[test]
    fn test_decode_empty_model_fails() {
        let decoder = ArithmeticDecoder::new(CoderConfig::DEFAULT).unwrap();
        let err = decoder.decode(&[true], &FrequencyModel::new()).unwrap_err();
        assert!(matches!(err, OxiArithError::EmptyInput));
    }
}
