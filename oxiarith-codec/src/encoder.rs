//! Arithmetic encoder (compression).

use crate::config::CoderConfig;
use crate::model::{CumulativeTable, FrequencyModel};
use crate::range::{Scale, WorkingRange};
use crate::symbol::Symbol;
use oxiarith_core::error::{OxiArithError, Result};
use tracing::{debug, trace};

/// Integer arithmetic encoder.
#[derive(Debug, Clone)]
pub struct ArithmeticEncoder {
    config: CoderConfig,
}

impl ArithmeticEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: CoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the encoder configuration.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    /// Build a frequency model for `symbols` and encode them with it.
    ///
    /// # Returns
    ///
    /// The emitted bit sequence and the model needed to decode it.
    pub fn encode(&self, symbols: &[Symbol]) -> Result<(Vec<bool>, FrequencyModel)> {
        if symbols.is_empty() {
            return Err(OxiArithError::EmptyInput);
        }

        let model = FrequencyModel::build(symbols);
        let bits = self.encode_with_model(symbols, &model)?;
        Ok((bits, model))
    }

    /// Encode `symbols` against an existing model.
    ///
    /// # Algorithm
    ///
    /// For every symbol the working range is narrowed to the symbol's share
    /// of the model total, then renormalized:
    /// 1. E2 (range in lower half): emit 0 followed by pending 1s
    /// 2. E3 (range in upper half): emit 1 followed by pending 0s
    /// 3. E1 (range in middle half): defer one bit as pending
    ///
    /// After the last symbol one more pending bit is added and two final
    /// bits select a value inside the remaining range.
    pub fn encode_with_model(
        &self,
        symbols: &[Symbol],
        model: &FrequencyModel,
    ) -> Result<Vec<bool>> {
        if symbols.is_empty() {
            return Err(OxiArithError::EmptyInput);
        }
        self.config.check_total(model.total())?;

        let table = model.cumulative();
        let mut state = EncoderState::new(&self.config, symbols.len());

        for &symbol in symbols {
            state.encode_symbol(&table, symbol)?;
        }
        state.finish();

        debug!(
            symbols = symbols.len(),
            alphabet = model.len(),
            bits = state.output.len(),
            precision = self.config.precision,
            "arithmetic encode complete"
        );
        trace!(
            max_pending = state.max_pending,
            underflow_steps = state.underflow_steps,
            "encoder renormalization"
        );

        Ok(state.output)
    }
}

/// Per-call encoder registers and output.
struct EncoderState {
    range: WorkingRange,
    pending: usize,
    output: Vec<bool>,
    max_pending: usize,
    underflow_steps: u64,
}

impl EncoderState {
    fn new(config: &CoderConfig, symbol_count: usize) -> Self {
        Self {
            range: WorkingRange::new(config),
            pending: 0,
            output: Vec::with_capacity(symbol_count * 8),
            max_pending: 0,
            underflow_steps: 0,
        }
    }

    fn encode_symbol(&mut self, table: &CumulativeTable, symbol: Symbol) -> Result<()> {
        let interval = table
            .interval(symbol)
            .ok_or_else(|| OxiArithError::unknown_symbol(symbol))?;
        self.range.narrow(interval, table.total());

        loop {
            let scale = self.range.classify();
            match scale {
                Scale::Lower => self.emit_with_pending(false),
                Scale::Upper => self.emit_with_pending(true),
                Scale::Middle => {
                    self.pending += 1;
                    self.underflow_steps += 1;
                    self.max_pending = self.max_pending.max(self.pending);
                }
                Scale::Done => break,
            }
            self.range.rescale(scale);
        }

        Ok(())
    }

    /// Emit `bit`, then flush pending bits with the opposite polarity.
    fn emit_with_pending(&mut self, bit: bool) {
        self.output.push(bit);
        self.output.extend(std::iter::repeat_n(!bit, self.pending));
        self.pending = 0;
    }

    fn finish(&mut self) {
        self.pending += 1;
        let bit = self.range.low >= self.range.quarter();
        self.emit_with_pending(bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::ArithmeticDecoder;
    use crate::symbol::EOF_SYMBOL;

    #[test]
    fn test_encode_abaca() {
        let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
        let input = [65, 66, 65, 67, 65, EOF_SYMBOL];
        let (bits, model) = encoder.encode(&input).unwrap();

        assert_eq!(model.total(), 6);
        assert!(!bits.is_empty());

        // Verify round-trip
        let decoder = ArithmeticDecoder::new(CoderConfig::DEFAULT).unwrap();
        let decoded = decoder.decode(&bits, &model).unwrap();
        assert_eq!(decoded, vec![65, 66, 65, 67, 65]);
    }

    #[test]
    fn test_encode_single_symbol_without_eof() {
        let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
        let (bits, model) = encoder.encode(&[65, 65, 65]).unwrap();

        // The interval never narrows, so only the two termination bits appear.
        assert_eq!(bits, vec![false, true]);
        assert_eq!(model.count(65), Some(3));
    }

    #[test]
    fn test_encode_two_symbols_by_hand() {
        // [A, B] with equal counts: A takes the lower half, B the upper half
        // of the narrowed range.
        let encoder = ArithmeticEncoder::new(CoderConfig::new(8)).unwrap();
        let (bits, _) = encoder.encode(&[0, 1]).unwrap();

        // A: [0,127] -> E2 emits 0, range back to [0,255].
        // B: [128,255] -> E3 emits 1, range back to [0,255].
        // finish: low < quarter -> 0 then one pending 1.
        assert_eq!(bits, vec![false, true, false, true]);
    }

    #[test]
    fn test_pending_bits_take_opposite_polarity() {
        let mut state = EncoderState::new(&CoderConfig::new(8), 0);
        state.pending = 5;
        state.emit_with_pending(true);
        assert_eq!(state.output, vec![true, false, false, false, false, false]);
        assert_eq!(state.pending, 0);

        state.pending = 2;
        state.emit_with_pending(false);
        assert_eq!(&state.output[6..], &[false, true, true]);
    }

    #[test]
    fn test_encode_empty_fails() {
        let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
        assert!(matches!(
            encoder.encode(&[]),
            Err(OxiArithError::EmptyInput)
        ));
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
        let model = FrequencyModel::build(&[1, 2, 3]);
        let err = encoder.encode_with_model(&[1, 4], &model).unwrap_err();
        assert!(matches!(err, OxiArithError::UnknownSymbol { symbol: 4 }));
    }

    #[test]
    fn test_invalid_precision_rejected() {
        assert!(matches!(
            ArithmeticEncoder::new(CoderConfig::new(1)),
            Err(OxiArithError::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn test_model_too_large_for_precision() {
        // quarter at precision 4 is 4, the model total is 5.
        let encoder = ArithmeticEncoder::new(CoderConfig::new(4)).unwrap();
        let err = encoder.encode(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, OxiArithError::ModelTooLarge { .. }));
    }
}
