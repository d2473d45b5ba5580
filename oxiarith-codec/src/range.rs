//! Working interval shared by the encoder and decoder.
//!
//! Both sides run the same narrowing arithmetic and the same renormalization
//! tests; only what they do on each scaling step differs (emit bits vs. shift
//! in bits). Keeping the state machine here guarantees the two stay in step.

use crate::config::CoderConfig;
use crate::model::CumulativeInterval;

/// Renormalization step chosen for the current interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scale {
    /// E2: interval entirely in the lower half. Leading bit is 0.
    Lower,
    /// E3: interval entirely in the upper half. Leading bit is 1.
    Upper,
    /// E1: interval straddles the midpoint inside the middle half.
    Middle,
    /// No scaling applies.
    Done,
}

/// The `[low, high]` register pair, `precision` bits wide.
#[derive(Debug, Clone)]
pub(crate) struct WorkingRange {
    pub(crate) low: u64,
    pub(crate) high: u64,
    half: u64,
    quarter: u64,
    three_quarters: u64,
}

impl WorkingRange {
    /// Full range `[0, 2^precision - 1]`.
    pub(crate) fn new(config: &CoderConfig) -> Self {
        Self {
            low: 0,
            high: config.max_value(),
            half: config.half(),
            quarter: config.quarter(),
            three_quarters: config.three_quarters(),
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> u64 {
        self.high - self.low + 1
    }

    #[inline]
    pub(crate) fn quarter(&self) -> u64 {
        self.quarter
    }

    /// Shrink the range to the share of `interval` out of `total`.
    #[inline]
    pub(crate) fn narrow(&mut self, interval: CumulativeInterval, total: u64) {
        let width = u128::from(self.width());
        let total = u128::from(total);
        let upper = (width * u128::from(interval.high) / total) as u64;
        let lower = (width * u128::from(interval.low) / total) as u64;

        self.high = self.low + upper - 1;
        self.low += lower;
    }

    /// Pick the next renormalization step, in E2, E3, E1 priority order.
    #[inline]
    pub(crate) fn classify(&self) -> Scale {
        if self.high < self.half {
            Scale::Lower
        } else if self.low >= self.half {
            Scale::Upper
        } else if self.low >= self.quarter && self.high < self.three_quarters {
            Scale::Middle
        } else {
            Scale::Done
        }
    }

    /// Apply the offset for `scale` and double the range.
    ///
    /// Returns the offset subtracted, so the decoder can apply it to `code`.
    #[inline]
    pub(crate) fn rescale(&mut self, scale: Scale) -> u64 {
        let offset = match scale {
            Scale::Lower | Scale::Done => 0,
            Scale::Upper => self.half,
            Scale::Middle => self.quarter,
        };
        self.low -= offset;
        self.high -= offset;

        self.low <<= 1;
        self.high = (self.high << 1) | 1;
        offset
    }
}
