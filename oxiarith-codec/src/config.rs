//! Coder configuration (register precision).

use oxiarith_core::error::{OxiArithError, Result};

/// Arithmetic coder configuration.
///
/// `precision` is the width in bits of the `low`/`high`/`code` registers.
/// Registers are held in `u64` and the interval-scaling multiply uses a
/// `u128` intermediate, which bounds precision to [`CoderConfig::MAX_PRECISION`].
/// The model total must additionally not exceed [`CoderConfig::quarter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoderConfig {
    /// Register width in bits.
    pub precision: u32,
}

impl CoderConfig {
    /// Smallest precision that still leaves `quarter >= 1`.
    pub const MIN_PRECISION: u32 = 2;

    /// Largest precision the `u64` registers support.
    pub const MAX_PRECISION: u32 = 62;

    /// Standard 32-bit configuration.
    pub const DEFAULT: Self = Self { precision: 32 };

    /// Create a new configuration with the given register precision.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Check that the precision is within the supported range.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_PRECISION..=Self::MAX_PRECISION).contains(&self.precision) {
            return Err(OxiArithError::invalid_precision(
                self.precision,
                Self::MIN_PRECISION,
                Self::MAX_PRECISION,
            ));
        }
        Ok(())
    }

    /// Largest register value, `2^precision - 1`.
    pub fn max_value(&self) -> u64 {
        (1u64 << self.precision) - 1
    }

    /// Midpoint of the register range, `2^(precision-1)`.
    pub fn half(&self) -> u64 {
        1u64 << (self.precision - 1)
    }

    /// First quarter point of the register range.
    pub fn quarter(&self) -> u64 {
        self.half() >> 1
    }

    /// Third quarter point of the register range.
    pub fn three_quarters(&self) -> u64 {
        3 * self.quarter()
    }

    /// Check that a model total fits the coder range.
    ///
    /// After renormalization the working interval is always wider than a
    /// quarter, so a total no larger than `quarter` gives every symbol a
    /// non-empty sub-interval.
    pub fn check_total(&self, total: u64) -> Result<()> {
        if total == 0 {
            return Err(OxiArithError::EmptyInput);
        }
        if total > self.quarter() {
            return Err(OxiArithError::model_too_large(total, self.quarter()));
        }
        Ok(())
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
