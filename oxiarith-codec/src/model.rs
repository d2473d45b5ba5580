//! Order-0 frequency model.
//!
//! The model records how often each symbol occurs, in the order the symbols
//! first appear. That insertion order (not symbol value order) defines the
//! cumulative intervals, so the encoder and decoder must see identical
//! models to agree on the interval layout.

use crate::symbol::Symbol;
use oxiarith_core::error::{OxiArithError, Result};
use std::collections::HashMap;

/// Symbol occurrence counts in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel {
    /// `(symbol, count)` pairs in model order.
    entries: Vec<(Symbol, u64)>,
    /// Symbol -> position in `entries` (lookup only, never iterated).
    index: HashMap<Symbol, usize>,
    /// Sum of all counts.
    total: u64,
}

impl FrequencyModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from one pass over `symbols`.
    pub fn build(symbols: &[Symbol]) -> Self {
        let mut model = Self::new();
        for &symbol in symbols {
            model.add(symbol);
        }
        model
    }

    /// Rebuild a model from stored `(symbol, count)` pairs, keeping their order.
    ///
    /// Duplicate symbols and zero counts cannot come from [`FrequencyModel::build`]
    /// and are rejected as format errors.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        let mut model = Self::new();
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(OxiArithError::model_format(format!(
                    "symbol {symbol} has a zero count"
                )));
            }
            if model.index.contains_key(&symbol) {
                return Err(OxiArithError::model_format(format!(
                    "symbol {symbol} appears more than once"
                )));
            }
            model.index.insert(symbol, model.entries.len());
            model.entries.push((symbol, count));
            model.total = model
                .total
                .checked_add(count)
                .ok_or_else(|| OxiArithError::model_format("total count overflows"))?;
        }
        Ok(model)
    }

    /// Record one occurrence of `symbol`.
    fn add(&mut self, symbol: Symbol) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
        self.total += 1;
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Occurrence count of `symbol`, if present.
    pub fn count(&self, symbol: Symbol) -> Option<u64> {
        self.index.get(&symbol).map(|&pos| self.entries[pos].1)
    }

    /// Alphabet in model order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|&(symbol, _)| symbol)
    }

    /// `(symbol, count)` pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Derive the cumulative interval table.
    pub fn cumulative(&self) -> CumulativeTable {
        let mut intervals = Vec::with_capacity(self.entries.len());
        let mut acc = 0u64;
        for &(symbol, count) in &self.entries {
            intervals.push(CumulativeInterval {
                symbol,
                low: acc,
                high: acc + count,
            });
            acc += count;
        }

        CumulativeTable {
            intervals,
            index: self.index.clone(),
            total: self.total,
        }
    }
}

/// Half-open interval `[low, high)` of the model total assigned to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeInterval {
    /// The symbol.
    pub symbol: Symbol,
    /// Inclusive lower bound.
    pub low: u64,
    /// Exclusive upper bound.
    pub high: u64,
}

impl CumulativeInterval {
    /// Whether `value` falls inside the interval.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.low <= value && value < self.high
    }
}

/// Contiguous cumulative intervals in model order, covering `[0, total)`.
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    intervals: Vec<CumulativeInterval>,
    index: HashMap<Symbol, usize>,
    total: u64,
}

impl CumulativeTable {
    /// Sum of all counts (the exclusive end of the last interval).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Intervals in model order.
    pub fn intervals(&self) -> &[CumulativeInterval] {
        &self.intervals
    }

    /// Interval assigned to `symbol`.
    #[inline]
    pub fn interval(&self, symbol: Symbol) -> Option<CumulativeInterval> {
        self.index.get(&symbol).map(|&pos| self.intervals[pos])
    }

    /// Interval containing `value`.
    ///
    /// Intervals are stored in model order with ascending bounds, so a binary
    /// search on the upper bound finds the unique match.
    #[inline]
    pub fn find(&self, value: u64) -> Option<CumulativeInterval> {
        let pos = self.intervals.partition_point(|iv| iv.high <= value);
        self.intervals.get(pos).copied().filter(|iv| iv.contains(value))
    }
}
