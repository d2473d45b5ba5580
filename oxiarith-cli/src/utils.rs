//! Utility functions for the CLI.

use oxiarith_codec::{EOF_SYMBOL, FrequencyModel, Symbol};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "OXIARITH_LOG";

/// Install the stderr log subscriber.
///
/// `OXIARITH_LOG` takes precedence; otherwise `--verbose` selects `debug`
/// and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Percentage of space saved going from `original` to `compressed` bytes.
pub fn space_savings(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Human-readable label for a symbol.
pub fn symbol_label(symbol: Symbol) -> String {
    match symbol {
        EOF_SYMBOL => "EOF".to_string(),
        0x21..=0x7E => format!("'{}'", symbol as u8 as char),
        0x20 => "' '".to_string(),
        _ => format!("{:#04x}", symbol),
    }
}

/// One line of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRow {
    pub symbol: Symbol,
    pub count: u64,
    pub probability: f64,
    /// Cumulative lower bound as a fraction of the total.
    pub low: f64,
    /// Cumulative upper bound as a fraction of the total.
    pub high: f64,
}

/// Frequency table rows, sorted by symbol value for display.
///
/// Cumulative bounds still come from model order, which is what the coder uses.
pub fn model_rows(model: &FrequencyModel) -> Vec<ModelRow> {
    let table = model.cumulative();
    let total = table.total() as f64;

    let mut rows: Vec<ModelRow> = table
        .intervals()
        .iter()
        .map(|iv| ModelRow {
            symbol: iv.symbol,
            count: iv.high - iv.low,
            probability: (iv.high - iv.low) as f64 / total,
            low: iv.low as f64 / total,
            high: iv.high as f64 / total,
        })
        .collect();
    rows.sort_by_key(|row| row.symbol);
    rows
}

/// Print the frequency table.
pub fn print_model_table(model: &FrequencyModel) {
    println!("{}", "=".repeat(72));
    println!(
        "{:<10} | {:>10} | {:>12} | {:>12} | {:>12}",
        "Symbol", "Frequency", "Probability", "Low", "High"
    );
    println!("{}", "=".repeat(72));

    for row in model_rows(model) {
        println!(
            "{:<10} | {:>10} | {:>12.6} | {:>12.6} | {:>12.6}",
            symbol_label(row.symbol),
            row.count,
            row.probability,
            row.low,
            row.high
        );
    }

    println!("{}", "=".repeat(72));
}
