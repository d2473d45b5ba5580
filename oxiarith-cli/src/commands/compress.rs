//! Compress command implementation.

use crate::utils::space_savings;
use oxiarith_codec::{ArithmeticEncoder, CoderConfig, Container, symbols_with_eof};
use std::path::Path;
use tracing::info;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    config: CoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let symbols = symbols_with_eof(&data);

    let encoder = ArithmeticEncoder::new(config)?;
    let (bits, model) = encoder.encode(&symbols)?;
    let bit_count = bits.len();

    let container = Container::new(model, bits);
    container.save(output)?;
    let written = std::fs::metadata(output)?.len();

    info!(
        input = %input.display(),
        output = %output.display(),
        precision = config.precision,
        "compressed"
    );

    println!("{} -> {}", input.display(), output.display());
    println!("  Input size: {} bytes", data.len());
    println!(
        "  Symbols: {} ({} distinct)",
        symbols.len(),
        container.model().len()
    );
    println!("  Coded bits: {}", bit_count);
    println!("  Output size: {} bytes", written);
    if !data.is_empty() {
        println!(
            "  Space savings: {:.1}%",
            space_savings(data.len() as u64, written)
        );
    }

    Ok(())
}
