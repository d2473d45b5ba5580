//! Decompress command implementation.

use oxiarith_codec::{ArithmeticDecoder, CoderConfig, Container, symbols_to_bytes};
use std::path::Path;
use tracing::info;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    config: CoderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let container = Container::load(input)?;

    let decoder = ArithmeticDecoder::new(config)?;
    let symbols = decoder.decode(container.bits(), container.model())?;

    let data = symbols_to_bytes(&symbols)?;
    std::fs::write(output, &data)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = data.len(),
        "decompressed"
    );

    println!("{} -> {}", input.display(), output.display());
    println!("  Restored size: {} bytes", data.len());

    Ok(())
}
