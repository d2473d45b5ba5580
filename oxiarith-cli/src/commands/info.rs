//! Info command implementation.

use crate::utils::{ModelRow, model_rows, print_model_table};
use oxiarith_codec::Container;
use serde::Serialize;
use std::path::Path;

/// JSON summary of a container.
#[derive(Debug, Serialize)]
struct ContainerJson {
    file: String,
    size: u64,
    symbols: usize,
    total: u64,
    table_bytes: usize,
    payload_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Vec<ModelRow>>,
}

pub fn cmd_info(
    container: &Path,
    table: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = std::fs::metadata(container)?.len();
    let parsed = Container::load(container)?;
    let model = parsed.model();
    let payload_bytes = parsed.bits().len() / 8;

    if json {
        let output = ContainerJson {
            file: container.display().to_string(),
            size,
            symbols: model.len(),
            total: model.total(),
            table_bytes: parsed.table_size(),
            payload_bytes,
            table: table.then(|| model_rows(model)),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", container.display());
    println!("Size: {} bytes", size);
    println!();
    println!("Model:");
    println!("  Distinct symbols: {}", model.len());
    println!("  Total count: {}", model.total());
    println!("  Table size: {} bytes", parsed.table_size());
    println!("  Payload size: {} bytes", payload_bytes);

    if table {
        println!();
        print_model_table(model);
    }

    Ok(())
}
