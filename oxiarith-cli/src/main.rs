//! OxiArith CLI - integer arithmetic coding for files
//!
//! Compresses a file into an OxiArith container (frequency table plus packed
//! bitstream), restores it, and inspects container contents.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info};
use oxiarith_codec::CoderConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiarith")]
#[command(author, version, about = "Order-0 arithmetic coding in pure Rust")]
#[command(long_about = "
OxiArith compresses files with a static order-0 arithmetic coder.
The container stores the symbol frequency table followed by the coded bits.

The register precision is not stored in the container: use the same
--precision value for compress and decompress.

Examples:
  oxiarith compress notes.txt notes.oxa
  oxiarith decompress notes.oxa notes.txt
  oxiarith info notes.oxa --table
  oxiarith compress -p 24 notes.txt notes.oxa

Set OXIARITH_LOG (e.g. OXIARITH_LOG=debug) to control log output.
")]
struct Cli {
    /// Show verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a container
    #[command(alias = "c")]
    Compress {
        /// Input file
        input: PathBuf,

        /// Output container
        output: PathBuf,

        /// Coder register precision in bits
        #[arg(short, long, default_value_t = CoderConfig::DEFAULT.precision)]
        precision: u32,
    },

    /// Restore a file from a container
    #[command(alias = "d")]
    Decompress {
        /// Input container
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Coder register precision in bits (must match compression)
        #[arg(short, long, default_value_t = CoderConfig::DEFAULT.precision)]
        precision: u32,
    },

    /// Show information about a container
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        container: PathBuf,

        /// Print the frequency table
        #[arg(short, long)]
        table: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            precision,
        } => cmd_compress(&input, &output, CoderConfig::new(precision)),
        Commands::Decompress {
            input,
            output,
            precision,
        } => cmd_decompress(&input, &output, CoderConfig::new(precision)),
        Commands::Info {
            container,
            table,
            json,
        } => cmd_info(&container, table, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
