// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Linear Code CLI
//!
//! Builds a binary linear code, prints its generator and parity-check matrices
//! and optionally encodes or decodes a vector.

use anyhow::{Context, Result};
use clap::Parser;
use linear_code::utils::{format_bits, parse_bits, parse_matrix, print_matrix};
use linear_code::{load_config, verify_parity_matrix, LinearCode, MatrixLike};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Build a binary [n, k] linear code, derive its parity-check matrix and encode/decode vectors."
)]
struct Args {
    /// YAML configuration file (values may also come from LINEAR_CODE_* variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Codeword length n
    #[arg(long)]
    length: Option<usize>,

    /// Message dimension k
    #[arg(long)]
    dimension: Option<usize>,

    /// Seed for the random part of the generator matrix
    #[arg(long)]
    seed: Option<u64>,

    /// Generator matrix rows separated by ';', e.g. "101;011"
    #[arg(long)]
    matrix: Option<String>,

    /// Message to encode, e.g. "10"
    #[arg(long)]
    encode: Option<String>,

    /// Codeword to decode, e.g. "101"
    #[arg(long)]
    decode: Option<String>,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    setup_simple_tracing(if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    });

    let mut config = load_config(args.config.as_deref()).context("Could not load configuration")?;
    if let Some(length) = args.length {
        config.length = length;
    }
    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(matrix) = &args.matrix {
        config.matrix = Some(parse_matrix(matrix)?);
    }
    info!(?config, "resolved configuration");

    println!("=== Linear Code Generator ===");
    println!("Code length: {}", config.length);
    println!("Code dimension: {}", config.dimension);
    println!(
        "Expected parity matrix size: {} x {}",
        config.length.saturating_sub(config.dimension),
        config.length
    );

    let code = LinearCode::from_config(&config)?;
    print_matrix("Generator Matrix G", code.generator_matrix() as &dyn MatrixLike);

    let h = code.parity_check_matrix()?;
    print_matrix("Parity Matrix H", &h as &dyn MatrixLike);

    // Verify correctness
    verify_parity_matrix(code.generator_matrix(), &h)?;
    println!("✓ Verification passed: G · H^T = 0 (mod 2)");

    if let Some(message) = &args.encode {
        let message = parse_bits(message)?;
        let codeword = code.encode(&message)?;
        println!(
            "Encode {} -> {}",
            format_bits(&message),
            format_bits(&codeword)
        );
    }

    if let Some(codeword) = &args.decode {
        let codeword = parse_bits(codeword)?;
        let message = code.decode(&codeword)?;
        println!(
            "Decode {} -> {}",
            format_bits(&codeword),
            format_bits(&message)
        );
    }

    Ok(())
}
