//! Convert positioned text fragments to ledger CSV.
//!
//! Reads a JSON array of fragments (`{"text", "x", "y", "width",
//! "height", "page"}`) as produced by the PDF glyph-extraction step,
//! reconstructs the table, and writes CSV to stdout or a file.
//!
//! Usage:
//!   cargo run --release --bin fragments_to_csv -- fragments.json
//!   cargo run --release --bin fragments_to_csv -- fragments.json --output table.csv --bom

use ledgerlift::{fragments_from_json, TableExtractor};
use std::fs;
use std::path::PathBuf;

struct CliConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    bom: bool,
}

impl CliConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut bom = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(PathBuf::from(&args[i]));
                    }
                },
                "--bom" => {
                    bom = true;
                },
                "--help" | "-h" => return None,
                other => {
                    if input.is_none() {
                        input = Some(PathBuf::from(other));
                    }
                },
            }
            i += 1;
        }

        input.map(|input| Self { input, output, bom })
    }
}

fn print_usage() {
    eprintln!("Usage: fragments_to_csv <fragments.json> [--output FILE] [--bom]");
    eprintln!();
    eprintln!("Reads a JSON array of positioned text fragments and writes the");
    eprintln!("reconstructed ledger table as CSV. --bom prepends a UTF-8 byte-order");
    eprintln!("mark so spreadsheet applications pick up the Devanagari text.");
}

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Some(config) => config,
        None => {
            print_usage();
            std::process::exit(2);
        },
    };

    let data = match fs::read_to_string(&config.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", config.input.display(), e);
            std::process::exit(1);
        },
    };

    let fragments = match fragments_from_json(&data) {
        Ok(fragments) => fragments,
        Err(e) => {
            eprintln!("Error parsing {}: {}", config.input.display(), e);
            std::process::exit(1);
        },
    };
    eprintln!("Loaded {} fragments", fragments.len());

    let extraction = match TableExtractor::new().extract(fragments) {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("Extraction failed: {}", e);
            std::process::exit(1);
        },
    };

    for warning in &extraction.warnings {
        eprintln!("Warning: {}", warning);
    }
    eprintln!(
        "Extracted {} rows x {} columns",
        extraction.table.len(),
        extraction.table.first().map_or(0, |r| r.len())
    );

    let csv = if config.bom {
        extraction.to_csv_with_bom()
    } else {
        extraction.to_csv()
    };

    match &config.output {
        Some(path) => {
            if let Err(e) = fs::write(path, csv) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            eprintln!("Wrote {}", path.display());
        },
        None => print!("{}", csv),
    }
}
