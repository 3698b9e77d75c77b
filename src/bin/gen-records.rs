//! CLI tool to generate the sample renewal record file.
//!
//! Usage:
//!   gen-records
//!   gen-records -o <output.txt> -v
//!
//! With no arguments, writes 50 records to `sample_records.txt`.

use clap::Parser;
use renewal_records::{DEFAULT_OUTPUT, GeneratorConfig, RECORD_WIDTH, run};
use std::path::PathBuf;
use std::process;

/// Generate 511-character fixed-width renewal records.
#[derive(Parser)]
#[command(name = "gen-records")]
struct Cli {
    /// Write records to this file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Show output path and record details on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig::with_output(cli.output);

    if cli.verbose {
        eprintln!("Output:  {}", config.output.display());
        eprintln!("Records: {} x {RECORD_WIDTH} chars", config.count);
    }

    match run(&config) {
        Ok(report) => {
            println!(
                "Successfully generated {} records in '{}'.",
                report.count,
                report.path.display()
            );
        }
        Err(e) => {
            eprintln!("Generation error: {e}");
            process::exit(1);
        }
    }
}
