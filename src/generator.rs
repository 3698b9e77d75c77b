//! Batch generation of renewal records into a flat file.
//!
//! The whole batch is encoded and width-checked before the output file is
//! opened, so a failed run never leaves a partially written file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{RecordError, Result};
use crate::record::{Record, encode_record};

/// Number of records produced by a standard run.
pub const RECORD_COUNT: u32 = 50;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "sample_records.txt";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub count: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            count: RECORD_COUNT,
        }
    }
}

impl GeneratorConfig {
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub count: usize,
    pub path: PathBuf,
}

/// Encode records `1..=count` in index order.
pub fn generate_records(count: u32) -> Result<Vec<Record>> {
    (1..=count).map(encode_record).collect()
}

/// Write `records` to `path`, one per line, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| RecordError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| RecordError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(out, "{record}").map_err(|e| RecordError::io(path, e))?;
    }
    out.flush().map_err(|e| RecordError::io(path, e))?;
    Ok(())
}

/// Generate `config.count` records and write them to `config.output`.
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let records = generate_records(config.count)?;
    write_records(&config.output, &records)?;
    info!(
        "wrote {} records to {}",
        records.len(),
        config.output.display()
    );
    Ok(GenerationReport {
        count: records.len(),
        path: config.output.clone(),
    })
}
