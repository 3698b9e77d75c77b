//! # renewal-records
//!
//! Generates synthetic 511-character fixed-width renewal records.
//!
//! Each record is a single line of 27 contiguous fields: event and country
//! codes, reference numbers, a pseudo renewal date, an amount, a narrative
//! and blank fillers. Values are derived deterministically from the record
//! index, so the same index always produces the same line.
//!
//! ## Example
//!
//! ```
//! use renewal_records::{RECORD_WIDTH, encode_record};
//!
//! let record = encode_record(5).unwrap();
//! assert_eq!(record.as_str().len(), RECORD_WIDTH);
//! assert_eq!(record.named("eventAmount").unwrap().trim_end(), "1050");
//! assert_eq!(record.field(0, 2), "EC");
//! ```

pub mod error;
pub mod field;
pub mod generator;
pub mod layout;
pub mod record;

pub use error::{RecordError, Result};
pub use field::{fit, pad_or_truncate};
pub use generator::{
    DEFAULT_OUTPUT, GenerationReport, GeneratorConfig, RECORD_COUNT, generate_records, run,
    write_records,
};
pub use layout::{FIELDS, FieldSource, FieldSpec, RECORD_WIDTH};
pub use record::{Record, encode_record, field_value};
