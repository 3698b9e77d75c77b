//! Fixed-width renewal record and its encoder.

use std::fmt;

use log::{debug, error};

use crate::error::{RecordError, Result};
use crate::field::fit;
use crate::layout::{FIELDS, FieldSpec, RECORD_WIDTH};

/// One encoded 511-character record.
///
/// Records are only produced by [`encode_record`], which guarantees the
/// width. Field slots are read back by column range or layout name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    index: u32,
    data: String,
}

impl Record {
    /// The index this record was generated from.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Extract `len` characters starting at column `start`.
    ///
    /// Ranges past the end of the record are clipped.
    pub fn field(&self, start: usize, len: usize) -> &str {
        let end = (start + len).min(self.data.len());
        let start = start.min(end);
        &self.data[start..end]
    }

    /// Extract the slot of a layout field by name.
    pub fn named(&self, name: &str) -> Option<&str> {
        crate::layout::field(name).map(|f| self.field(f.offset, f.len))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// The unpadded value of `field` for record `index`.
pub fn field_value(field: &FieldSpec, index: u32) -> String {
    field.source.value(index)
}

/// Encode record `index` according to the layout.
///
/// Each field value is padded or truncated to its slot width and the
/// slots are joined in column order. A result that is not exactly
/// [`RECORD_WIDTH`] characters long is reported as
/// [`RecordError::LengthMismatch`].
pub fn encode_record(index: u32) -> Result<Record> {
    encode_with(&FIELDS, index)
}

fn encode_with(fields: &[FieldSpec], index: u32) -> Result<Record> {
    let mut data = String::with_capacity(RECORD_WIDTH);
    for f in fields {
        data.push_str(&fit(&field_value(f, index), f.len));
    }

    let actual = data.chars().count();
    if actual != RECORD_WIDTH {
        error!("record {index} encoded to {actual} chars, expected {RECORD_WIDTH}");
        return Err(RecordError::LengthMismatch {
            index,
            actual,
            expected: RECORD_WIDTH,
        });
    }

    debug!("encoded record {index}");
    Ok(Record { index, data })
}
