//! Error types for record generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while encoding or writing records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// An encoded record did not come out at the layout width.
    #[error("generated record for index {index} is {actual} chars, expected {expected}")]
    LengthMismatch {
        index: u32,
        actual: usize,
        expected: usize,
    },

    /// The output file could not be created or written.
    #[error("error writing '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RecordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = RecordError::LengthMismatch {
            index: 7,
            actual: 510,
            expected: 511,
        };
        assert_eq!(
            err.to_string(),
            "generated record for index 7 is 510 chars, expected 511"
        );
    }

    #[test]
    fn test_io_message_names_path() {
        let err = RecordError::io(
            "out/records.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "error writing 'out/records.txt': denied");
    }
}
