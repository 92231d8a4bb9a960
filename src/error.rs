//! Failures of a run: reading the input or writing the report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordCountError>;

#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordCountError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
