//! Error types for sequence analysis.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures that end an analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Cleaning left nothing to analyze.
    #[error("sequence is empty or contains no A/T/G/C bases")]
    EmptySequence,

    /// No record could be extracted from the file by any parser.
    #[error("no valid sequences found in {}", path.display())]
    NoSequencesFound {
        /// The file that was read.
        path: PathBuf,
    },

    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input rejected before analysis.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
