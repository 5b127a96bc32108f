//! Checks the calling layer applies before handing input to the analyzer.

use crate::config::MIN_INPUT_LEN;
use crate::error::{AnalysisError, Result};
use std::path::Path;

/// File extensions accepted for sequence files.
pub const ACCEPTED_EXTENSIONS: [&str; 9] =
    ["fasta", "fa", "fna", "fastq", "fq", "txt", "seq", "ffn", "faa"];

/// Trims and upper-cases typed-in sequence text, rejecting it when it is
/// too short or holds anything but A/T/G/C/N.
pub fn sequence(raw: &str) -> Result<String> {
    let seq = raw.trim().to_uppercase();
    if seq.chars().count() < MIN_INPUT_LEN {
        return Err(AnalysisError::InvalidInput(format!(
            "sequence is too short (minimum {} nucleotides)",
            MIN_INPUT_LEN
        )));
    }
    if let Some(bad) = seq.chars().find(|c| !"ATGCN".contains(*c)) {
        return Err(AnalysisError::InvalidInput(format!(
            "sequence contains '{}'; only A, T, G, C and N are allowed",
            bad
        )));
    }
    Ok(seq)
}

/// Accepts a path only when its extension is one of `ACCEPTED_EXTENSIONS`.
pub fn extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(AnalysisError::InvalidInput(format!(
            "{} is not a sequence file (accepted: {})",
            path.display(),
            ACCEPTED_EXTENSIONS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sequence_is_normalized() {
        assert_eq!(sequence("  acgtnacgtn \n").unwrap(), "ACGTNACGTN");
    }

    #[test]
    fn short_sequence_is_rejected() {
        assert!(matches!(sequence("ACGTACGTA"), Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn foreign_symbols_are_rejected() {
        match sequence("ACGTACGTACU") {
            Err(AnalysisError::InvalidInput(msg)) => assert!(msg.contains("'U'")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        // inner whitespace is not allowed either
        assert!(sequence("ACGTA CGTAC").is_err());
    }

    #[test]
    fn extensions() {
        assert!(extension(Path::new("reads.FASTQ")).is_ok());
        assert!(extension(Path::new("dir/genome.fna")).is_ok());
        assert!(extension(Path::new("table.tsv")).is_err());
        assert!(extension(Path::new("noext")).is_err());
    }
}
