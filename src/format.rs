//! Input format detection from the first line of a file.

use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Formats an input file can be classified as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Fasta,
    Fastq,
    Tsv,
    Raw,
    Unknown,
}

/// Only nucleotides (N included) and whitespace, any case.
fn is_raw_line(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_whitespace() || "ATGCN".contains(c.to_ascii_uppercase()))
}

/// Classify a stripped first line.
pub fn classify(first_line: &str) -> InputFormat {
    if first_line.starts_with('>') {
        InputFormat::Fasta
    } else if first_line.starts_with('@') {
        InputFormat::Fastq
    } else if first_line.contains('\t') && first_line.to_lowercase().contains("sequence") {
        InputFormat::Tsv
    } else if is_raw_line(first_line) {
        InputFormat::Raw
    } else {
        InputFormat::Unknown
    }
}

/// Detects the format from the first line of `reader`. Read errors give `Unknown`.
pub fn detect<R: BufRead>(mut reader: R) -> InputFormat {
    let mut first_line = String::new();
    match reader.read_line(&mut first_line) {
        Ok(_) => classify(first_line.trim()),
        Err(err) => {
            log::debug!("format detection read failed: {}", err);
            InputFormat::Unknown
        }
    }
}

/// Detects the format of a file. A file that cannot be opened is `Unknown`.
pub fn detect_path(path: &Path) -> InputFormat {
    match File::open(path) {
        Ok(file) => detect(BufReader::new(file)),
        Err(err) => {
            log::debug!("cannot open {} for detection: {}", path.display(), err);
            InputFormat::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    fn detect_str(content: &str) -> InputFormat {
        detect(Cursor::new(content.as_bytes()))
    }

    #[test]
    fn detects_each_format() {
        assert_eq!(detect_str(">seq1 description\nACGT\n"), InputFormat::Fasta);
        assert_eq!(detect_str("@read1\nACGT\n+\nIIII\n"), InputFormat::Fastq);
        assert_eq!(detect_str("id\tsequence\tclass\n1\tACGT\t0\n"), InputFormat::Tsv);
        assert_eq!(detect_str("ATGCATGC\n"), InputFormat::Raw);
        assert_eq!(detect_str("acgtn acgt"), InputFormat::Raw);
        assert_eq!(detect_str("hello world\n"), InputFormat::Unknown);
        assert_eq!(detect_str(""), InputFormat::Unknown);
    }

    #[test]
    fn tsv_header_is_case_insensitive() {
        assert_eq!(detect_str("ID\tSEQUENCE\n"), InputFormat::Tsv);
        // A tab alone is not enough.
        assert_eq!(detect_str("id\tdna\n"), InputFormat::Unknown);
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert_eq!(detect_str("   >seq\nACGT"), InputFormat::Fasta);
    }

    #[test]
    fn non_utf8_is_unknown() {
        assert_eq!(detect(Cursor::new(&[0xff, 0xfe, b'\n'][..])), InputFormat::Unknown);
    }

    #[test]
    fn detects_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">chr1 test").unwrap();
        writeln!(file, "ACGT").unwrap();
        file.flush().unwrap();
        assert_eq!(detect_path(file.path()), InputFormat::Fasta);
    }

    #[test]
    fn missing_file_is_unknown() {
        assert_eq!(
            detect_path(Path::new("/definitely/not/here.fa")),
            InputFormat::Unknown
        );
    }

    #[test]
    fn format_names_round_trip() {
        assert_eq!(InputFormat::from_str("fastq").unwrap(), InputFormat::Fastq);
        assert_eq!(InputFormat::Tsv.to_string(), "tsv");
        assert!(InputFormat::from_str("genbank").is_err());
    }
}
