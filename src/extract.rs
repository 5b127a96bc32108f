//! Turns file content into sequence records.
//!
//! The parser for the detected format is tried first. If it gives up on
//! malformed content, a lenient TSV reading is tried, and as a last resort the
//! whole content becomes one record for the cleaner to sort out. Only failing
//! to read the file at all is an error here; an empty result is reported by
//! [`extract`] as `NoSequencesFound`.

use crate::config::MIN_INPUT_LEN;
use crate::error::{AnalysisError, Result};
use crate::format::InputFormat;
use crate::nucleotide::clean;
use bio::io::{fasta, fastq};
use std::fs;
use std::path::Path;
use std::str;
use thiserror::Error;

/// One sequence read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl SequenceRecord {
    fn new<I: Into<String>, D: Into<String>, S: Into<String>>(id: I, description: D, sequence: S) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            sequence: sequence.into(),
        }
    }
}

/// Why a parser gave up on the content.
#[derive(Debug, Error)]
enum ParseFailure {
    #[error("content is not valid UTF-8")]
    NotUtf8(#[from] str::Utf8Error),
    #[error("malformed FASTA: {0}")]
    Fasta(String),
    #[error("malformed FASTQ: {0}")]
    Fastq(String),
    #[error("no lines to read")]
    NoLines,
    #[error("header has no 'sequence' column")]
    NoSequenceColumn,
    #[error("no rows with a sequence")]
    NoRows,
}

type Parser = fn(&[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure>;

/// Reads `path` and extracts its records as `format`.
pub fn extract(path: &Path, format: InputFormat) -> Result<Vec<SequenceRecord>> {
    let content = fs::read(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = extract_bytes(&content, format);
    if records.is_empty() {
        return Err(AnalysisError::NoSequencesFound {
            path: path.to_path_buf(),
        });
    }
    log::info!(
        "extracted {} record(s) from {} as {}",
        records.len(),
        path.display(),
        format
    );
    Ok(records)
}

/// Extracts records from in-memory content. Never fails, but may return no records.
pub fn extract_bytes(content: &[u8], format: InputFormat) -> Vec<SequenceRecord> {
    let attempts: [(&str, Parser); 2] = [
        ("primary", primary_parser(format)),
        ("tsv heuristic", parse_tsv_lenient),
    ];

    for (name, parser) in attempts.iter() {
        match parser(content) {
            Ok(records) => {
                log::debug!("{} parser produced {} record(s)", name, records.len());
                return records;
            }
            Err(failure) => log::warn!("{} parser for {} failed: {}", name, format, failure),
        }
    }

    log::warn!("falling back to reading the content as plain text");
    vec![wrap_opaque(content)]
}

fn primary_parser(format: InputFormat) -> Parser {
    match format {
        InputFormat::Fasta => parse_fasta,
        InputFormat::Fastq => parse_fastq,
        InputFormat::Tsv => parse_tsv,
        InputFormat::Raw | InputFormat::Unknown => parse_raw,
    }
}

/// Biopython style description: the full header line.
fn full_header(id: &str, desc: Option<&str>) -> String {
    match desc {
        Some(desc) if !desc.is_empty() => format!("{} {}", id, desc),
        _ => id.to_string(),
    }
}

/// Content from the first non-whitespace byte on, so the header is where detection saw it.
fn skip_leading_whitespace(content: &[u8]) -> &[u8] {
    let start = content
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(content.len());
    &content[start..]
}

fn parse_fasta(content: &[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure> {
    fasta::Reader::new(skip_leading_whitespace(content))
        .records()
        .map(|record| {
            let record = record.map_err(|e| ParseFailure::Fasta(e.to_string()))?;
            Ok(SequenceRecord::new(
                record.id(),
                full_header(record.id(), record.desc()),
                String::from_utf8_lossy(record.seq()),
            ))
        })
        .collect()
}

fn parse_fastq(content: &[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure> {
    fastq::Reader::new(skip_leading_whitespace(content))
        .records()
        .map(|record| {
            let record = record.map_err(|e| ParseFailure::Fastq(e.to_string()))?;
            record
                .check()
                .map_err(|msg| ParseFailure::Fastq(msg.to_string()))?;
            Ok(SequenceRecord::new(
                record.id(),
                full_header(record.id(), record.desc()),
                String::from_utf8_lossy(record.seq()),
            ))
        })
        .collect()
}

/// Trimmed, non-empty lines.
fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Index of the column called "sequence", ignoring case and padding.
fn sequence_column(header: &str) -> Option<usize> {
    header
        .split('\t')
        .position(|column| column.trim().eq_ignore_ascii_case("sequence"))
}

fn tsv_description(class: &str) -> String {
    format!("Sequence from TSV file, class: {}", class)
}

/// The class label lives in the second column.
fn tsv_class<'a>(cells: &[&'a str]) -> &'a str {
    cells.get(1).map(|cell| cell.trim()).unwrap_or("unknown")
}

fn parse_tsv(content: &[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure> {
    let text = str::from_utf8(content)?;
    let lines = content_lines(text);
    let (header, rows) = lines.split_first().ok_or(ParseFailure::NoLines)?;

    let seq_idx = match sequence_column(header) {
        Some(idx) => idx,
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in rows {
        let cells = row.split('\t').collect::<Vec<_>>();
        if cells.len() <= seq_idx {
            continue;
        }
        let sequence = cells[seq_idx].trim().replace(' ', "");
        if sequence.is_empty() {
            continue;
        }
        records.push(SequenceRecord::new(
            format!("Sequence_{}", records.len() + 1),
            tsv_description(tsv_class(&cells)),
            sequence,
        ));
    }
    Ok(records)
}

fn push_tsv_row(row: Option<(String, String)>, records: &mut Vec<SequenceRecord>) {
    if let Some((sequence, class)) = row {
        let sequence = sequence.replace(' ', "");
        if !sequence.is_empty() {
            let id = format!("Sequence_{}", records.len() + 1);
            records.push(SequenceRecord::new(id, tsv_description(&class), sequence));
        }
    }
}

/// Like `parse_tsv`, but a row too short to hold the sequence column is taken
/// as a continuation of the previous row's sequence.
fn parse_tsv_lenient(content: &[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure> {
    let text = String::from_utf8_lossy(content);
    let lines = content_lines(&text);
    let (header, rows) = lines.split_first().ok_or(ParseFailure::NoLines)?;
    let seq_idx = sequence_column(header).ok_or(ParseFailure::NoSequenceColumn)?;

    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;
    for row in rows {
        let cells = row.split('\t').collect::<Vec<_>>();
        if cells.len() > seq_idx {
            push_tsv_row(current.take(), &mut records);
            current = Some((cells[seq_idx].trim().to_string(), tsv_class(&cells).to_string()));
        } else if let Some((sequence, _)) = current.as_mut() {
            sequence.push_str(row);
        }
    }
    push_tsv_row(current, &mut records);

    if records.is_empty() {
        Err(ParseFailure::NoRows)
    } else {
        Ok(records)
    }
}

/// All lines joined and cleaned; too little sequence gives no record.
fn parse_raw(content: &[u8]) -> std::result::Result<Vec<SequenceRecord>, ParseFailure> {
    let text = str::from_utf8(content)?;
    let joined = text.trim().lines().map(str::trim).collect::<String>();
    let cleaned = clean(&joined);
    if cleaned.len() >= MIN_INPUT_LEN {
        Ok(vec![SequenceRecord::new(
            "Sequence_1",
            "Raw DNA sequence",
            cleaned,
        )])
    } else {
        Ok(Vec::new())
    }
}

/// Last resort: the content as-is, uncleaned.
fn wrap_opaque(content: &[u8]) -> SequenceRecord {
    SequenceRecord::new(
        "Unknown",
        "From text file",
        String::from_utf8_lossy(content),
    )
}
