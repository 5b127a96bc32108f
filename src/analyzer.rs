use crate::composition::{composition, gc_content, round2, statistics};
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::extract::extract;
use crate::format::{detect_path, InputFormat};
use crate::motif::{frequent_kmers, MotifScanner};
use crate::nucleotide::clean;
use crate::report::{AnalysisReport, Composition, FileInfo, SequenceInfo};
use crate::translation::translation;
use std::path::Path;

/// Runs every analysis on a sequence and assembles the report.
/// Holds only read-only configuration, so one instance can serve many requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    scanner: MotifScanner,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let scanner = MotifScanner::new(&config.motifs, config.max_motif_positions);
        Self { config, scanner }
    }

    /// Analyzes raw sequence text. Fails with `EmptySequence` when nothing survives cleaning.
    pub fn analyze(&self, sequence: &str) -> Result<AnalysisReport> {
        let cleaned = clean(sequence);
        if cleaned.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }
        log::debug!(
            "analyzing {} bases ({} characters before cleaning)",
            cleaned.len(),
            sequence.chars().count()
        );

        let seq = cleaned.as_bytes();
        let c = composition(seq);
        let motifs = self.scanner.find_motifs(seq);
        let mut kmers = frequent_kmers(seq, self.config.kmer_len, self.config.kmer_min_occurrences);
        kmers.truncate(self.config.max_kmers);

        Ok(AnalysisReport {
            sequence_info: SequenceInfo {
                length: cleaned.len(),
                original_length: sequence.chars().count(),
                cleaned_sequence: preview(&cleaned, self.config.sequence_preview_len),
            },
            gc_content: round2(gc_content(seq)),
            composition: Composition {
                a: round2(c.a),
                t: round2(c.t),
                g: round2(c.g),
                c: round2(c.c),
            },
            motifs,
            frequent_kmers: kmers,
            translation: translation(seq, &self.config),
            statistics: statistics(seq, self.config.molecular_weight_limit),
            file_info: None,
        })
    }

    /// Detects the format of `path` and analyzes its first record.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport> {
        self.analyze_file_as(path, detect_path(path))
    }

    /// Analyzes the first record of `path`, read as `format`.
    pub fn analyze_file_as(&self, path: &Path, format: InputFormat) -> Result<AnalysisReport> {
        log::info!("reading {} as {}", path.display(), format);
        let records = extract(path, format)?;
        let total_sequences = records.len();
        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::NoSequencesFound {
                path: path.to_path_buf(),
            })?;

        let mut report = self.analyze(&first.sequence)?;
        report.file_info = Some(FileInfo {
            sequence_id: first.id,
            description: first.description,
            total_sequences,
            format,
        });
        Ok(report)
    }
}

/// The first `len` characters, with `...` appended when something was cut.
fn preview(seq: &str, len: usize) -> String {
    if seq.len() > len {
        format!("{}...", &seq[..len])
    } else {
        seq.to_string()
    }
}
