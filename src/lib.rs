//! DNA sequence analysis: composition, motifs, translation and ORFs,
//! read from plain text or from FASTA, FASTQ, TSV and raw sequence files.

pub mod analyzer;
pub mod composition;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod motif;
pub mod nucleotide;
pub mod report;
pub mod translation;
pub mod validate;

pub use crate::analyzer::Analyzer;
pub use crate::config::AnalyzerConfig;
pub use crate::error::{AnalysisError, Result};
pub use crate::format::InputFormat;
pub use crate::report::AnalysisReport;
