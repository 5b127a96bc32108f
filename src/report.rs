use crate::format::InputFormat;
use serde::{Serialize, Serializer};
use strum_macros::{Display, IntoStaticStr};

/// Sentinel shown in place of RNA and protein when translation fails.
pub const TRANSLATION_ERROR: &str = "translation error";

/// Sentinel shown in place of the molecular weight for long sequences.
pub const TOO_LARGE: &str = "too large";

/// Full analysis of a single sequence.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sequence_info: SequenceInfo,
    pub gc_content: f64,
    pub composition: Composition,
    pub motifs: Vec<MotifHit>,
    pub frequent_kmers: Vec<KmerCount>,
    pub translation: Translation,
    pub statistics: StatisticsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceInfo {
    /// Length after cleaning.
    pub length: usize,
    /// Length of the text handed in, in characters.
    pub original_length: usize,
    /// Leading part of the cleaned sequence, `...` appended when cut.
    pub cleaned_sequence: String,
}

/// Where the analyzed sequence came from when it was read from a file.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub sequence_id: String,
    pub description: String,
    pub total_sequences: usize,
    pub format: InputFormat,
}

/// Percentage of each base, 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Composition {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl Composition {
    pub fn total(&self) -> f64 {
        self.a + self.t + self.g + self.c
    }
}

/// Occurrences of one known motif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifHit {
    pub motif: String,
    /// Total number of occurrences, overlapping ones included.
    pub count: usize,
    /// The first few start positions, left to right.
    pub positions: Vec<usize>,
}

/// A k-mer seen at least the configured number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmerCount {
    pub kmer: String,
    pub count: usize,
}

/// Open reading frame on the forward strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orf {
    /// Index of the A in ATG.
    pub start: usize,
    /// Index right after the stop codon.
    pub end: usize,
    /// Length in nucleotides, stop codon included.
    pub length: usize,
    /// Reading frame, 1 to 3.
    pub frame: usize,
    /// Leading nucleotides of the ORF followed by `...`.
    pub sequence: String,
}

/// Outcome of the translation step. A failure does not fail the report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Translation {
    Complete {
        rna: String,
        protein: String,
        orfs: Vec<Orf>,
    },
    Failed {
        rna: &'static str,
        protein: &'static str,
        orfs: Vec<Orf>,
        error: String,
    },
}

impl Translation {
    pub fn failed(error: String) -> Self {
        Translation::Failed {
            rna: TRANSLATION_ERROR,
            protein: TRANSLATION_ERROR,
            orfs: Vec::new(),
            error,
        }
    }

    #[inline]
    pub fn rna(&self) -> &str {
        match self {
            Translation::Complete { rna, .. } => rna,
            Translation::Failed { rna, .. } => rna,
        }
    }

    #[inline]
    pub fn protein(&self) -> &str {
        match self {
            Translation::Complete { protein, .. } => protein,
            Translation::Failed { protein, .. } => protein,
        }
    }

    #[inline]
    pub fn orfs(&self) -> &[Orf] {
        match self {
            Translation::Complete { orfs, .. } => orfs,
            Translation::Failed { orfs, .. } => orfs,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Translation::Complete { .. } => None,
            Translation::Failed { error, .. } => Some(error),
        }
    }
}

/// Molecular weight in Dalton, or a marker when the sequence was too long to bother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MolecularWeight {
    Daltons(f64),
    TooLarge,
}

impl Serialize for MolecularWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MolecularWeight::Daltons(weight) => serializer.serialize_f64(*weight),
            MolecularWeight::TooLarge => serializer.serialize_str(TOO_LARGE),
        }
    }
}

/// Human readable classification of a sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, IntoStaticStr)]
pub enum SummaryTag {
    #[strum(serialize = "very short")]
    VeryShort,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "long")]
    Long,
    #[strum(serialize = "low GC")]
    LowGc,
    #[strum(serialize = "high GC")]
    HighGc,
    #[strum(serialize = "balanced GC")]
    BalancedGc,
    #[strum(serialize = "well balanced AT/GC")]
    WellBalanced,
}

/// Separator between summary tags.
pub const SUMMARY_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub at_content: f64,
    pub gc_content: f64,
    pub purine_content: f64,
    pub pyrimidine_content: f64,
    pub molecular_weight: MolecularWeight,
    #[serde(skip)]
    pub tags: Vec<SummaryTag>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn molecular_weight_serializes_as_number_or_sentinel() {
        assert_eq!(
            serde_json::to_value(MolecularWeight::Daltons(1234.5)).unwrap(),
            json!(1234.5)
        );
        assert_eq!(
            serde_json::to_value(MolecularWeight::TooLarge).unwrap(),
            json!("too large")
        );
    }

    #[test]
    fn failed_translation_carries_sentinels() {
        let translation = Translation::failed("bad codon".to_string());
        assert_eq!(translation.rna(), TRANSLATION_ERROR);
        assert_eq!(translation.protein(), TRANSLATION_ERROR);
        assert!(translation.orfs().is_empty());
        assert_eq!(translation.error(), Some("bad codon"));

        let value = serde_json::to_value(&translation).unwrap();
        assert_eq!(value["status"], json!("failed"));
        assert_eq!(value["error"], json!("bad codon"));
    }

    #[test]
    fn composition_uses_base_letters_as_keys() {
        let composition = Composition {
            a: 25.0,
            t: 25.0,
            g: 25.0,
            c: 25.0,
        };
        let value = serde_json::to_value(composition).unwrap();
        assert_eq!(value["A"], json!(25.0));
        assert_eq!(value["C"], json!(25.0));
        assert_eq!(composition.total(), 100.0);
    }

    #[test]
    fn summary_tags_render_as_text() {
        assert_eq!(SummaryTag::VeryShort.to_string(), "very short");
        assert_eq!(SummaryTag::WellBalanced.to_string(), "well balanced AT/GC");
        let name: &'static str = SummaryTag::HighGc.into();
        assert_eq!(name, "high GC");
    }
}
