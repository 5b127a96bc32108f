/// Regulatory motifs scanned for by default, in report order.
pub const DEFAULT_MOTIFS: [&str; 6] = ["TATA", "CAAT", "GCCGCC", "ATGC", "CGCG", "ATAT"];

/// Minimum length of validated user input.
pub const MIN_INPUT_LEN: usize = 10;

/// Settings shared by every analysis an `Analyzer` runs.
/// This is just a "plain old data" struct, which is why the fields are public.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Motifs to scan for, in the order they are reported.
    pub motifs: Vec<String>,
    /// How many start positions to keep per motif.
    pub max_motif_positions: usize,
    /// Minimum ORF length in nucleotides, stop codon included.
    pub min_orf_len: usize,
    /// How many ORFs to keep after sorting by length.
    pub max_orfs: usize,
    /// Nucleotides shown in an ORF preview.
    pub orf_preview_len: usize,
    /// Characters of the transcript kept in the report.
    pub rna_preview_len: usize,
    /// Characters of the protein kept in the report.
    pub protein_preview_len: usize,
    /// Characters of the cleaned sequence kept in the report.
    pub sequence_preview_len: usize,
    /// Molecular weight is only computed below this length. `None` always computes it.
    pub molecular_weight_limit: Option<usize>,
    /// Window length for the frequent k-mer scan.
    pub kmer_len: usize,
    /// Minimum occurrences for a k-mer to be reported.
    pub kmer_min_occurrences: usize,
    /// How many frequent k-mers to keep.
    pub max_kmers: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            motifs: DEFAULT_MOTIFS.iter().map(|m| m.to_string()).collect(),
            max_motif_positions: 10,
            min_orf_len: 90,
            max_orfs: 5,
            orf_preview_len: 60,
            rna_preview_len: 500,
            protein_preview_len: 200,
            sequence_preview_len: 100,
            molecular_weight_limit: Some(1000),
            kmer_len: 6,
            kmer_min_occurrences: 2,
            max_kmers: 10,
        }
    }
}
