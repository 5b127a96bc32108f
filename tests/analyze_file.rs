use dnascan::report::{MolecularWeight, Translation};
use dnascan::{AnalysisError, Analyzer, AnalyzerConfig, InputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// ATG, 40 alanine codons and a stop: a 126 nt ORF.
fn gene() -> String {
    format!("ATG{}TAA", "GCC".repeat(40))
}

#[test]
fn fasta_file_end_to_end() {
    let content = format!(">gene1 synthetic test gene\n{}\n>gene2\nACGTACGTAC\n", gene());
    let file = write_file(".fa", &content);
    let report = Analyzer::default().analyze_file(file.path()).unwrap();

    let info = report.file_info.as_ref().unwrap();
    assert_eq!(info.sequence_id, "gene1");
    assert_eq!(info.description, "gene1 synthetic test gene");
    assert_eq!(info.total_sequences, 2);
    assert_eq!(info.format, InputFormat::Fasta);

    assert_eq!(report.sequence_info.length, 126);
    let orfs = report.translation.orfs();
    assert_eq!(orfs.len(), 1);
    assert_eq!(orfs[0].start, 0);
    assert_eq!(orfs[0].end, 126);
    assert_eq!(orfs[0].frame, 1);
    assert!(report.translation.protein().starts_with("MAAAA"));
    assert!(report.translation.protein().ends_with('*'));

    let gcc = report.motifs.iter().find(|hit| hit.motif == "GCCGCC").unwrap();
    assert_eq!(gcc.positions.len(), 10);
    assert!(gcc.count > 10);

    assert_eq!(report.statistics.summary.split(" | ").next(), Some("medium"));
    assert!(matches!(
        report.statistics.molecular_weight,
        MolecularWeight::Daltons(_)
    ));
}

#[test]
fn tsv_file_end_to_end() {
    let file = write_file(".txt", "label\tsequence\nX\tATGCATGCAT\n");
    let report = Analyzer::default().analyze_file(file.path()).unwrap();
    let info = report.file_info.as_ref().unwrap();
    assert_eq!(info.format, InputFormat::Tsv);
    assert_eq!(info.sequence_id, "Sequence_1");
    assert_eq!(info.description, "Sequence from TSV file, class: ATGCATGCAT");
    assert_eq!(report.sequence_info.cleaned_sequence, "ATGCATGCAT");
}

#[test]
fn fastq_file_end_to_end() {
    let file = write_file(".fq", "@read1\nGGGCCCAAATTT\n+\nIIIIIIIIIIII\n");
    let report = Analyzer::default().analyze_file(file.path()).unwrap();
    assert_eq!(report.file_info.as_ref().unwrap().format, InputFormat::Fastq);
    assert_eq!(report.gc_content, 50.0);
    assert_eq!(report.translation.protein(), "GPKF");
}

#[test]
fn long_raw_file_skips_molecular_weight() {
    let file = write_file(".seq", &"ACGTTGCA\n".repeat(625));
    let report = Analyzer::default().analyze_file(file.path()).unwrap();
    assert_eq!(report.sequence_info.length, 5000);
    assert_eq!(report.statistics.molecular_weight, MolecularWeight::TooLarge);
    assert!(report.statistics.summary.starts_with("long"));

    let relaxed = Analyzer::new(AnalyzerConfig {
        molecular_weight_limit: None,
        ..Default::default()
    });
    let report = relaxed.analyze_file(file.path()).unwrap();
    assert!(matches!(
        report.statistics.molecular_weight,
        MolecularWeight::Daltons(_)
    ));
}

#[test]
fn report_serializes_to_json() {
    let report = Analyzer::default().analyze(&gene()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["sequence_info"]["length"], 126);
    assert_eq!(value["translation"]["status"], "complete");
    assert_eq!(value["translation"]["orfs"][0]["length"], 126);
    assert!(value["statistics"]["molecular_weight"].is_number());
    assert!(value.get("file_info").is_none());
    assert!(matches!(report.translation, Translation::Complete { .. }));
}

#[test]
fn missing_file_propagates_io_error() {
    let result = Analyzer::default().analyze_file(std::path::Path::new("/no/such/file.fa"));
    assert!(matches!(result, Err(AnalysisError::Io { .. })));
}
