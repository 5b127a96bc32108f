use crate::config::AnalyzerConfig;
use crate::nucleotide::{amino_acid, is_stop_codon, upper, START_CODON};
use crate::report::{Orf, Translation};
use std::cmp::min;
use thiserror::Error;

/// Reasons a sequence cannot be translated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("invalid codon '{codon}' at position {position}")]
    InvalidCodon { codon: String, position: usize },
}

/// DNA to RNA: every T becomes U, everything else is kept.
pub fn transcribe(seq: &[u8]) -> String {
    let rna = seq
        .iter()
        .map(|&symbol| match symbol {
            b'T' => b'U',
            b't' => b'u',
            other => other,
        })
        .collect::<Vec<_>>();
    String::from_utf8_lossy(&rna).into_owned()
}

/// Translates every complete codon from the first base on, stops included as `*`.
/// A trailing partial codon is ignored.
pub fn translate(seq: &[u8]) -> Result<String, TranslationError> {
    seq.chunks_exact(3)
        .enumerate()
        .map(|(i, chunk)| {
            let codon = [upper(chunk[0]), upper(chunk[1]), upper(chunk[2])];
            amino_acid(&codon)
                .map(char::from)
                .ok_or_else(|| TranslationError::InvalidCodon {
                    codon: String::from_utf8_lossy(chunk).into_owned(),
                    position: i * 3,
                })
        })
        .collect()
}

/// Forward-strand ORFs: ATG up to and including the first in-frame stop.
/// Every start is closed by the first stop after it, whether or not the span
/// is long enough. Longest first, ties in frame then start order.
pub fn find_orfs(seq: &[u8], min_len: usize, max_orfs: usize, preview_len: usize) -> Vec<Orf> {
    let mut orfs = Vec::new();

    for frame in 0..3 {
        let framed = seq.get(frame..).unwrap_or(&[]);
        let mut open_starts = Vec::new();

        for (i, codon) in framed.chunks_exact(3).enumerate() {
            let pos = frame + i * 3;
            if codon == &START_CODON[..] {
                open_starts.push(pos);
            } else if is_stop_codon(codon) {
                let end = pos + 3;
                for start in open_starts.drain(..) {
                    let length = end - start;
                    if length < min_len {
                        continue;
                    }
                    let span = &seq[start..end];
                    let mut preview =
                        String::from_utf8_lossy(&span[..min(preview_len, span.len())]).into_owned();
                    preview.push_str("...");
                    orfs.push(Orf {
                        start,
                        end,
                        length,
                        frame: frame + 1,
                        sequence: preview,
                    });
                }
            }
        }
    }

    // Stable sort keeps discovery order among equal lengths.
    orfs.sort_by(|a, b| b.length.cmp(&a.length));
    orfs.truncate(max_orfs);
    orfs
}

/// Runs the whole translation step. Failure is folded into the result
/// instead of being returned as an error.
pub fn translation(seq: &[u8], config: &AnalyzerConfig) -> Translation {
    match translate(seq) {
        Ok(protein) => {
            let rna = transcribe(seq);
            Translation::Complete {
                rna: rna.chars().take(config.rna_preview_len).collect(),
                protein: protein.chars().take(config.protein_preview_len).collect(),
                orfs: find_orfs(
                    seq,
                    config.min_orf_len,
                    config.max_orfs,
                    config.orf_preview_len,
                ),
            }
        }
        Err(err) => {
            log::warn!("translation failed: {}", err);
            Translation::failed(err.to_string())
        }
    }
}
