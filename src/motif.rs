//! Literal motif search and frequent k-mer counting.

use crate::report::{KmerCount, MotifHit};
use std::collections::HashMap;

/// Scans sequences for a fixed, ordered set of motifs.
#[derive(Debug, Clone)]
pub struct MotifScanner {
    motifs: Vec<Vec<u8>>,
    max_positions: usize,
}

impl MotifScanner {
    /// Motifs are upper-cased; empty ones are ignored.
    pub fn new<I, S>(motifs: I, max_positions: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let motifs = motifs
            .into_iter()
            .map(|motif| motif.as_ref().trim().to_ascii_uppercase().into_bytes())
            .filter(|motif| !motif.is_empty())
            .collect();
        Self {
            motifs,
            max_positions,
        }
    }

    #[cfg(test)]
    fn motifs(&self) -> impl Iterator<Item = &[u8]> {
        self.motifs.iter().map(|motif| &motif[..])
    }

    /// One hit per motif that occurs at least once, in motif order.
    /// Overlapping occurrences all count, only the first positions are kept.
    pub fn find_motifs(&self, seq: &[u8]) -> Vec<MotifHit> {
        self.motifs
            .iter()
            .filter_map(|motif| {
                let mut positions = occurrences(seq, motif);
                if positions.is_empty() {
                    return None;
                }
                let count = positions.len();
                positions.truncate(self.max_positions);
                Some(MotifHit {
                    motif: String::from_utf8_lossy(motif).into_owned(),
                    count,
                    positions,
                })
            })
            .collect()
    }
}

/// Every start index of `motif` in `seq`, overlaps included.
fn occurrences(seq: &[u8], motif: &[u8]) -> Vec<usize> {
    if motif.is_empty() || motif.len() > seq.len() {
        return Vec::new();
    }
    seq.windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif)
        .map(|(pos, _)| pos)
        .collect()
}

/// k-mers occurring at least `min_occurrences` times, most frequent first.
/// Ties keep the order in which the k-mers were first seen.
pub fn frequent_kmers(seq: &[u8], k: usize, min_occurrences: usize) -> Vec<KmerCount> {
    if k == 0 || seq.len() < k {
        return Vec::new();
    }

    let mut index = HashMap::<&[u8], usize>::new();
    let mut seen = Vec::<(&[u8], usize)>::new();
    for kmer in seq.windows(k) {
        match index.get(kmer) {
            Some(&i) => seen[i].1 += 1,
            None => {
                index.insert(kmer, seen.len());
                seen.push((kmer, 1));
            }
        }
    }

    let mut frequent = seen
        .into_iter()
        .filter(|&(_, count)| count >= min_occurrences)
        .collect::<Vec<_>>();
    // Stable, so first-seen order survives among equal counts.
    frequent.sort_by(|a, b| b.1.cmp(&a.1));

    frequent
        .into_iter()
        .map(|(kmer, count)| KmerCount {
            kmer: String::from_utf8_lossy(kmer).into_owned(),
            count,
        })
        .collect()
}
