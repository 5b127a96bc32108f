//! Base composition and the chemical statistics derived from it.

use crate::nucleotide::{base_to_num_unchecked, is_acgt, Base};
use crate::report::{Composition, MolecularWeight, StatisticsSummary, SummaryTag, SUMMARY_SEPARATOR};
use strum::IntoEnumIterator;

/// Monophosphate weight per base, indexed like `Base`.
const MONOMER_WEIGHTS: [f64; 4] = [331.2218, 307.1971, 347.2212, 322.2085];

/// Water released by each phosphodiester bond.
const WATER_WEIGHT: f64 = 18.0153;

/// Round to two decimals, ties to even.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Per-base counts of a sequence. Symbols outside ACGT are not counted
/// but do count towards the length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseCounts {
    counts: [usize; 4],
    len: usize,
}

impl BaseCounts {
    pub fn new(seq: &[u8]) -> Self {
        let mut counts = [0; 4];
        for &symbol in seq.iter().filter(|&&symbol| is_acgt(symbol)) {
            counts[base_to_num_unchecked(symbol) as usize] += 1;
        }
        Self {
            counts,
            len: seq.len(),
        }
    }

    #[inline]
    pub fn get(&self, base: Base) -> usize {
        self.counts[base.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Percentage of the sequence made up by the given bases. Zero for an empty sequence.
    pub fn percent_of(&self, bases: &[Base]) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let count: usize = bases.iter().map(|&base| self.get(base)).sum();
        count as f64 / self.len as f64 * 100.0
    }
}

/// Percentage of G+C, 0 for an empty sequence.
pub fn gc_content(seq: &[u8]) -> f64 {
    BaseCounts::new(seq).percent_of(&[Base::G, Base::C])
}

/// Percentage of each base, all zero for an empty sequence.
pub fn composition(seq: &[u8]) -> Composition {
    let counts = BaseCounts::new(seq);
    Composition {
        a: counts.percent_of(&[Base::A]),
        t: counts.percent_of(&[Base::T]),
        g: counts.percent_of(&[Base::G]),
        c: counts.percent_of(&[Base::C]),
    }
}

/// Average molecular weight of single stranded, linear DNA.
pub fn molecular_weight(counts: &BaseCounts) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let monomers: f64 = Base::iter()
        .map(|base| counts.get(base) as f64 * MONOMER_WEIGHTS[base.index()])
        .sum();
    monomers - (counts.len() - 1) as f64 * WATER_WEIGHT
}

/// Tags classifying length, GC level and AT/GC balance, in that order.
pub fn summary_tags(len: usize, at_content: f64, gc_content: f64) -> Vec<SummaryTag> {
    let mut tags = Vec::with_capacity(3);

    tags.push(if len < 100 {
        SummaryTag::VeryShort
    } else if len < 1000 {
        SummaryTag::Medium
    } else {
        SummaryTag::Long
    });

    tags.push(if gc_content < 30.0 {
        SummaryTag::LowGc
    } else if gc_content > 70.0 {
        SummaryTag::HighGc
    } else {
        SummaryTag::BalancedGc
    });

    if (at_content - gc_content).abs() < 10.0 {
        tags.push(SummaryTag::WellBalanced);
    }

    tags
}

/// AT/GC/purine/pyrimidine percentages, molecular weight and summary tags.
/// The molecular weight is replaced by a marker once the length reaches `weight_limit`.
pub fn statistics(seq: &[u8], weight_limit: Option<usize>) -> StatisticsSummary {
    debug_assert!(!seq.is_empty(), "statistics need a non-empty sequence");
    let counts = BaseCounts::new(seq);

    let at_content = round2(counts.percent_of(&[Base::A, Base::T]));
    let gc_content = round2(counts.percent_of(&[Base::G, Base::C]));
    let purines = Base::iter().filter(|b| b.is_purine()).collect::<Vec<_>>();
    let pyrimidines = Base::iter().filter(|b| !b.is_purine()).collect::<Vec<_>>();
    let purine_content = round2(counts.percent_of(&purines));
    let pyrimidine_content = round2(counts.percent_of(&pyrimidines));

    let molecular_weight = match weight_limit {
        Some(limit) if counts.len() >= limit => MolecularWeight::TooLarge,
        _ => MolecularWeight::Daltons(round2(molecular_weight(&counts))),
    };

    let tags = summary_tags(counts.len(), at_content, gc_content);
    let summary = tags
        .iter()
        .map(|&tag| -> &'static str { tag.into() })
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR);

    StatisticsSummary {
        at_content,
        gc_content,
        purine_content,
        pyrimidine_content,
        molecular_weight,
        tags,
        summary,
    }
}
