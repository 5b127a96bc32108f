use strum_macros::{Display, EnumIter};

pub const NUCL_A: u8 = 0;
pub const NUCL_C: u8 = 1;
pub const NUCL_G: u8 = 2;
pub const NUCL_T: u8 = 3;

/// Amino acid per trinucleotide index, `X` for anything that is not a codon.
const CODON_CODE: &[u8; 65] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLFX";

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// The four canonical bases, ordered by their numeric index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, Display)]
pub enum Base {
    A = NUCL_A as isize,
    C = NUCL_C as isize,
    G = NUCL_G as isize,
    T = NUCL_T as isize,
}

impl Base {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Purines are A and G, pyrimidines are C and T.
    pub fn is_purine(self) -> bool {
        self == Base::A || self == Base::G
    }
}

/// Convert a character byte to uppercase.
#[inline]
pub fn upper(x: u8) -> u8 {
    x & !32
}

/// Check if the symbol is in the ACGT alphabet.
#[inline]
pub fn is_acgt(x: u8) -> bool {
    x == b'A' || x == b'C' || x == b'G' || x == b'T'
}

/// Convert nucleobase to number/index.
pub fn base_to_num_unchecked(symbol: u8) -> u8 {
    debug_assert!(is_acgt(symbol));
    // If you multiply the ASCII value with 3, you get following values:
    // A 110 00 011
    // C 110 01 001
    // G 110 10 101
    // T 111 11 100
    //       ^^
    let symbol = symbol.wrapping_mul(3);
    (symbol >> 3) & 3
}

/// Trinucleotide index. None if any symbol is outside ACGT.
pub fn trinucleotide(codon: &[u8]) -> Option<usize> {
    match codon {
        [a, b, c] if is_acgt(*a) && is_acgt(*b) && is_acgt(*c) => Some(
            ((base_to_num_unchecked(*a) << 4)
                | (base_to_num_unchecked(*b) << 2)
                | base_to_num_unchecked(*c)) as usize,
        ),
        _ => None,
    }
}

/// Amino acid encoded by an uppercase DNA codon, `*` for stops.
pub fn amino_acid(codon: &[u8]) -> Option<u8> {
    trinucleotide(codon).map(|idx| CODON_CODE[idx])
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| &stop[..] == codon)
}

/// Normalizes raw text into the canonical alphabet:
/// uppercase, and every symbol outside A/T/G/C dropped (N and whitespace included).
pub fn clean(raw: &str) -> String {
    raw.bytes()
        .map(upper)
        .filter(|&symbol| is_acgt(symbol))
        .map(char::from)
        .collect()
}
