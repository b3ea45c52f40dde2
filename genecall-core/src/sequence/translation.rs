//! Codon translation with the bacterial, archaeal and plant plastid code
//! (NCBI translation table 11).

use bio::alphabets::dna::revcomp;
use bio::bio_types::strand::Strand;

use crate::constants::{CODON_LENGTH, STOP_SYMBOL, UNKNOWN_AMINO_ACID};

/// Amino acids of table 11 indexed by `16 * first + 4 * second + third`
/// with bases ordered T, C, A, G.
const TABLE_11: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' | b't' | b'U' | b'u' => Some(0),
        b'C' | b'c' => Some(1),
        b'A' | b'a' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}

/// Translates one codon; codons with ambiguous bases become `X`.
#[must_use]
pub fn translate_codon(codon: &[u8]) -> char {
    match codon {
        [a, b, c] => match (base_index(*a), base_index(*b), base_index(*c)) {
            (Some(a), Some(b), Some(c)) => TABLE_11[16 * a + 4 * b + c] as char,
            _ => UNKNOWN_AMINO_ACID,
        },
        _ => UNKNOWN_AMINO_ACID,
    }
}

/// Whether `codon` is a stop codon in table 11 (TAA, TAG, TGA).
#[must_use]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    translate_codon(codon) == STOP_SYMBOL
}

/// Translates a coding sequence read 5' to 3'.
///
/// A trailing incomplete codon is ignored. When `initiator` is set the first
/// codon is read as methionine, since alternative start codons (GTG, TTG)
/// still initiate with Met.
#[must_use]
pub fn translate(coding_sequence: &[u8], initiator: bool) -> String {
    coding_sequence
        .chunks_exact(CODON_LENGTH)
        .enumerate()
        .map(|(i, codon)| {
            if i == 0 && initiator {
                'M'
            } else {
                translate_codon(codon)
            }
        })
        .collect()
}

/// Extracts the coding sequence of a gene, 5' to 3' on its own strand.
///
/// `begin` and `end` are 1-based inclusive forward-strand coordinates.
#[must_use]
pub fn gene_nucleotides(residues: &[u8], begin: usize, end: usize, strand: Strand) -> Vec<u8> {
    let region = &residues[begin - 1..end];
    match strand {
        Strand::Reverse => revcomp(region),
        _ => region.to_vec(),
    }
}
