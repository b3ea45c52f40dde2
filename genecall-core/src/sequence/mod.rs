//! Sequence sources and nucleotide utilities.
//!
//! The pipeline reads its input through the [`SequenceSource`] trait, which
//! must be re-readable: the mode selector scans the source once to find the
//! training sequence and the batch loader reads it once more to build the
//! work list.
//!
//! ## Modules
//!
//! - [`io`]: FASTA file source backed by rust-bio
//! - [`translation`]: codon translation with the bacterial genetic code
//!
//! ## Examples
//!
//! ```rust
//! use genecall_core::sequence::SequenceSource;
//! use genecall_core::types::SequenceRecord;
//!
//! let batch = vec![
//!     SequenceRecord::new("c1", "ATGAAATAG"),
//!     SequenceRecord::new("c2", "ATGCCCTGA"),
//! ];
//! let ids: Vec<String> = batch
//!     .records()?
//!     .map(|r| r.map(|r| r.identifier))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(ids, ["c1", "c2"]);
//! # Ok::<(), genecall_core::types::GeneCallError>(())
//! ```

use crate::types::{GeneCallError, SequenceRecord};

pub mod io;
pub mod translation;

pub use io::*;

/// Iterator over the records of a source, in source order.
pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<SequenceRecord, GeneCallError>> + 'a>;

/// A re-readable, ordered collection of nucleotide sequences.
pub trait SequenceSource {
    /// Opens a fresh pass over the source.
    ///
    /// Every call yields the same records in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneCallError`] if the source cannot be opened; errors on
    /// individual records are reported through the iterator.
    fn records(&self) -> Result<RecordIter<'_>, GeneCallError>;
}

impl SequenceSource for [SequenceRecord] {
    fn records(&self) -> Result<RecordIter<'_>, GeneCallError> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl SequenceSource for Vec<SequenceRecord> {
    fn records(&self) -> Result<RecordIter<'_>, GeneCallError> {
        self.as_slice().records()
    }
}

/// Fraction of G and C among the unambiguous bases of `sequence`.
///
/// Returns `0.0` when the sequence has no A, C, G or T.
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    let (gc, total) = sequence
        .iter()
        .fold((0usize, 0usize), |(gc, total), base| {
            match base.to_ascii_uppercase() {
                b'G' | b'C' => (gc + 1, total + 1),
                b'A' | b'T' | b'U' => (gc, total + 1),
                _ => (gc, total),
            }
        });
    if total == 0 {
        0.0
    } else {
        gc as f64 / total as f64
    }
}
