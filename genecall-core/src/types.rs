use std::fmt;

use bio::bio_types::strand::Strand;
use thiserror::Error;

use crate::constants::DEFAULT_TRANSLATION_TABLE;

/// One nucleotide sequence of the input batch.
///
/// Records are immutable once loaded; the identifier is the first word of
/// the FASTA header and is expected to be unique within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Sequence identifier (contig name)
    pub identifier: String,
    /// Remainder of the FASTA header line, if any
    pub description: Option<String>,
    /// Raw residues as read from the source
    pub residues: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(identifier: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            identifier: identifier.into(),
            description: None,
            residues: residues.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// A single gene location reported by a predictor.
///
/// Coordinates are 1-based and inclusive with `begin <= end` on the forward
/// strand, whatever the gene's strand. The partial flags refer to the
/// coordinate edges: `partial_begin` means the gene runs off the left end of
/// the sequence, `partial_end` off the right end.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedGene {
    /// Leftmost position (1-based)
    pub begin: usize,
    /// Rightmost position (1-based, inclusive)
    pub end: usize,
    /// Strand the gene is read from
    pub strand: Strand,
    /// Gene is truncated at the left sequence edge
    pub partial_begin: bool,
    /// Gene is truncated at the right sequence edge
    pub partial_end: bool,
    /// Protein translation as emitted by the predictor, stop symbols included
    pub protein: String,
}

impl PredictedGene {
    /// Whether the gene keeps its start codon (it is not truncated at its 5' end).
    #[cfg(test)]
    pub(crate) fn has_start_codon(&self) -> bool {
        match self.strand {
            Strand::Reverse => !self.partial_end,
            _ => !self.partial_begin,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end + 1 - self.begin
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.begin
    }
}

/// Operating mode of a gene calling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    /// Train once on the longest sequence, then predict with that model
    SingleGenome,
    /// No training; predict every sequence with the metagenomic preset
    Metagenome,
}

impl PredictionMode {
    #[must_use]
    pub const fn from_single_mode(single_mode: bool) -> Self {
        if single_mode {
            Self::SingleGenome
        } else {
            Self::Metagenome
        }
    }
}

impl fmt::Display for PredictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleGenome => write!(f, "Single Genome"),
            Self::Metagenome => write!(f, "Metagenome"),
        }
    }
}

/// Error types that can occur during a gene calling run
#[derive(Error, Debug)]
pub enum GeneCallError {
    /// An alternate genetic code was requested
    #[error(
        "Translation table {0} is not supported: genes are translated with table {default} \
         only, leave the translation table unset",
        default = DEFAULT_TRANSLATION_TABLE
    )]
    UnsupportedTranslationTable(u8),
    /// Single genome mode found no sequence long enough to train on
    #[error(
        "Single genome mode needs a training sequence of at least {minimum} nt, \
         but the longest sequence is only {length} nt; use metagenome mode instead"
    )]
    TrainingSequenceTooShort { length: usize, minimum: usize },
    /// Worker count must be positive
    #[error("Invalid number of threads: at least one worker is required")]
    InvalidThreadCount,
    /// The requested predictor backend is not available
    #[error("Gene predictor unavailable: {0}")]
    PredictorUnavailable(String),
    /// A worker failed while predicting genes on one sequence
    #[error("Gene prediction failed for '{contig}': {reason}")]
    PredictionFailed { contig: String, reason: String },
    /// A predictor reported coordinates that violate `1 <= begin <= end`
    #[error("Invalid gene coordinates on '{contig}': begin {begin}, end {end}")]
    InvalidGeneCoordinates {
        contig: String,
        begin: usize,
        end: usize,
    },
    /// A predictor reported a gene without a strand
    #[error("Invalid strand for a gene on '{0}'")]
    InvalidStrand(String),
    /// The worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl GeneCallError {
    /// Errors caused by the run configuration rather than by data or workers.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedTranslationTable(_)
                | Self::TrainingSequenceTooShort { .. }
                | Self::InvalidThreadCount
        )
    }
}
