//! Constants shared by the pipeline and the built-in ORF predictor.

/// Crate version, reported as the version of the built-in predictor.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum length (nt) of the sequence used to train a single-genome model.
pub const MIN_TRAINING_SEQUENCE_LENGTH: usize = 20_000;

/// Symbol the translation tables use for stop codons.
pub const STOP_SYMBOL: char = '*';

/// Symbol emitted for codons containing ambiguous bases.
pub const UNKNOWN_AMINO_ACID: char = 'X';

// =============================================================================
// Sequence Processing Constants
// =============================================================================

/// Number of reading frames per strand
pub const READING_FRAMES: usize = 3;

/// Codon length in nucleotides
pub const CODON_LENGTH: usize = 3;

/// The only genetic code the predictor translates with (bacterial, archaeal).
pub const DEFAULT_TRANSLATION_TABLE: u8 = 11;

// =============================================================================
// ORF Model Constants
// =============================================================================

/// Minimum gene length (nt) for a trained model
pub const MINIMUM_GENE_LENGTH: usize = 90;

/// Minimum gene length (nt) for the metagenomic preset
pub const MIN_META_GENE_LENGTH: usize = 120;

/// Minimum length (nt) of a gene running off a sequence edge
pub const MINIMUM_EDGE_GENE_LENGTH: usize = 60;

/// Maximum overlap (nt) tolerated between two accepted genes
pub const MAXIMUM_OVERLAP: usize = 60;

/// ORFs at least this long (nt) feed the start codon statistics during training
pub const TRAINING_ORF_LENGTH: usize = 300;

/// Start codons used by less than this fraction of training ORFs are disabled
pub const MIN_START_CODON_FRACTION: f64 = 0.1;
