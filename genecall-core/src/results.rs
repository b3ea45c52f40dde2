use std::collections::BTreeMap;
use std::fmt;

/// Type of a gene call, with the numeric codes used in gene call tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    /// Protein-coding gene
    Coding,
    /// Non-coding gene (rRNA, tRNA, ...)
    Noncoding,
    /// Unknown gene type
    Unknown,
}

impl CallType {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Coding => 1,
            Self::Noncoding => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the gene calls table.
///
/// # Fields
///
/// - `start`: 0-based start (the predictor's 1-based `begin` minus one)
/// - `stop`: exclusive end, equal to the predictor's inclusive `end`
/// - `direction`: `'f'` for the forward strand, `'r'` for the reverse strand
/// - `partial`: the gene runs off either sequence edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneCall {
    pub contig: String,
    pub start: usize,
    pub stop: usize,
    pub direction: char,
    pub partial: bool,
    pub call_type: CallType,
    pub source: String,
    pub version: String,
}

/// Gene calls and their amino acid sequences, keyed by gene callers id.
///
/// Both tables always hold the same keys: the only way to add a record is
/// [`GeneCallTables::push`], which stores a gene call together with its
/// amino acid sequence under the next identifier. Identifiers start at 0
/// and grow by one per gene.
///
/// # Examples
///
/// ```rust
/// use genecall_core::results::{CallType, GeneCall, GeneCallTables};
///
/// let mut tables = GeneCallTables::new();
/// let id = tables.push(
///     GeneCall {
///         contig: "contig_1".to_string(),
///         start: 0,
///         stop: 300,
///         direction: 'f',
///         partial: false,
///         call_type: CallType::Coding,
///         source: "genecall-orf".to_string(),
///         version: "0.1.0".to_string(),
///     },
///     "MKV".to_string(),
/// );
/// assert_eq!(id, 0);
/// assert_eq!(tables.amino_acid_sequence(0), Some("MKV"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneCallTables {
    gene_calls: BTreeMap<usize, GeneCall>,
    amino_acid_sequences: BTreeMap<usize, String>,
}

impl GeneCallTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one gene and returns the identifier it was stored under.
    pub fn push(&mut self, gene_call: GeneCall, amino_acid_sequence: String) -> usize {
        let gene_callers_id = self.gene_calls.len();
        self.gene_calls.insert(gene_callers_id, gene_call);
        self.amino_acid_sequences
            .insert(gene_callers_id, amino_acid_sequence);
        gene_callers_id
    }

    /// Number of genes in the tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gene_calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gene_calls.is_empty()
    }

    #[must_use]
    pub fn gene_call(&self, gene_callers_id: usize) -> Option<&GeneCall> {
        self.gene_calls.get(&gene_callers_id)
    }

    #[must_use]
    pub fn amino_acid_sequence(&self, gene_callers_id: usize) -> Option<&str> {
        self.amino_acid_sequences
            .get(&gene_callers_id)
            .map(String::as_str)
    }

    /// Gene calls in identifier order.
    #[must_use]
    pub const fn gene_calls(&self) -> &BTreeMap<usize, GeneCall> {
        &self.gene_calls
    }

    /// Amino acid sequences in identifier order.
    #[must_use]
    pub const fn amino_acid_sequences(&self) -> &BTreeMap<usize, String> {
        &self.amino_acid_sequences
    }
}
