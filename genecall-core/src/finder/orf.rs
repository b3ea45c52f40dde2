//! Built-in six-frame open reading frame predictor.
//!
//! The finder scans all three frames of both strands for stop-to-stop
//! segments, keeps the most upstream enabled start codon of each segment,
//! and resolves overlaps greedily in favour of longer genes.
//!
//! Training uses the type-state pattern: an [`OrfFinder<Untrained>`] must be
//! turned into an [`OrfFinder<Trained>`], either by training on a genome or
//! by adopting the metagenomic preset, before it can predict genes.

use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::sync::Arc;

use bio::alphabets::dna::revcomp;
use bio::bio_types::strand::Strand;
use log::debug;

use super::{GeneFinder, PredictorBackend};
use crate::constants::{
    CODON_LENGTH, MAXIMUM_OVERLAP, MINIMUM_EDGE_GENE_LENGTH, MINIMUM_GENE_LENGTH,
    MIN_META_GENE_LENGTH, MIN_START_CODON_FRACTION, READING_FRAMES, TRAINING_ORF_LENGTH,
    VERSION,
};
use crate::sequence::gc_content;
use crate::sequence::translation::{gene_nucleotides, is_stop_codon, translate};
use crate::types::{GeneCallError, PredictedGene};

/// Name under which the built-in predictor reports its gene calls.
pub const ORF_BACKEND_NAME: &str = "genecall-orf";

/// Marker trait for the model state of an [`OrfFinder`].
pub trait ModelState {}

/// Marker type for a finder that has no model yet.
#[derive(Debug, Clone)]
pub struct Untrained;

/// Marker type for a finder that can predict genes.
#[derive(Debug, Clone)]
pub struct Trained;

impl ModelState for Untrained {}
impl ModelState for Trained {}

/// Start codons recognised by the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCodon {
    /// ATG start codon
    Atg,
    /// GTG start codon
    Gtg,
    /// TTG start codon
    Ttg,
}

impl StartCodon {
    /// Parses an uppercase codon.
    #[must_use]
    pub fn from_codon(codon: &[u8]) -> Option<Self> {
        match codon {
            b"ATG" => Some(Self::Atg),
            b"GTG" => Some(Self::Gtg),
            b"TTG" => Some(Self::Ttg),
            _ => None,
        }
    }

    /// Convert codon type to array index
    #[must_use]
    pub const fn to_index(self) -> usize {
        match self {
            Self::Atg => 0,
            Self::Gtg => 1,
            Self::Ttg => 2,
        }
    }
}

/// Parameters the finder predicts with.
///
/// Only `enabled_starts` and `min_gene_length` shape predictions.
/// `gc_content` and `start_usage` are statistics of the training sequence,
/// kept for inspection through [`OrfFinder::model`] and the training log;
/// `start_usage` is what `enabled_starts` is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrfModel {
    /// GC content of the training sequence (0.5 for the metagenomic preset),
    /// informational
    pub gc_content: f64,
    /// Fraction of training ORFs using ATG, GTG and TTG, informational
    pub start_usage: [f64; 3],
    /// Start codons the finder may open a gene with
    pub enabled_starts: [bool; 3],
    /// Minimum length (nt) of a gene with both a start and a stop codon
    pub min_gene_length: usize,
}

impl OrfModel {
    /// Preset used when the input is a mix of organisms.
    #[must_use]
    pub fn metagenomic() -> Self {
        Self {
            gc_content: 0.5,
            start_usage: [1.0 / 3.0; 3],
            enabled_starts: [true; 3],
            min_gene_length: MIN_META_GENE_LENGTH,
        }
    }

    fn allows(&self, start: StartCodon) -> bool {
        self.enabled_starts[start.to_index()]
    }
}

/// Six-frame ORF finder.
///
/// # Examples
///
/// ```rust
/// use genecall_core::finder::{GeneFinder, OrfFinder};
///
/// let gene = format!("CC{}{}{}CC", "ATG", "AAA".repeat(40), "TAA");
/// let finder = OrfFinder::new(true).metagenomic();
/// let genes = finder.find_genes(gene.as_bytes())?;
/// assert_eq!(genes.len(), 1);
/// assert_eq!((genes[0].begin, genes[0].end), (3, 128));
/// # Ok::<(), genecall_core::types::GeneCallError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrfFinder<S: ModelState> {
    closed_ends: bool,
    model: OrfModel,
    _state: PhantomData<S>,
}

impl OrfFinder<Untrained> {
    /// Creates a finder; with `closed_ends` no gene may run off a sequence edge.
    #[must_use]
    pub fn new(closed_ends: bool) -> Self {
        Self {
            closed_ends,
            model: OrfModel::metagenomic(),
            _state: PhantomData,
        }
    }

    /// Adopts the metagenomic preset without looking at any sequence.
    #[must_use]
    pub fn metagenomic(self) -> OrfFinder<Trained> {
        OrfFinder {
            closed_ends: self.closed_ends,
            model: OrfModel::metagenomic(),
            _state: PhantomData,
        }
    }

    /// Learns start codon usage and GC content from one genome sequence.
    ///
    /// Every complete ORF of at least [`TRAINING_ORF_LENGTH`] nucleotides
    /// on either strand contributes its start codon. Start codons used by
    /// fewer than [`MIN_START_CODON_FRACTION`] of them are disabled, except
    /// ATG which is always enabled.
    #[must_use]
    pub fn train(self, residues: &[u8]) -> OrfFinder<Trained> {
        let forward = residues.to_ascii_uppercase();
        let reverse = revcomp(&forward);

        let mut counts = [0usize; 3];
        for strand_sequence in [&forward, &reverse] {
            for orf in scan_strand(strand_sequence, |_| true, true) {
                if orf.len() >= TRAINING_ORF_LENGTH {
                    if let Some(start) = orf.start_codon {
                        counts[start.to_index()] += 1;
                    }
                }
            }
        }

        let total: usize = counts.iter().sum();
        let start_usage = if total == 0 {
            [1.0 / 3.0; 3]
        } else {
            counts.map(|count| count as f64 / total as f64)
        };
        let enabled_starts = [
            true,
            start_usage[1] >= MIN_START_CODON_FRACTION,
            start_usage[2] >= MIN_START_CODON_FRACTION,
        ];

        let model = OrfModel {
            gc_content: gc_content(&forward),
            start_usage,
            enabled_starts,
            min_gene_length: MINIMUM_GENE_LENGTH,
        };
        debug!(
            "Trained on {} bp ({:.2}% GC): {} training ORFs, start usage ATG {:.3} GTG {:.3} TTG {:.3}",
            forward.len(),
            model.gc_content * 100.0,
            total,
            model.start_usage[0],
            model.start_usage[1],
            model.start_usage[2]
        );

        OrfFinder {
            closed_ends: self.closed_ends,
            model,
            _state: PhantomData,
        }
    }
}

impl OrfFinder<Trained> {
    #[must_use]
    pub const fn model(&self) -> &OrfModel {
        &self.model
    }

    /// Predicts genes sorted by position.
    #[must_use]
    pub fn predict(&self, residues: &[u8]) -> Vec<PredictedGene> {
        let forward = residues.to_ascii_uppercase();
        let reverse = revcomp(&forward);
        let length = forward.len();
        let allows = |start: StartCodon| self.model.allows(start);

        let mut candidates: Vec<PredictedGene> = Vec::new();
        for (strand, strand_sequence) in [(Strand::Forward, &forward), (Strand::Reverse, &reverse)]
        {
            for orf in scan_strand(strand_sequence, allows, self.closed_ends) {
                let minimum = if orf.is_complete() {
                    self.model.min_gene_length
                } else {
                    MINIMUM_EDGE_GENE_LENGTH
                };
                if orf.len() >= minimum {
                    candidates.push(orf.into_gene(&forward, length, strand));
                }
            }
        }

        let mut genes = resolve_overlaps(candidates);
        genes.sort_by_key(|gene| (gene.begin, gene.end, gene.strand == Strand::Reverse));
        genes
    }
}

impl GeneFinder for OrfFinder<Trained> {
    fn find_genes(&self, residues: &[u8]) -> Result<Vec<PredictedGene>, GeneCallError> {
        Ok(self.predict(residues))
    }
}

/// Backend producing [`OrfFinder`]s for the pipeline.
#[derive(Debug, Clone, Default)]
pub struct OrfBackend {
    closed_ends: bool,
}

impl OrfBackend {
    #[must_use]
    pub const fn new(closed_ends: bool) -> Self {
        Self { closed_ends }
    }
}

impl PredictorBackend for OrfBackend {
    fn name(&self) -> &str {
        ORF_BACKEND_NAME
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn metagenomic(&self) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        Ok(Arc::new(OrfFinder::new(self.closed_ends).metagenomic()))
    }

    fn train(&self, residues: &[u8]) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        Ok(Arc::new(OrfFinder::new(self.closed_ends).train(residues)))
    }
}

/// ORF in the coordinates of the strand it was scanned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OrfCandidate {
    /// First base (0-based)
    start: usize,
    /// One past the last base
    stop: usize,
    /// `None` when the ORF runs off the 5' edge
    start_codon: Option<StartCodon>,
    /// `false` when the ORF runs off the 3' edge
    has_stop: bool,
}

impl OrfCandidate {
    const fn len(&self) -> usize {
        self.stop - self.start
    }

    const fn is_complete(&self) -> bool {
        self.start_codon.is_some() && self.has_stop
    }

    fn into_gene(self, forward: &[u8], length: usize, strand: Strand) -> PredictedGene {
        let missing_start = self.start_codon.is_none();
        let missing_stop = !self.has_stop;
        let (begin, end, partial_begin, partial_end) = match strand {
            Strand::Reverse => (
                length - self.stop + 1,
                length - self.start,
                missing_stop,
                missing_start,
            ),
            _ => (self.start + 1, self.stop, missing_start, missing_stop),
        };
        let protein = translate(
            &gene_nucleotides(forward, begin, end, strand),
            !missing_start,
        );
        PredictedGene {
            begin,
            end,
            strand,
            partial_begin,
            partial_end,
            protein,
        }
    }
}

/// Finds the ORFs of all three frames of one strand.
fn scan_strand(
    sequence: &[u8],
    allows: impl Fn(StartCodon) -> bool,
    closed_ends: bool,
) -> Vec<OrfCandidate> {
    let length = sequence.len();
    let mut orfs = Vec::new();

    for frame in 0..READING_FRAMES {
        let mut segment_start = frame;
        let mut at_edge = true;
        let mut first_start: Option<(usize, StartCodon)> = None;
        let mut position = frame;

        while position + CODON_LENGTH <= length {
            let codon = &sequence[position..position + CODON_LENGTH];
            if is_stop_codon(codon) {
                let stop = position + CODON_LENGTH;
                if let Some((start, start_codon)) = first_start {
                    orfs.push(OrfCandidate {
                        start,
                        stop,
                        start_codon: Some(start_codon),
                        has_stop: true,
                    });
                } else if at_edge && !closed_ends && position > segment_start {
                    orfs.push(OrfCandidate {
                        start: segment_start,
                        stop,
                        start_codon: None,
                        has_stop: true,
                    });
                }
                segment_start = stop;
                at_edge = false;
                first_start = None;
            } else if first_start.is_none() {
                first_start = StartCodon::from_codon(codon)
                    .filter(|start| allows(*start))
                    .map(|start| (position, start));
            }
            position += CODON_LENGTH;
        }

        // `position` now marks the end of the last complete codon
        if !closed_ends {
            if let Some((start, start_codon)) = first_start {
                orfs.push(OrfCandidate {
                    start,
                    stop: position,
                    start_codon: Some(start_codon),
                    has_stop: false,
                });
            } else if at_edge && position > segment_start {
                orfs.push(OrfCandidate {
                    start: segment_start,
                    stop: position,
                    start_codon: None,
                    has_stop: false,
                });
            }
        }
    }

    orfs
}

/// Keeps the longest candidates, rejecting any that share more than
/// [`MAXIMUM_OVERLAP`] nucleotides with an accepted gene.
fn resolve_overlaps(mut candidates: Vec<PredictedGene>) -> Vec<PredictedGene> {
    candidates.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.begin.cmp(&b.begin))
            .then((a.strand == Strand::Reverse).cmp(&(b.strand == Strand::Reverse)))
    });

    let mut occupied: BTreeSet<(usize, usize)> = BTreeSet::new();
    let mut longest = 0;
    let mut accepted = Vec::new();

    for gene in candidates {
        let lowest_begin = gene.begin.saturating_sub(longest);
        let conflicts = occupied
            .range((lowest_begin, 0)..=(gene.end, usize::MAX))
            .any(|&(begin, end)| {
                let shared = end.min(gene.end) as isize - begin.max(gene.begin) as isize + 1;
                shared > MAXIMUM_OVERLAP as isize
            });
        if !conflicts {
            occupied.insert((gene.begin, gene.end));
            longest = longest.max(gene.len());
            accepted.push(gene);
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 126 nt gene flanked by two bases on each side
    fn single_gene(start: &str) -> String {
        format!("CC{}{}TAACC", start, "AAA".repeat(40))
    }

    fn create_training_sequence() -> Vec<u8> {
        let unit = format!("ATG{}TAA", "AAA".repeat(120));
        unit.repeat(60).into_bytes()
    }

    #[test]
    fn test_training_state_markers() {
        assert_eq!(format!("{:?}", Untrained), "Untrained");
        assert_eq!(format!("{:?}", Trained), "Trained");
    }

    #[test]
    fn test_start_codon_parsing() {
        assert_eq!(StartCodon::from_codon(b"ATG"), Some(StartCodon::Atg));
        assert_eq!(StartCodon::from_codon(b"GTG"), Some(StartCodon::Gtg));
        assert_eq!(StartCodon::from_codon(b"TTG"), Some(StartCodon::Ttg));
        assert_eq!(StartCodon::from_codon(b"CTG"), None);
        assert_eq!(StartCodon::Ttg.to_index(), 2);
    }

    #[test]
    fn test_forward_gene() {
        let finder = OrfFinder::new(true).metagenomic();
        let genes = finder.predict(single_gene("ATG").as_bytes());

        assert_eq!(
            genes,
            vec![PredictedGene {
                begin: 3,
                end: 128,
                strand: Strand::Forward,
                partial_begin: false,
                partial_end: false,
                protein: format!("M{}*", "K".repeat(40)),
            }]
        );
    }

    #[test]
    fn test_reverse_gene() {
        let sequence = revcomp(single_gene("ATG").as_bytes());
        let finder = OrfFinder::new(true).metagenomic();
        let genes = finder.predict(&sequence);

        assert_eq!(genes.len(), 1);
        assert_eq!((genes[0].begin, genes[0].end), (3, 128));
        assert_eq!(genes[0].strand, Strand::Reverse);
        assert!(genes[0].has_start_codon());
        assert_eq!(genes[0].protein, format!("M{}*", "K".repeat(40)));
    }

    #[test]
    fn test_lowercase_input() {
        let finder = OrfFinder::new(true).metagenomic();
        let upper = finder.predict(single_gene("ATG").as_bytes());
        let lower = finder.predict(single_gene("ATG").to_lowercase().as_bytes());
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_short_gene_is_dropped() {
        let sequence = format!("CCATG{}TAACC", "AAA".repeat(20));
        let finder = OrfFinder::new(true).metagenomic();
        assert!(finder.predict(sequence.as_bytes()).is_empty());
    }

    #[test]
    fn test_edge_gene_is_partial() {
        let sequence = format!("{}TAACC", "AAA".repeat(50));
        let finder = OrfFinder::new(false).metagenomic();
        let genes = finder.predict(sequence.as_bytes());

        assert_eq!(genes.len(), 1);
        let gene = &genes[0];
        assert_eq!((gene.begin, gene.end), (1, 153));
        assert_eq!(gene.strand, Strand::Forward);
        assert!(gene.partial_begin);
        assert!(!gene.partial_end);
        assert!(!gene.has_start_codon());
        assert_eq!(gene.protein, format!("{}*", "K".repeat(50)));
    }

    #[test]
    fn test_closed_ends_drop_edge_genes() {
        let sequence = format!("{}TAACC", "AAA".repeat(50));
        let finder = OrfFinder::new(true).metagenomic();
        assert!(finder.predict(sequence.as_bytes()).is_empty());
    }

    #[test]
    fn test_overlapping_genes_keep_longest() {
        let long = PredictedGene {
            begin: 1,
            end: 300,
            strand: Strand::Forward,
            partial_begin: false,
            partial_end: false,
            protein: String::new(),
        };
        let nested = PredictedGene {
            begin: 100,
            end: 250,
            strand: Strand::Reverse,
            ..long.clone()
        };
        let touching = PredictedGene {
            begin: 241,
            end: 400,
            strand: Strand::Forward,
            ..long.clone()
        };

        let accepted = resolve_overlaps(vec![nested, touching.clone(), long.clone()]);
        assert_eq!(accepted, vec![long, touching]);
    }

    #[test]
    fn test_training_learns_start_usage() {
        let trained = OrfFinder::new(false).train(&create_training_sequence());
        let model = trained.model();

        assert_eq!(model.start_usage, [1.0, 0.0, 0.0]);
        assert_eq!(model.enabled_starts, [true, false, false]);
        assert_eq!(model.min_gene_length, MINIMUM_GENE_LENGTH);
        assert!(model.gc_content < 0.01);
    }

    #[test]
    fn test_training_statistics_do_not_change_predictions() {
        let trained = OrfFinder::new(false).train(&create_training_sequence());
        let mut relabelled = trained.clone();
        relabelled.model.gc_content = 0.9;
        relabelled.model.start_usage = [0.2, 0.4, 0.4];

        let sequence = create_training_sequence();
        assert_eq!(trained.predict(&sequence), relabelled.predict(&sequence));
    }

    #[test]
    fn test_training_without_orfs_keeps_all_starts() {
        let trained = OrfFinder::new(false).train(&b"CCCCCC".repeat(10));
        assert_eq!(trained.model().enabled_starts, [true; 3]);
    }

    #[test]
    fn test_trained_model_ignores_disabled_starts() {
        let sequence = single_gene("GTG");
        let trained = OrfFinder::new(true).train(&create_training_sequence());
        assert!(trained.predict(sequence.as_bytes()).is_empty());

        let meta = OrfFinder::new(true).metagenomic();
        let genes = meta.predict(sequence.as_bytes());
        assert_eq!(genes.len(), 1);
        assert!(genes[0].protein.starts_with('M'));
    }

    #[test]
    fn test_backend_trains_fresh_finders() {
        let backend = OrfBackend::new(true);
        let finder = backend.train(&create_training_sequence()).unwrap();
        let genes = finder.find_genes(single_gene("ATG").as_bytes()).unwrap();
        assert_eq!(genes.len(), 1);
    }
}
