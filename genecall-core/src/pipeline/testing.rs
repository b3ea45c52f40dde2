//! Deterministic predictors for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use bio::bio_types::strand::Strand;

use crate::finder::{GeneFinder, PredictorBackend};
use crate::types::{GeneCallError, PredictedGene};

/// Genes a [`ScriptedFinder`] reports for `residues`.
///
/// Between one and four genes depending on the sequence length, alternating
/// strands, with partial flags on the first and last gene.
pub(crate) fn scripted_genes(residues: &[u8]) -> Vec<PredictedGene> {
    let count = residues.len() / 1000 % 4 + 1;
    (0..count)
        .map(|i| {
            let begin = 1 + i * 300;
            PredictedGene {
                begin,
                end: begin + 89,
                strand: if i % 2 == 0 {
                    Strand::Forward
                } else {
                    Strand::Reverse
                },
                partial_begin: i == 0,
                partial_end: i == count - 1 && count > 1,
                protein: format!("M*{}*", "K".repeat(i + 1)),
            }
        })
        .collect()
}

/// Predicts [`scripted_genes`], failing on sequences containing `N`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedFinder {
    delay_per_kb: Option<Duration>,
}

impl ScriptedFinder {
    /// A finder whose running time grows with the sequence length.
    pub(crate) fn slow() -> Self {
        Self {
            delay_per_kb: Some(Duration::from_millis(10)),
        }
    }
}

impl GeneFinder for ScriptedFinder {
    fn find_genes(&self, residues: &[u8]) -> Result<Vec<PredictedGene>, GeneCallError> {
        if let Some(delay) = self.delay_per_kb {
            thread::sleep(delay * (residues.len() / 1000) as u32);
        }
        if residues.contains(&b'N') {
            return Err(GeneCallError::ParseError(
                "ambiguous nucleotide in sequence".to_string(),
            ));
        }
        Ok(scripted_genes(residues))
    }
}

/// Records how it was asked for predictors.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    trained_on: Mutex<Vec<(usize, u8)>>,
    metagenomic_calls: AtomicUsize,
    slow: bool,
}

impl ScriptedBackend {
    /// A backend handing out [`ScriptedFinder::slow`] predictors.
    pub(crate) fn slow() -> Self {
        Self {
            slow: true,
            ..Self::default()
        }
    }

    fn finder(&self) -> Arc<dyn GeneFinder> {
        if self.slow {
            Arc::new(ScriptedFinder::slow())
        } else {
            Arc::new(ScriptedFinder::default())
        }
    }

    /// Length and first residue of every training sequence, in call order.
    pub(crate) fn trained_on(&self) -> Vec<(usize, u8)> {
        self.trained_on
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub(crate) fn metagenomic_calls(&self) -> usize {
        self.metagenomic_calls.load(Ordering::SeqCst)
    }
}

impl PredictorBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn version(&self) -> &str {
        "9.9"
    }

    fn metagenomic(&self) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        self.metagenomic_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.finder())
    }

    fn train(&self, residues: &[u8]) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        let first = residues.first().copied().unwrap_or_default();
        if let Ok(mut calls) = self.trained_on.lock() {
            calls.push((residues.len(), first));
        }
        Ok(self.finder())
    }
}
