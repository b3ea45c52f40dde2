//! Operating mode selection and the one-time training step.

use std::sync::Arc;

use crate::constants::MIN_TRAINING_SEQUENCE_LENGTH;
use crate::finder::{GeneFinder, PredictorBackend};
use crate::report::{Reporter, RunEvent};
use crate::sequence::SequenceSource;
use crate::types::{GeneCallError, PredictionMode, SequenceRecord};

/// Scans the source once and returns its longest sequence.
///
/// Ties go to the sequence that comes first. Returns `None` for an empty
/// source.
pub fn find_training_sequence<S: SequenceSource + ?Sized>(
    source: &S,
) -> Result<Option<SequenceRecord>, GeneCallError> {
    let mut longest: Option<SequenceRecord> = None;
    for record in source.records()? {
        let record = record?;
        if longest.as_ref().map_or(true, |best| record.len() > best.len()) {
            longest = Some(record);
        }
    }
    Ok(longest)
}

/// Produces the predictor every worker of the run will share.
///
/// In metagenome mode the backend's untrained predictor is returned as is.
/// In single genome mode the longest sequence of the source is located,
/// checked against [`MIN_TRAINING_SEQUENCE_LENGTH`], and used to train a
/// fresh predictor. Training happens here, exactly once, before any work is
/// dispatched.
///
/// # Errors
///
/// - [`GeneCallError::TrainingSequenceTooShort`] if the longest sequence is
///   shorter than [`MIN_TRAINING_SEQUENCE_LENGTH`] (an empty source counts
///   as length 0)
/// - errors from reading the source or from the backend
pub fn select_predictor<S, B>(
    source: &S,
    mode: PredictionMode,
    backend: &B,
    reporter: &dyn Reporter,
) -> Result<Arc<dyn GeneFinder>, GeneCallError>
where
    S: SequenceSource + ?Sized,
    B: PredictorBackend + ?Sized,
{
    match mode {
        PredictionMode::Metagenome => backend.metagenomic(),
        PredictionMode::SingleGenome => {
            let candidate = find_training_sequence(source)?;
            let length = candidate.as_ref().map_or(0, SequenceRecord::len);
            let candidate = match candidate {
                Some(record) if length >= MIN_TRAINING_SEQUENCE_LENGTH => record,
                _ => {
                    return Err(GeneCallError::TrainingSequenceTooShort {
                        length,
                        minimum: MIN_TRAINING_SEQUENCE_LENGTH,
                    })
                }
            };

            reporter.report(&RunEvent::TrainingSequenceSelected {
                identifier: candidate.identifier.clone(),
                length,
            });
            backend.train(&candidate.residues)
        }
    }
}
