//! Builds the ordered work list of a run.

use std::fmt;
use std::sync::Arc;

use crate::finder::GeneFinder;
use crate::sequence::SequenceSource;
use crate::types::{GeneCallError, SequenceRecord};

/// One sequence together with the predictor that will process it.
#[derive(Clone)]
pub struct WorkItem {
    pub record: SequenceRecord,
    pub predictor: Arc<dyn GeneFinder>,
}

impl fmt::Debug for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkItem")
            .field("identifier", &self.record.identifier)
            .field("length", &self.record.len())
            .finish_non_exhaustive()
    }
}

/// Reads the whole source, in order, into work items sharing `predictor`.
///
/// Nothing is filtered or deduplicated; the number of items is the batch
/// size.
pub fn load_batch<S: SequenceSource + ?Sized>(
    source: &S,
    predictor: &Arc<dyn GeneFinder>,
) -> Result<Vec<WorkItem>, GeneCallError> {
    source
        .records()?
        .map(|record| {
            Ok(WorkItem {
                record: record?,
                predictor: Arc::clone(predictor),
            })
        })
        .collect()
}
