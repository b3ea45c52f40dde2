//! Parallel prediction over a scoped worker pool.
//!
//! Work items are submitted as an indexed parallel iterator, so results are
//! collected by submission position: the output order is the input order
//! whichever worker finishes first.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::batch::WorkItem;
use crate::types::{GeneCallError, PredictedGene};

/// Predictions of one sequence: its identifier and its genes in emission order.
pub type SequencePredictions = (String, Vec<PredictedGene>);

/// A worker pool that lives for one run.
///
/// The pool's threads are released when the dispatcher is dropped.
#[derive(Debug)]
pub struct Dispatcher {
    pool: ThreadPool,
}

impl Dispatcher {
    /// Builds a pool of `num_threads` workers (`None` sizes it to the machine).
    ///
    /// # Errors
    ///
    /// - [`GeneCallError::InvalidThreadCount`] for `Some(0)`
    /// - [`GeneCallError::ThreadPool`] if the threads cannot be spawned
    pub fn new(num_threads: Option<usize>) -> Result<Self, GeneCallError> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("genecall-worker-{}", index));
        match num_threads {
            Some(0) => return Err(GeneCallError::InvalidThreadCount),
            Some(n) => builder = builder.num_threads(n),
            None => {}
        }
        let pool = builder
            .build()
            .map_err(|e| GeneCallError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Number of workers in the pool.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Predicts genes for every item and blocks until all are done.
    ///
    /// # Errors
    ///
    /// The first failing item aborts the batch; its error is returned as
    /// [`GeneCallError::PredictionFailed`] and no predictions are returned.
    pub fn run(&self, items: Vec<WorkItem>) -> Result<Vec<SequencePredictions>, GeneCallError> {
        self.pool
            .install(|| items.into_par_iter().map(predict).collect())
    }
}

/// Runs a whole batch on a pool created for this call only.
pub fn dispatch(
    items: Vec<WorkItem>,
    num_threads: Option<usize>,
) -> Result<Vec<SequencePredictions>, GeneCallError> {
    Dispatcher::new(num_threads)?.run(items)
}

fn predict(item: WorkItem) -> Result<SequencePredictions, GeneCallError> {
    let WorkItem { record, predictor } = item;
    match predictor.find_genes(&record.residues) {
        Ok(genes) => Ok((record.identifier, genes)),
        Err(error @ GeneCallError::PredictionFailed { .. }) => Err(error),
        Err(error) => Err(GeneCallError::PredictionFailed {
            contig: record.identifier,
            reason: error.to_string(),
        }),
    }
}
