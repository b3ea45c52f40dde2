//! Batch gene calling.
//!
//! A run goes through four stages, each in its own module:
//!
//! 1. [`mode`]: pick single genome or metagenome mode and, in single genome
//!    mode, train the predictor once on the longest sequence
//! 2. [`batch`]: read the source into an ordered list of work items sharing
//!    that predictor
//! 3. [`dispatch`]: predict genes on a worker pool built for the run,
//!    collecting results in submission order
//! 4. [`assembly`]: merge the ordered results into the gene call and amino
//!    acid tables, assigning identifiers from 0
//!
//! [`GeneCaller`] drives the four stages.
//!
//! ## Examples
//!
//! ```rust
//! use genecall_core::config::GeneCallerConfig;
//! use genecall_core::finder::OrfBackend;
//! use genecall_core::report::SilentReporter;
//! use genecall_core::types::SequenceRecord;
//! use genecall_core::GeneCaller;
//!
//! let caller = GeneCaller::with_reporter(
//!     GeneCallerConfig::default(),
//!     OrfBackend::new(false),
//!     SilentReporter,
//! );
//! let batch = vec![SequenceRecord::new("contig_1", "ATGAAACCCGGGTTTTAA")];
//! let tables = caller.process(&batch)?;
//! assert!(tables.is_empty());
//! # Ok::<(), genecall_core::types::GeneCallError>(())
//! ```

pub mod assembly;
pub mod batch;
pub mod dispatch;
pub mod mode;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::GeneCallerConfig;
use crate::finder::PredictorBackend;
use crate::report::{LogReporter, Reporter, RunEvent};
use crate::results::GeneCallTables;
use crate::sequence::SequenceSource;
use crate::types::{GeneCallError, PredictionMode};

use self::assembly::assemble;
use self::batch::load_batch;
use self::dispatch::Dispatcher;
use self::mode::select_predictor;

/// Runs the gene predictor over whole batches of sequences.
///
/// A `GeneCaller` holds no per-run state; every call to
/// [`process`](GeneCaller::process) trains (if needed), builds its own worker
/// pool and returns fresh tables.
#[derive(Debug)]
pub struct GeneCaller<B: PredictorBackend, R: Reporter = LogReporter> {
    config: GeneCallerConfig,
    backend: B,
    reporter: R,
}

impl<B: PredictorBackend> GeneCaller<B> {
    /// Creates a caller that reports progress through the `log` facade.
    pub fn new(config: GeneCallerConfig, backend: B) -> Self {
        Self::with_reporter(config, backend, LogReporter)
    }
}

impl<B: PredictorBackend, R: Reporter> GeneCaller<B, R> {
    pub fn with_reporter(config: GeneCallerConfig, backend: B, reporter: R) -> Self {
        Self {
            config,
            backend,
            reporter,
        }
    }

    pub fn config(&self) -> &GeneCallerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Predicts the genes of every sequence in `source`.
    ///
    /// The tables are keyed by gene callers id, assigned from 0 in batch
    /// order and, within a sequence, in the order the predictor emitted the
    /// genes. The result does not depend on the number of workers.
    ///
    /// # Errors
    ///
    /// Any error aborts the run and no tables are returned:
    ///
    /// - configuration errors (see [`GeneCallError::is_configuration_error`]),
    ///   checked before the source is read
    /// - errors reading the source
    /// - [`GeneCallError::PredictionFailed`] if the predictor fails on any
    ///   sequence
    /// - [`GeneCallError::InvalidGeneCoordinates`] or
    ///   [`GeneCallError::InvalidStrand`] for malformed predictions
    pub fn process<S: SequenceSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<GeneCallTables, GeneCallError> {
        self.config.validate()?;

        let mode = PredictionMode::from_single_mode(self.config.single_mode);
        self.reporter.report(&RunEvent::ModeSelected { mode });
        let predictor = select_predictor(source, mode, &self.backend, &self.reporter)?;

        let items = load_batch(source, &predictor)?;
        self.reporter.report(&RunEvent::BatchLoaded {
            sequences: items.len(),
        });

        let predictions = {
            let dispatcher = Dispatcher::new(self.config.num_threads)?;
            self.reporter.report(&RunEvent::Dispatching {
                workers: dispatcher.workers(),
            });
            dispatcher.run(items)?
        };

        let tables = assemble(predictions, self.backend.name(), self.backend.version())?;
        self.reporter.report(&RunEvent::Completed {
            caller: self.backend.name().to_string(),
            version: self.backend.version().to_string(),
            genes: tables.len(),
        });
        Ok(tables)
    }
}
