//! # genecall
//!
//! Batch gene calling for prokaryotic contigs.
//!
//! A batch of nucleotide sequences is run through a gene predictor in
//! parallel and the predictions are collected into two tables keyed by a
//! batch-wide gene callers id: the gene calls (location, strand, partial
//! flag, provenance) and the amino acid sequences of the genes.
//!
//! ## Features
//!
//! - **Single genome mode**: train the predictor once on the longest
//!   sequence, then predict on every sequence
//! - **Metagenome mode**: predict with an untrained, mixed-organism model
//! - **Deterministic parallelism**: identifiers and table contents do not
//!   depend on the number of workers or on which worker finishes first
//! - **Pluggable predictors**: anything implementing
//!   [`finder::PredictorBackend`] can be driven by the pipeline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genecall_core::config::GeneCallerConfig;
//! use genecall_core::finder::OrfBackend;
//! use genecall_core::sequence::FastaFile;
//! use genecall_core::GeneCaller;
//!
//! let config = GeneCallerConfig {
//!     single_mode: true,
//!     num_threads: Some(4),
//!     ..Default::default()
//! };
//! let caller = GeneCaller::new(config, OrfBackend::new(false));
//! let tables = caller.process(&FastaFile::new("genome.fasta"))?;
//!
//! for (gene_callers_id, call) in tables.gene_calls() {
//!     println!("{}\t{}\t{}..{}", gene_callers_id, call.contig, call.start, call.stop);
//! }
//! # Ok::<(), genecall_core::types::GeneCallError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: run configuration
//! - [`finder`]: predictor traits and the built-in ORF predictor
//! - [`pipeline`]: mode selection, batch loading, dispatch and assembly
//! - [`results`]: gene call tables
//! - [`output`]: table writers
//! - [`report`]: progress events
//! - [`sequence`]: sequence sources and translation
//! - [`types`]: core data types and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, GeneCallError>`](types::GeneCallError).
//! Every error is fatal to the run: a failed run returns no tables.

pub mod config;
pub mod constants;
pub mod finder;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod sequence;
pub mod types;

pub use pipeline::GeneCaller;
pub use types::GeneCallError;
