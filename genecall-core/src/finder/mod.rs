//! Gene predictor capabilities.
//!
//! The pipeline never looks inside a predictor. It only needs two seams:
//!
//! - [`GeneFinder`]: a ready-to-use predictor that maps one sequence to its
//!   gene predictions. It is shared read-only by every worker of a run, so
//!   it must be `Send + Sync` and must not mutate itself while predicting.
//! - [`PredictorBackend`]: the factory that produces a [`GeneFinder`],
//!   either untrained for metagenomes or trained once on a single sequence.
//!
//! ## Built-in backend
//!
//! [`orf::OrfBackend`] wraps the six-frame [`orf::OrfFinder`] and is
//! available under the name [`orf::ORF_BACKEND_NAME`].
//!
//! ## Examples
//!
//! ```rust
//! use genecall_core::finder::backend_by_name;
//!
//! let backend = backend_by_name("genecall-orf", false)?;
//! let finder = backend.metagenomic()?;
//! let genes = finder.find_genes(b"ATGAAACGTTAA")?;
//! assert!(genes.is_empty());
//! # Ok::<(), genecall_core::types::GeneCallError>(())
//! ```

use std::sync::Arc;

use crate::types::{GeneCallError, PredictedGene};

pub mod orf;

pub use orf::{OrfBackend, OrfFinder, ORF_BACKEND_NAME};

/// A predictor ready to find genes.
pub trait GeneFinder: Send + Sync {
    /// Predicts the genes of one sequence.
    ///
    /// Genes are returned in the order the predictor emits them; the
    /// pipeline assigns identifiers in exactly that order.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole batch.
    fn find_genes(&self, residues: &[u8]) -> Result<Vec<PredictedGene>, GeneCallError>;
}

/// Produces predictors for the two operating modes.
pub trait PredictorBackend: Send + Sync {
    /// Name written to the `source` column of every gene call.
    fn name(&self) -> &str;

    /// Version written to the `version` column of every gene call.
    fn version(&self) -> &str;

    /// An untrained predictor for mixed-organism input.
    fn metagenomic(&self) -> Result<Arc<dyn GeneFinder>, GeneCallError>;

    /// A fresh predictor trained on exactly one sequence.
    fn train(&self, residues: &[u8]) -> Result<Arc<dyn GeneFinder>, GeneCallError>;
}

impl<T: PredictorBackend + ?Sized> PredictorBackend for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn version(&self) -> &str {
        (**self).version()
    }

    fn metagenomic(&self) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        (**self).metagenomic()
    }

    fn train(&self, residues: &[u8]) -> Result<Arc<dyn GeneFinder>, GeneCallError> {
        (**self).train(residues)
    }
}

/// Resolves a predictor backend by name.
///
/// # Errors
///
/// Returns [`GeneCallError::PredictorUnavailable`] if no backend with that
/// name is built into this binary.
pub fn backend_by_name(
    name: &str,
    closed_ends: bool,
) -> Result<Box<dyn PredictorBackend>, GeneCallError> {
    match name {
        ORF_BACKEND_NAME | "orf" => Ok(Box::new(OrfBackend::new(closed_ends))),
        other => Err(GeneCallError::PredictorUnavailable(format!(
            "no gene predictor named '{}' (available: {})",
            other, ORF_BACKEND_NAME
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_by_name_builtin() {
        let backend = backend_by_name(ORF_BACKEND_NAME, false).unwrap();
        assert_eq!(backend.name(), ORF_BACKEND_NAME);
        assert_eq!(backend.version(), crate::constants::VERSION);

        let alias = backend_by_name("orf", true).unwrap();
        assert_eq!(alias.name(), ORF_BACKEND_NAME);
    }

    #[test]
    fn test_backend_by_name_unknown() {
        match backend_by_name("pyrodigal", false) {
            Err(GeneCallError::PredictorUnavailable(msg)) => {
                assert!(msg.contains("pyrodigal"));
                assert!(msg.contains(ORF_BACKEND_NAME));
            }
            Err(other) => panic!("Expected PredictorUnavailable, got {:?}", other),
            Ok(_) => panic!("Expected PredictorUnavailable"),
        }
    }
}
