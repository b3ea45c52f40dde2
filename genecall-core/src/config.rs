use crate::types::GeneCallError;

/// Configuration settings for a gene calling run.
///
/// This struct controls the operating mode, the size of the worker pool and
/// the options handed to the predictor backend.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use genecall_core::config::GeneCallerConfig;
///
/// let config = GeneCallerConfig::default();
/// assert!(!config.single_mode);
/// ```
///
/// ## Single genome mode with four workers
///
/// ```rust
/// use genecall_core::config::GeneCallerConfig;
///
/// let config = GeneCallerConfig {
///     single_mode: true,
///     num_threads: Some(4),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneCallerConfig {
    /// Train a model on the longest sequence before predicting.
    ///
    /// Use for batches that all come from one organism (a draft or complete
    /// genome). The longest sequence must be at least
    /// [`MIN_TRAINING_SEQUENCE_LENGTH`](crate::constants::MIN_TRAINING_SEQUENCE_LENGTH)
    /// nucleotides long.
    ///
    /// **Default**: `false` (metagenome mode, no training)
    pub single_mode: bool,

    /// Number of workers used to predict genes in parallel.
    ///
    /// A fresh pool of this size is built for every run and released when
    /// the run ends. `Some(1)` processes sequences strictly one after another.
    ///
    /// **Default**: `None` (one worker per available core)
    pub num_threads: Option<usize>,

    /// Genetic code translation table.
    ///
    /// Alternate tables are not supported; any explicit value is rejected
    /// before the input is read.
    ///
    /// **Default**: `None`
    pub translation_table: Option<u8>,

    /// Treat sequences as having closed ends.
    ///
    /// When `true`, the predictor does not report genes running off the
    /// sequence edges.
    ///
    /// **Default**: `false`
    pub closed_ends: bool,
}

impl GeneCallerConfig {
    /// Checks the options that must be rejected before any I/O or training.
    ///
    /// # Errors
    ///
    /// - [`GeneCallError::UnsupportedTranslationTable`] if a translation table is set
    /// - [`GeneCallError::InvalidThreadCount`] if `num_threads` is `Some(0)`
    pub fn validate(&self) -> Result<(), GeneCallError> {
        if let Some(table) = self.translation_table {
            return Err(GeneCallError::UnsupportedTranslationTable(table));
        }
        if self.num_threads == Some(0) {
            return Err(GeneCallError::InvalidThreadCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneCallerConfig::default();
        assert!(!config.single_mode);
        assert!(!config.closed_ends);
        assert!(config.num_threads.is_none());
        assert!(config.translation_table.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_any_translation_table_is_rejected() {
        for table in [4, 11, 25] {
            let config = GeneCallerConfig {
                translation_table: Some(table),
                ..Default::default()
            };
            match config.validate() {
                Err(GeneCallError::UnsupportedTranslationTable(t)) => assert_eq!(t, table),
                other => panic!("Expected UnsupportedTranslationTable, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_threads_is_rejected() {
        let config = GeneCallerConfig {
            num_threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneCallError::InvalidThreadCount)
        ));
    }

    #[test]
    fn test_translation_table_checked_before_threads() {
        let config = GeneCallerConfig {
            num_threads: Some(0),
            translation_table: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneCallError::UnsupportedTranslationTable(4))
        ));
    }
}
