//! Progress and summary events emitted during a run.
//!
//! The pipeline reports what it is doing through a [`Reporter`] and owns no
//! display logic. [`LogReporter`] forwards events to the `log` facade, which
//! the command-line tool routes to stderr.

use std::fmt;

use log::info;
#[cfg(test)]
use mockall::automock;

use crate::types::PredictionMode;

/// Informational event of a gene calling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// The operating mode was chosen
    ModeSelected { mode: PredictionMode },
    /// Single genome mode picked the sequence to train on
    TrainingSequenceSelected { identifier: String, length: usize },
    /// The work list is built
    BatchLoaded { sequences: usize },
    /// Prediction starts on the worker pool
    Dispatching { workers: usize },
    /// Every sequence was processed and the tables are complete
    Completed {
        caller: String,
        version: String,
        genes: usize,
    },
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeSelected { mode } => write!(f, "Procedure: {}", mode),
            Self::TrainingSequenceSelected { identifier, length } => {
                write!(f, "Training on '{}' ({} bp)", identifier, length)
            }
            Self::BatchLoaded { sequences } => write!(f, "Number of sequences: {}", sequences),
            Self::Dispatching { workers } => write!(
                f,
                "Identifying ORFs using {} {}",
                workers,
                if *workers == 1 { "thread" } else { "threads" }
            ),
            Self::Completed {
                caller,
                version,
                genes,
            } => write!(f, "{} ({}) has identified {} genes", caller, version, genes),
        }
    }
}

/// Receives the events of a run.
#[cfg_attr(test, automock)]
pub trait Reporter {
    fn report(&self, event: &RunEvent);
}

/// Writes every event at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, event: &RunEvent) {
        info!("{}", event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _event: &RunEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(
            RunEvent::ModeSelected {
                mode: PredictionMode::Metagenome
            }
            .to_string(),
            "Procedure: Metagenome"
        );
        assert_eq!(
            RunEvent::BatchLoaded { sequences: 3 }.to_string(),
            "Number of sequences: 3"
        );
        assert_eq!(
            RunEvent::Dispatching { workers: 1 }.to_string(),
            "Identifying ORFs using 1 thread"
        );
        assert_eq!(
            RunEvent::Completed {
                caller: "genecall-orf".into(),
                version: "0.1.0".into(),
                genes: 42
            }
            .to_string(),
            "genecall-orf (0.1.0) has identified 42 genes"
        );
    }
}
