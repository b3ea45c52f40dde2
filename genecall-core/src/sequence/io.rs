use std::fs::File;
use std::path::{Path, PathBuf};

use bio::io::fasta;

use super::{RecordIter, SequenceSource};
use crate::types::{GeneCallError, SequenceRecord};

/// A FASTA file read with rust-bio.
///
/// Each call to [`SequenceSource::records`] reopens the file, so the file
/// is streamed rather than held in memory between passes.
#[derive(Debug, Clone)]
pub struct FastaFile {
    path: PathBuf,
}

impl FastaFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SequenceSource for FastaFile {
    fn records(&self) -> Result<RecordIter<'_>, GeneCallError> {
        let file = File::open(&self.path)?;
        let reader = fasta::Reader::new(file);
        Ok(Box::new(reader.records().map(|result| {
            let record = result.map_err(|e| GeneCallError::ParseError(e.to_string()))?;
            record
                .check()
                .map_err(|e| GeneCallError::ParseError(format!("{}: {}", record.id(), e)))?;
            Ok(SequenceRecord {
                identifier: record.id().to_string(),
                description: record.desc().map(String::from),
                residues: record.seq().to_vec(),
            })
        })))
    }
}
