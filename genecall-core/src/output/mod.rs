//! Writers for the gene call tables.
//!
//! ## Supported tables
//!
//! - **Gene calls**: tab-separated, one row per gene with the header
//!   `gene_callers_id contig start stop direction partial call_type source version`.
//!   `partial` is written as `0`/`1` and `call_type` as its numeric code.
//! - **Amino acids**: FASTA, one record per gene named by its gene callers id.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::fs::File;
//!
//! use genecall_core::config::GeneCallerConfig;
//! use genecall_core::finder::OrfBackend;
//! use genecall_core::output::{write_table, OutputTable};
//! use genecall_core::sequence::FastaFile;
//! use genecall_core::GeneCaller;
//!
//! let caller = GeneCaller::new(GeneCallerConfig::default(), OrfBackend::new(false));
//! let tables = caller.process(&FastaFile::new("contigs.fa"))?;
//!
//! let mut gene_calls = File::create("gene_calls.tsv")?;
//! write_table(&mut gene_calls, &tables, OutputTable::GeneCalls)?;
//!
//! let mut amino_acids = File::create("amino_acids.fa")?;
//! write_table(&mut amino_acids, &tables, OutputTable::AminoAcids)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::results::GeneCallTables;
use crate::types::GeneCallError;

mod formats {
    pub mod amino_acids;
    pub mod gene_calls;
}

pub use formats::{amino_acids::write_amino_acid_fasta, gene_calls::write_gene_calls_tsv};

/// The table to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTable {
    GeneCalls,
    AminoAcids,
}

/// Writes one of the two tables in its file format.
///
/// # Errors
///
/// Returns [`GeneCallError::IoError`] if writing fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    tables: &GeneCallTables,
    table: OutputTable,
) -> Result<(), GeneCallError> {
    match table {
        OutputTable::GeneCalls => write_gene_calls_tsv(writer, tables),
        OutputTable::AminoAcids => write_amino_acid_fasta(writer, tables),
    }
}
