use std::io::Write;

use bio::io::fasta;

use crate::results::GeneCallTables;
use crate::types::GeneCallError;

/// Write amino acid sequences as FASTA, one record per gene callers id
pub fn write_amino_acid_fasta<W: Write>(
    writer: &mut W,
    tables: &GeneCallTables,
) -> Result<(), GeneCallError> {
    let mut fasta_writer = fasta::Writer::new(writer);
    for (gene_callers_id, sequence) in tables.amino_acid_sequences() {
        fasta_writer.write(&gene_callers_id.to_string(), None, sequence.as_bytes())?;
    }
    fasta_writer.flush()?;
    Ok(())
}
