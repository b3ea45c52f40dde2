use std::io::Write;

use crate::results::GeneCallTables;
use crate::types::GeneCallError;

const HEADER: [&str; 9] = [
    "gene_callers_id",
    "contig",
    "start",
    "stop",
    "direction",
    "partial",
    "call_type",
    "source",
    "version",
];

/// Write the gene calls table as tab-separated values
pub fn write_gene_calls_tsv<W: Write>(
    writer: &mut W,
    tables: &GeneCallTables,
) -> Result<(), GeneCallError> {
    writeln!(writer, "{}", HEADER.join("\t"))?;
    for (gene_callers_id, call) in tables.gene_calls() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            gene_callers_id,
            call.contig,
            call.start,
            call.stop,
            call.direction,
            u8::from(call.partial),
            call.call_type,
            call.source,
            call.version
        )?;
    }
    Ok(())
}
