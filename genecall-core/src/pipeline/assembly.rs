//! Merges ordered per-sequence predictions into the gene call tables.

use bio::bio_types::strand::Strand;

use super::dispatch::SequencePredictions;
use crate::constants::STOP_SYMBOL;
use crate::results::{CallType, GeneCall, GeneCallTables};
use crate::types::{GeneCallError, PredictedGene};

/// Builds the gene call and amino acid tables.
///
/// Sequences are taken in the order given and genes in the order the
/// predictor emitted them; identifiers are assigned from 0 across the whole
/// batch. `source` and `version` identify the predictor in every row.
///
/// # Errors
///
/// A gene with `begin == 0`, `begin > end` or no strand fails the whole
/// assembly and no table is returned.
pub fn assemble(
    predictions: Vec<SequencePredictions>,
    source: &str,
    version: &str,
) -> Result<GeneCallTables, GeneCallError> {
    let mut tables = GeneCallTables::new();
    for (contig, genes) in predictions {
        for gene in &genes {
            let gene_call = to_gene_call(&contig, gene, source, version)?;
            tables.push(gene_call, strip_stop_symbols(&gene.protein));
        }
    }
    Ok(tables)
}

/// Removes every stop symbol from a protein translation.
#[must_use]
pub fn strip_stop_symbols(protein: &str) -> String {
    protein.replace(STOP_SYMBOL, "")
}

fn to_gene_call(
    contig: &str,
    gene: &PredictedGene,
    source: &str,
    version: &str,
) -> Result<GeneCall, GeneCallError> {
    if gene.begin == 0 || gene.begin > gene.end {
        return Err(GeneCallError::InvalidGeneCoordinates {
            contig: contig.to_string(),
            begin: gene.begin,
            end: gene.end,
        });
    }
    let direction = match gene.strand {
        Strand::Forward => 'f',
        Strand::Reverse => 'r',
        Strand::Unknown => return Err(GeneCallError::InvalidStrand(contig.to_string())),
    };

    Ok(GeneCall {
        contig: contig.to_string(),
        start: gene.begin - 1,
        stop: gene.end,
        direction,
        partial: gene.partial_begin || gene.partial_end,
        call_type: CallType::Coding,
        source: source.to_string(),
        version: version.to_string(),
    })
}
