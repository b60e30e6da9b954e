//! Per-split summary of overlapping genes
//!
//! Composes the overlap and consensus primitives into one record per split:
//! gene count, mean gene length, coding density, hypothetical-gene ratio,
//! taxonomy coverage, and the consensus taxonomy with its accuracy.

use crate::operations::consensus::consensus;
use crate::types::{GeneInterval, Split, SplitSummary};

/// Summarize the genes overlapping one split.
///
/// `genes` must be exactly the set of intervals overlapping `split` (the
/// profiler selects them via the overlap routine); each is counted once.
/// The computation is pure: identical inputs yield bit-identical summaries.
///
/// Ratios follow the upstream annotation pipeline:
/// - `avg_gene_length` averages *full* gene lengths, not the clipped spans;
/// - `ratio_coding` sums per-gene spans clipped to the split over the split
///   length, without deduplicating overlaps between genes;
/// - `ratio_hypothetical` divides function-less genes by all overlapping
///   genes (one function field is collected per gene, labeled or not);
/// - `ratio_with_taxonomy` divides taxonomy-labeled genes by all
///   overlapping genes.
///
/// A split with no overlapping genes gets zeros across the board and no
/// consensus taxonomy.
pub fn summarize_split(split: &Split, genes: &[&GeneInterval]) -> SplitSummary {
    let num_genes = genes.len();

    let mut summary = SplitSummary {
        split_name: split.name(),
        num_genes,
        avg_gene_length: 0.0,
        ratio_coding: 0.0,
        ratio_hypothetical: 0.0,
        ratio_with_taxonomy: 0.0,
        consensus_taxonomy: None,
        tax_accuracy: 0.0,
    };

    if num_genes == 0 {
        return summary;
    }

    let total_gene_length: usize = genes.iter().map(|gene| gene.length()).sum();
    summary.avg_gene_length = total_gene_length as f64 / num_genes as f64;

    // Only the portion of each gene inside the split counts as coding here
    let coding_nucleotides: usize = genes
        .iter()
        .map(|gene| gene.stop.min(split.end) - gene.start.max(split.start))
        .sum();
    summary.ratio_coding = coding_nucleotides as f64 / split.length() as f64;

    let hypothetical = genes.iter().filter(|gene| gene.function.is_none()).count();
    summary.ratio_hypothetical = hypothetical as f64 / num_genes as f64;

    let taxonomy_labels: Vec<Option<&str>> =
        genes.iter().map(|gene| gene.taxonomy.as_deref()).collect();
    let vote = consensus(&taxonomy_labels);
    summary.ratio_with_taxonomy = vote.labeled as f64 / num_genes as f64;
    summary.tax_accuracy = vote.accuracy();
    summary.consensus_taxonomy = vote.winner;

    summary
}
