//! Common types used throughout splitprof
//!
//! # Coordinate System
//!
//! All intervals use **0-based, half-open** coordinates `[start, stop)`:
//! start inclusive, stop exclusive, length = stop - start. This matches the
//! BED convention and the rest of the bioinformatics ecosystem.

use std::fmt;

/// An assembled contig: identifier plus raw nucleotide sequence.
///
/// Immutable once constructed; every derived structure (splits, k-mer
/// vectors, summaries) is fully recomputable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    /// Unique contig identifier
    pub id: String,
    /// Nucleotide sequence (A/C/G/T plus tolerated ambiguity symbols)
    pub sequence: Vec<u8>,
}

impl Contig {
    /// Create a new contig
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self { id: id.into(), sequence }
    }

    /// Length of the contig in nucleotides
    #[inline]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }
}

/// A gene call on a contig, with optional categorical annotations.
///
/// Plain record: `stop > start` is *not* enforced by construction. The
/// profiler validates each interval and reports offenders as
/// [`crate::SplitprofError::InvalidInterval`] instead of panicking or
/// silently dropping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneInterval {
    /// Gene identifier (unique within the input set)
    pub id: String,
    /// Parent contig id
    pub contig: String,
    /// Start position (0-based, inclusive)
    pub start: usize,
    /// Stop position (0-based, exclusive); must be > start to be valid
    pub stop: usize,
    /// Taxonomic call for this gene, if any
    pub taxonomy: Option<String>,
    /// Functional annotation; `None` marks a hypothetical gene
    pub function: Option<String>,
}

impl GeneInterval {
    /// Create a new gene interval
    pub fn new(id: impl Into<String>, contig: impl Into<String>, start: usize, stop: usize) -> Self {
        Self {
            id: id.into(),
            contig: contig.into(),
            start,
            stop,
            taxonomy: None,
            function: None,
        }
    }

    /// Attach a taxonomy label
    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomy = Some(taxonomy.into());
        self
    }

    /// Attach a functional annotation
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Gene length in nucleotides (meaningless unless the interval is valid)
    #[inline]
    pub fn length(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    /// Whether the interval satisfies `stop > start`
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.stop > self.start
    }
}

/// A single HMM search hit on a contig.
///
/// Hits use the same half-open start/stop semantics as gene intervals and
/// are mapped onto splits through the same overlap routine.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmHit {
    /// Search source (e.g. the HMM collection name)
    pub source: String,
    /// Name of the matched gene/model
    pub gene_name: String,
    /// Parent contig id
    pub contig: String,
    /// Start position (0-based, inclusive)
    pub start: usize,
    /// Stop position (0-based, exclusive)
    pub stop: usize,
    /// E-value reported by the search tool
    pub e_value: f64,
}

/// A fixed-length window of a contig, the atomic unit of downstream binning.
///
/// Splits of a contig are contiguous, ordered, non-overlapping, and tile
/// `[0, contig_length)` exactly. They carry no identity beyond
/// `(contig, index)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Split {
    /// Parent contig id
    pub contig: String,
    /// 0-based, contig-local split index
    pub index: usize,
    /// Start offset within the contig (inclusive)
    pub start: usize,
    /// End offset within the contig (exclusive)
    pub end: usize,
}

impl Split {
    /// Derived split name, stable across runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use splitprof::Split;
    ///
    /// let split = Split { contig: "c1".to_string(), index: 3, start: 900, end: 1200 };
    /// assert_eq!(split.name(), "c1_split_00003");
    /// ```
    pub fn name(&self) -> String {
        gen_split_name(&self.contig, self.index)
    }

    /// Split length in nucleotides
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.name(), self.start, self.end)
    }
}

/// Derive a split name from a contig id and a split index
pub fn gen_split_name(contig_id: &str, index: usize) -> String {
    format!("{}_split_{:05}", contig_id, index)
}

/// A dense k-mer frequency vector.
///
/// Counts are positionally aligned with the lexicographically sorted k-mer
/// space of the [`crate::operations::kmer::KmerCounter`] that produced the
/// vector, so vectors of the same order are directly comparable column by
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerVector(pub Vec<u32>);

impl KmerVector {
    /// Total number of counted windows
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of columns (4^k)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no columns
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How a gene overlaps one split, in the split's local coordinate frame.
///
/// `percentage_in_split` uses the gene's *total* length as denominator, so
/// a gene straddling several splits contributes a percentage to each; the
/// contributions are a per-split measure and do not sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitGeneOverlap {
    /// Name of the split
    pub split_name: String,
    /// Identifier of the overlapping gene
    pub gene_id: String,
    /// Gene start clipped to the split, split-local
    pub start_in_split: usize,
    /// Gene stop clipped to the split, split-local
    pub stop_in_split: usize,
    /// Fraction of the gene inside this split, in (0, 100]
    pub percentage_in_split: f64,
}

/// One HMM hit mapped into one split
#[derive(Debug, Clone, PartialEq)]
pub struct HitInSplit {
    /// Stable identifier derived from (contig, gene name, start, stop)
    pub unique_id: String,
    /// Search source of the hit
    pub source: String,
    /// Name of the matched gene/model
    pub gene_name: String,
    /// Name of the split the hit falls into
    pub split_name: String,
    /// Fraction of the hit inside this split, in (0, 100]
    pub percentage_in_split: f64,
    /// E-value of the originating hit
    pub e_value: f64,
}

/// Per-split summary of the genes overlapping it
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSummary {
    /// Name of the summarized split
    pub split_name: String,
    /// Number of genes overlapping the split
    pub num_genes: usize,
    /// Mean full gene length over overlapping genes; 0.0 if none
    pub avg_gene_length: f64,
    /// Coding nucleotides (clipped to the split) over split length
    pub ratio_coding: f64,
    /// Genes without functional annotation over all overlapping genes
    pub ratio_hypothetical: f64,
    /// Genes with a taxonomy label over all overlapping genes
    pub ratio_with_taxonomy: f64,
    /// Plurality taxonomy among labeled genes, if any are labeled
    pub consensus_taxonomy: Option<String>,
    /// Fraction of labeled genes agreeing with the consensus; 0.0 if none
    pub tax_accuracy: f64,
}
