//! Error types for splitprof

use thiserror::Error;

/// Result type alias for splitprof operations
pub type Result<T> = std::result::Result<T, SplitprofError>;

/// Error types that can occur in splitprof
///
/// Only [`SplitprofError::InvalidConfig`] is fatal for a run: it is raised
/// when a profiler is constructed, before any contig is touched. The
/// remaining variants describe individual bad input items; batch entry
/// points collect them alongside partial results instead of aborting
/// unrelated work.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SplitprofError {
    /// Invalid configuration (split length, k-mer size)
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },

    /// Gene or hit interval with `stop <= start`
    #[error("Invalid interval '{id}': start={start}, stop={stop} (stop must be > start)")]
    InvalidInterval {
        /// Identifier of the offending interval
        id: String,
        /// Start position (0-based, inclusive)
        start: usize,
        /// Stop position (0-based, exclusive)
        stop: usize,
    },

    /// Interval referencing a contig id absent from the input set
    #[error("Interval '{id}' references unknown contig '{contig}'")]
    UnknownContigReference {
        /// Identifier of the offending interval
        id: String,
        /// The contig id that could not be resolved
        contig: String,
    },

    /// A contig id that appeared more than once in the input set
    #[error("Duplicate contig id '{contig}'")]
    DuplicateContig {
        /// The repeated contig id
        contig: String,
    },
}

impl SplitprofError {
    /// Convenience constructor for configuration errors
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        SplitprofError::InvalidConfig { reason: reason.into() }
    }
}
