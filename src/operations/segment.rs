//! Contig segmentation into fixed-length splits
//!
//! A contig of length `L` is tiled into `floor(L / S)` splits of exactly the
//! target length `S`, in order from offset 0; a non-zero remainder is
//! appended as a final, shorter split. A contig shorter than `S` yields a
//! single split covering the whole contig rather than being dropped.
//!
//! Segmentation is a pure function of `(L, S)`: recomputing it for the same
//! inputs always returns the same tiling.

use crate::error::{Result, SplitprofError};

/// Partition a contig of `contig_length` into split boundaries.
///
/// Returns ordered, contiguous, non-overlapping `(start, end)` pairs whose
/// union is exactly `[0, contig_length)`. An empty contig yields the empty
/// tiling.
///
/// # Errors
///
/// Returns [`SplitprofError::InvalidConfig`] if `split_length < 1`.
///
/// # Examples
///
/// ```
/// use splitprof::operations::segment;
///
/// let splits = segment(1000, 300)?;
/// assert_eq!(splits, vec![(0, 300), (300, 600), (600, 900), (900, 1000)]);
///
/// // A contig shorter than the split length is kept whole
/// let splits = segment(120, 300)?;
/// assert_eq!(splits, vec![(0, 120)]);
/// # Ok::<(), splitprof::SplitprofError>(())
/// ```
pub fn segment(contig_length: usize, split_length: usize) -> Result<Vec<(usize, usize)>> {
    if split_length < 1 {
        return Err(SplitprofError::invalid_config("split length must be >= 1"));
    }

    let num_full = contig_length / split_length;
    let remainder = contig_length % split_length;

    let mut splits = Vec::with_capacity(num_full + usize::from(remainder > 0));
    for i in 0..num_full {
        splits.push((i * split_length, (i + 1) * split_length));
    }
    if remainder > 0 {
        splits.push((num_full * split_length, contig_length));
    }

    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_with_remainder() {
        let splits = segment(1000, 300).unwrap();
        assert_eq!(splits, vec![(0, 300), (300, 600), (600, 900), (900, 1000)]);
    }

    #[test]
    fn test_segment_exact_multiple() {
        let splits = segment(900, 300).unwrap();
        assert_eq!(splits, vec![(0, 300), (300, 600), (600, 900)]);
    }

    #[test]
    fn test_segment_short_contig_kept_whole() {
        let splits = segment(120, 300).unwrap();
        assert_eq!(splits, vec![(0, 120)]);
    }

    #[test]
    fn test_segment_length_equal_to_split() {
        let splits = segment(300, 300).unwrap();
        assert_eq!(splits, vec![(0, 300)]);
    }

    #[test]
    fn test_segment_empty_contig() {
        let splits = segment(0, 300).unwrap();
        assert!(splits.is_empty());
    }

    #[test]
    fn test_segment_split_length_one() {
        let splits = segment(3, 1).unwrap();
        assert_eq!(splits, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_segment_invalid_split_length() {
        let result = segment(1000, 0);
        assert!(matches!(
            result,
            Err(SplitprofError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_segment_is_deterministic() {
        assert_eq!(segment(12_345, 777).unwrap(), segment(12_345, 777).unwrap());
    }
}
