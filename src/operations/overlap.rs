//! Interval-to-split coordinate mapping
//!
//! One overlap routine serves both call sites: gene-to-split mapping and
//! HMM-hit-to-split mapping. The overlap test is strict and half-open
//! (`interval.stop > split.start && interval.start < split.end`), so an
//! interval exactly abutting a split boundary does not overlap it.

/// An interval clipped into one split's local coordinate frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Interval start clipped to the split, split-local (0-based)
    pub start_in_split: usize,
    /// Interval stop clipped to the split, split-local (exclusive)
    pub stop_in_split: usize,
    /// Fraction of the interval's *total* length inside the split, in
    /// (0, 100]; exactly 100.0 for a fully contained interval
    pub percentage: f64,
}

/// Relate a half-open interval to a half-open split.
///
/// Returns `None` when there is no overlap. The caller must have validated
/// `interval_stop > interval_start` (the profiler rejects such intervals as
/// [`crate::SplitprofError::InvalidInterval`] before they reach this
/// function), so the percentage denominator is never zero.
///
/// The percentage denominator is the interval's total length even when the
/// interval straddles several splits; per-split percentages of one interval
/// are an intentional per-split measure and do not sum to 100.
///
/// # Examples
///
/// ```
/// use splitprof::operations::overlap;
///
/// // Gene (250, 950) against split (300, 600): 300 of 700 bases inside
/// let hit = overlap(300, 600, 250, 950).unwrap();
/// assert_eq!(hit.start_in_split, 0);
/// assert_eq!(hit.stop_in_split, 300);
/// assert!((hit.percentage - 300.0 * 100.0 / 700.0).abs() < 1e-9);
///
/// // Abutting interval does not overlap
/// assert!(overlap(300, 600, 600, 900).is_none());
/// ```
pub fn overlap(
    split_start: usize,
    split_end: usize,
    interval_start: usize,
    interval_stop: usize,
) -> Option<Overlap> {
    debug_assert!(interval_stop > interval_start);
    debug_assert!(split_end > split_start);

    if !(interval_stop > split_start && interval_start < split_end) {
        return None;
    }

    let start_in_split = interval_start.max(split_start) - split_start;
    let stop_in_split = interval_stop.min(split_end) - split_start;
    let interval_length = interval_stop - interval_start;
    let percentage = (stop_in_split - start_in_split) as f64 * 100.0 / interval_length as f64;

    Some(Overlap { start_in_split, stop_in_split, percentage })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_overlap_percentage_in_half_open_unit_range(
            split_start in 0usize..10_000,
            split_len in 1usize..5_000,
            interval_start in 0usize..10_000,
            interval_len in 1usize..5_000,
        ) {
            let split_end = split_start + split_len;
            let interval_stop = interval_start + interval_len;

            match overlap(split_start, split_end, interval_start, interval_stop) {
                Some(hit) => {
                    prop_assert!(hit.percentage > 0.0);
                    prop_assert!(hit.percentage <= 100.0);
                    prop_assert!(hit.start_in_split < hit.stop_in_split);
                    prop_assert!(hit.stop_in_split <= split_end - split_start);

                    // Fully contained intervals score exactly 100
                    if interval_start >= split_start && interval_stop <= split_end {
                        prop_assert_eq!(hit.percentage, 100.0);
                    }
                }
                None => {
                    // No overlap means the strict half-open test failed
                    prop_assert!(interval_stop <= split_start || interval_start >= split_end);
                }
            }
        }
    }
}
