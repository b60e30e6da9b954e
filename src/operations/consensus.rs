//! Plurality consensus over categorical labels
//!
//! Reduces a multiset of optional labels (taxonomy calls of the genes in a
//! split, or any other categorical annotation) to the plurality label. Ties
//! are broken deterministically: among labels with the winning count, the
//! lexicographically smallest wins. Incidental ordering (hash-map iteration,
//! insertion order) never influences the result.

use std::collections::HashMap;

/// Outcome of a plurality vote over optional labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consensus {
    /// Winning label; `None` when no input item carried a label
    pub winner: Option<String>,
    /// Number of input items, labeled or not
    pub total: usize,
    /// Number of items with a label
    pub labeled: usize,
    /// Occurrence count of the winner among labeled items; 0 when unlabeled
    pub support: usize,
}

impl Consensus {
    /// Fraction of labeled items agreeing with the winner; 0.0 when no item
    /// is labeled. A single distinct label yields 1.0 by construction.
    pub fn accuracy(&self) -> f64 {
        if self.labeled == 0 {
            0.0
        } else {
            self.support as f64 / self.labeled as f64
        }
    }
}

/// Compute the plurality consensus of `labels`.
///
/// # Examples
///
/// ```
/// use splitprof::operations::consensus;
///
/// let labels = [Some("A"), Some("A"), Some("B"), Some("B"), None];
/// let result = consensus(&labels);
///
/// // Equal counts: the lexicographically smaller label wins
/// assert_eq!(result.winner.as_deref(), Some("A"));
/// assert_eq!(result.total, 5);
/// assert_eq!(result.labeled, 4);
/// assert_eq!(result.support, 2);
/// assert_eq!(result.accuracy(), 0.5);
/// ```
pub fn consensus(labels: &[Option<&str>]) -> Consensus {
    let total = labels.len();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut labeled = 0;
    for &label in labels.iter().flatten() {
        *counts.entry(label).or_insert(0) += 1;
        labeled += 1;
    }

    if counts.is_empty() {
        return Consensus { winner: None, total, labeled: 0, support: 0 };
    }

    // Highest count wins; on equal counts the lexicographically smallest
    // label wins. max_by prefers later elements on Ordering::Equal, so the
    // comparison treats the smaller label as the larger key.
    let (winner, support) = counts
        .into_iter()
        .max_by(|&(label_a, count_a), &(label_b, count_b)| {
            count_a.cmp(&count_b).then_with(|| label_b.cmp(label_a))
        })
        .map(|(label, count)| (label.to_string(), count))
        .expect("counts is non-empty");

    Consensus { winner: Some(winner), total, labeled, support }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn label_set() -> impl Strategy<Value = Vec<Option<String>>> {
        proptest::collection::vec(
            proptest::option::of(proptest::sample::select(vec![
                "alpha".to_string(),
                "beta".to_string(),
                "gamma".to_string(),
                "delta".to_string(),
            ])),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn test_consensus_is_order_independent(labels in label_set(), seed in any::<u64>()) {
            let refs: Vec<Option<&str>> = labels.iter().map(Option::as_deref).collect();
            let baseline = consensus(&refs);

            // Deterministic pseudo-shuffle driven by the seed
            let mut shuffled = refs.clone();
            let mut state = seed | 1;
            for i in (1..shuffled.len()).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let j = (state >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }

            prop_assert_eq!(consensus(&shuffled), baseline);
        }

        #[test]
        fn test_consensus_support_bounds(labels in label_set()) {
            let refs: Vec<Option<&str>> = labels.iter().map(Option::as_deref).collect();
            let result = consensus(&refs);

            prop_assert_eq!(result.total, refs.len());
            prop_assert!(result.labeled <= result.total);
            prop_assert!(result.support <= result.labeled);
            if result.labeled > 0 {
                prop_assert!(result.winner.is_some());
                prop_assert!(result.support >= 1);
                prop_assert!(result.accuracy() > 0.0 && result.accuracy() <= 1.0);
            }
        }
    }
}
