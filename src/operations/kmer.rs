//! K-mer frequency profiling with a fixed column order
//!
//! Every contig and every split gets a dense k-mer frequency vector over the
//! complete k-mer space for a fixed order `k` (all 4^k strings over
//! {A, C, G, T}). The column order is derived once by sorting the k-mer
//! space lexicographically, so vectors of the same order are directly
//! comparable and storable positionally.
//!
//! # Algorithm
//!
//! A width-k window slides across the sequence with stride 1, producing
//! `len - k + 1` windows (zero if the sequence is shorter than k). Each
//! window is case-normalized; windows containing ambiguity codes or gaps
//! are skipped and counted toward no bin.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::error::{Result, SplitprofError};
use crate::types::KmerVector;

/// Smallest supported k-mer order
pub const MIN_K: usize = 2;
/// Largest supported k-mer order (4^8 = 65,536 columns)
pub const MAX_K: usize = 8;

const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// K-mer counter for a fixed order `k`.
///
/// Owns the sorted k-mer space and the column index it defines. Building a
/// counter is `O(4^k)`; counting a sequence is `O(len)` lookups against the
/// fixed columns.
///
/// # Examples
///
/// ```
/// use splitprof::operations::kmer::KmerCounter;
///
/// let counter = KmerCounter::new(4)?;
/// assert_eq!(counter.kmers().len(), 256);
///
/// let vector = counter.frequency(b"AAAA");
/// assert_eq!(vector.0[counter.column("AAAA").unwrap()], 1);
/// assert_eq!(vector.total(), 1);
/// # Ok::<(), splitprof::SplitprofError>(())
/// ```
#[derive(Debug)]
pub struct KmerCounter {
    k: usize,
    /// Lexicographically sorted k-mer space, fixed for the counter's lifetime
    kmers: Vec<String>,
    /// K-mer bytes to column index
    columns: HashMap<Vec<u8>, usize>,
}

impl KmerCounter {
    /// Create a counter for order `k`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitprofError::InvalidConfig`] unless `2 <= k <= 8`.
    /// Below 2 a k-mer carries no compositional signal; above 8 the 4^k
    /// feature space stops being tractable.
    pub fn new(k: usize) -> Result<Self> {
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(SplitprofError::invalid_config(format!(
                "k-mer size must be between {} and {}, got {}",
                MIN_K, MAX_K, k
            )));
        }

        let kmers = kmer_space(k);
        let columns = kmers
            .iter()
            .enumerate()
            .map(|(index, kmer)| (kmer.as_bytes().to_vec(), index))
            .collect();

        Ok(Self { k, kmers, columns })
    }

    /// The configured k-mer order
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// The full k-mer space in column order (lexicographic, 4^k entries)
    pub fn kmers(&self) -> &[String] {
        &self.kmers
    }

    /// Column index of a k-mer, if it belongs to the space
    pub fn column(&self, kmer: &str) -> Option<usize> {
        self.columns.get(kmer.as_bytes()).copied()
    }

    /// Count k-mer occurrences in `sequence` into a dense vector.
    ///
    /// Windows are uppercase-normalized before lookup; windows containing
    /// symbols outside {A, C, G, T} (ambiguity codes, gaps) are skipped.
    /// Sequences shorter than k yield the all-zero vector.
    pub fn frequency(&self, sequence: &[u8]) -> KmerVector {
        let mut counts = vec![0u32; self.kmers.len()];

        if sequence.len() >= self.k {
            let mut window = vec![0u8; self.k];
            for i in 0..=(sequence.len() - self.k) {
                for (dst, src) in window.iter_mut().zip(&sequence[i..i + self.k]) {
                    *dst = src.to_ascii_uppercase();
                }
                if let Some(&column) = self.columns.get(window.as_slice()) {
                    counts[column] += 1;
                }
            }
        }

        KmerVector(counts)
    }
}

/// Enumerate the complete k-mer space for order `k`, sorted
/// lexicographically.
///
/// Independent of any sequence: always 4^k members.
///
/// # Examples
///
/// ```
/// use splitprof::operations::kmer::kmer_space;
///
/// let space = kmer_space(2);
/// assert_eq!(space.len(), 16);
/// assert_eq!(space[0], "AA");
/// assert_eq!(space[15], "TT");
/// ```
pub fn kmer_space(k: usize) -> Vec<String> {
    let mut space = vec![String::new()];
    for _ in 0..k {
        space = space
            .iter()
            .flat_map(|prefix| {
                ALPHABET.iter().map(move |&base| {
                    let mut kmer = String::with_capacity(prefix.len() + 1);
                    kmer.push_str(prefix);
                    kmer.push(base as char);
                    kmer
                })
            })
            .collect();
    }
    // ALPHABET is sorted, so the product is already lexicographic;
    // the sort keeps the column-order contract independent of that detail.
    space.sort_unstable();
    space
}

/// LRU cache of contig-level k-mer vectors, keyed by contig id.
///
/// During profiling, every split of a contig stores the *contig's* vector
/// next to its own, to preserve the genomic context when splits are later
/// clustered by composition. The contig vector is therefore requested once
/// per split; this cache makes the sharing explicit instead of a hidden
/// side effect. It is purely a performance optimization: cached and freshly
/// computed vectors are identical, and both contig- and split-level vectors
/// stay independently reproducible from the sequence alone.
pub struct KmerCache {
    inner: Mutex<LruCache<String, KmerVector>>,
}

impl std::fmt::Debug for KmerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KmerCache").field("len", &self.len()).finish()
    }
}

impl KmerCache {
    /// Default number of cached contig vectors
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Create a cache holding up to `capacity` contig vectors (at least 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self { inner: Mutex::new(LruCache::new(capacity)) }
    }

    /// Fetch the vector for `contig_id`, computing it from `sequence` on a
    /// miss.
    pub fn get_or_compute(
        &self,
        contig_id: &str,
        sequence: &[u8],
        counter: &KmerCounter,
    ) -> KmerVector {
        let mut cache = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(vector) = cache.get(contig_id) {
            return vector.clone();
        }
        let vector = counter.frequency(sequence);
        cache.put(contig_id.to_string(), vector.clone());
        vector
    }

    /// Number of vectors currently cached
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KmerCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
