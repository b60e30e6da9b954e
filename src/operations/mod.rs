//! Core coordinate and profiling algorithms
//!
//! The four algorithmic leaves of the crate:
//!
//! - `segment`: tile a contig into fixed-length splits
//! - `kmer`: fixed-order k-mer frequency vectors and the contig-level cache
//! - `overlap`: half-open interval-to-split mapping
//! - `consensus`: plurality vote with a deterministic tie-break
//!
//! All of them are pure functions of their inputs; composition into
//! per-split records lives in [`crate::profile`].

pub mod consensus;
pub mod kmer;
pub mod overlap;
pub mod segment;

pub use consensus::{consensus, Consensus};
pub use kmer::{kmer_space, KmerCache, KmerCounter};
pub use overlap::{overlap, Overlap};
pub use segment::segment;
