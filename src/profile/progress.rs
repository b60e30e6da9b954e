//! Injected progress reporting
//!
//! Batch entry points accept an observer by reference instead of writing to
//! a process-wide logger; callers wire it to their own terminal/log layer
//! or pass [`NullProgress`]. Observers must be `Sync` because contigs may
//! be processed on worker threads.

/// Receives progress events during batch profiling.
///
/// All methods have empty default bodies, so implementors override only
/// what they care about. Events for different contigs may arrive from
/// different threads, in any order.
pub trait ProgressObserver: Sync {
    /// A key/value fact about the run (input sizes, configuration)
    fn info(&self, _key: &str, _value: &str) {}

    /// Processing of one contig is starting
    fn on_contig_start(&self, _contig_id: &str) {}

    /// Processing of one contig finished with `num_splits` splits
    fn on_contig_done(&self, _contig_id: &str, _num_splits: usize) {}

    /// A bad input item was skipped; the error is also collected in the
    /// batch result, this event only exists for live reporting
    fn on_item_skipped(&self, _error: &crate::SplitprofError) {}
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressObserver for NullProgress {}
