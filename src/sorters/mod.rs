pub use self::{merge::PoolMergeSort, nop::NopSort, rayon::RayonSort, stdsort::StdSort};

mod merge;
mod nop;
mod rayon;
mod stdsort;

use anyhow::Result;

/// A sorting implementation that can be driven by the benchmark runner.
///
/// `threads` is the number of worker threads the implementation may use.
/// Single-threaded implementations are free to ignore it.
pub trait Sorter: Send + Sync {
    /// Return a sorted copy of `data`.
    fn sort(&self, data: &[i64], threads: usize) -> Result<Vec<i64>>;

    /// Whether the output is expected to be in sorted order. The runner only
    /// order-checks sorters that report `true`.
    fn supports_check(&self) -> bool {
        true
    }
}
