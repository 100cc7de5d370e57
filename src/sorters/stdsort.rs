use anyhow::Result;

use super::Sorter;

/// Single-threaded `sort_unstable` baseline. Ignores the thread count.
pub struct StdSort;

impl Sorter for StdSort {
    fn sort(&self, data: &[i64], _threads: usize) -> Result<Vec<i64>> {
        let mut out = data.to_vec();
        out.sort_unstable();
        Ok(out)
    }
}
