use anyhow::Result;

use super::Sorter;

/// Copies the input without sorting it. Measures the allocation and copy
/// floor of the harness itself.
pub struct NopSort;

impl Sorter for NopSort {
    fn sort(&self, data: &[i64], _threads: usize) -> Result<Vec<i64>> {
        Ok(data.to_vec())
    }

    fn supports_check(&self) -> bool {
        false
    }
}
