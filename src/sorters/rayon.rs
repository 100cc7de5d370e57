use anyhow::Result;
use rayon::prelude::*;

use super::Sorter;

/// Parallel sort on a rayon work-stealing pool sized to the requested thread
/// count. Reference point for the hand-rolled worker pool.
pub struct RayonSort;

impl Sorter for RayonSort {
    fn sort(&self, data: &[i64], threads: usize) -> Result<Vec<i64>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;

        let mut out = data.to_vec();
        pool.install(|| out.par_sort_unstable());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rayon_sort() {
        let data = vec![4, 2, 7, 1, 5, 3, 6];
        let sorted = RayonSort.sort(&data, 3).unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_rayon_sort_empty() {
        let data: Vec<i64> = vec![];
        let sorted = RayonSort.sort(&data, 2).unwrap();
        assert_eq!(sorted, vec![]);
    }
}
