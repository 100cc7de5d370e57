use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::Result;

use super::Sorter;
use crate::pool::ThreadPool;

/// Chunked merge sort backed by the worker pool.
///
/// The input is split into one chunk per thread, each chunk is sorted as a
/// pool job, and the sorted chunks are combined with a k-way heap merge.
pub struct PoolMergeSort;

impl Sorter for PoolMergeSort {
    fn sort(&self, data: &[i64], threads: usize) -> Result<Vec<i64>> {
        let mut pool = ThreadPool::<Vec<i64>>::new(threads)?;
        let chunk_size = data.len() / threads;

        for i in 0..threads {
            let start = i * chunk_size;
            // The last chunk picks up the division remainder.
            let end = if i == threads - 1 {
                data.len()
            } else {
                start + chunk_size
            };

            let chunk = data[start..end].to_vec();
            pool.execute(move || merge_sort(&chunk))?;
        }

        pool.close();
        let chunks = pool.results();

        Ok(merge_sorted(&chunks))
    }
}

/// Top-down merge sort returning a sorted copy.
fn merge_sort(data: &[i64]) -> Vec<i64> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);

    let mut merged = Vec::with_capacity(data.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Merge already sorted chunks into one sorted vector.
///
/// Keeps a min-heap of `(value, chunk_index, elem_index)` cursors, one per
/// non-empty chunk, and repeatedly pops the smallest head.
fn merge_sorted(chunks: &[Vec<i64>]) -> Vec<i64> {
    let total = chunks.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    let mut heap = BinaryHeap::new();

    for (chunk_index, chunk) in chunks.iter().enumerate() {
        if !chunk.is_empty() {
            heap.push(Reverse((chunk[0], chunk_index, 0)));
        }
    }

    while let Some(Reverse((value, chunk_index, elem_index))) = heap.pop() {
        result.push(value);

        if let Some(&next_value) = chunks[chunk_index].get(elem_index + 1) {
            heap.push(Reverse((next_value, chunk_index, elem_index + 1)));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_single_chunk() {
        let data = vec![3, 1, 2, 5, 4];
        assert_eq!(merge_sort(&data), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_sort_empty() {
        let data: Vec<i64> = vec![];
        assert_eq!(merge_sort(&data), vec![]);
    }

    #[test]
    fn test_merge_multiple_sorted_chunks() {
        let chunks = vec![vec![1, 3, 5], vec![2, 4, 6], vec![0, 7, 8]];
        assert_eq!(merge_sorted(&chunks), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_merge_empty_chunks() {
        let chunks: Vec<Vec<i64>> = vec![];
        assert_eq!(merge_sorted(&chunks), vec![]);
    }

    #[test]
    fn test_pool_sort_small_data() {
        let data = vec![4, 2, 7, 1, 5, 3, 6];
        let sorted = PoolMergeSort.sort(&data, 3).unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_pool_sort_matches_std_sort() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(7);
        let data = crate::data::random_vec(1000, &mut rng);
        let mut expected = data.clone();
        expected.sort();

        let sorted = PoolMergeSort.sort(&data, 10).unwrap();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_pool_sort_single_thread() {
        let data = vec![9, 3, 7, 1, 8];
        let sorted = PoolMergeSort.sort(&data, 1).unwrap();
        assert_eq!(sorted, vec![1, 3, 7, 8, 9]);
    }

    #[test]
    fn test_pool_sort_empty_data() {
        let data: Vec<i64> = vec![];
        let sorted = PoolMergeSort.sort(&data, 4).unwrap();
        assert_eq!(sorted, vec![]);
    }

    #[test]
    fn test_pool_sort_single_element() {
        let data = vec![42];
        let sorted = PoolMergeSort.sort(&data, 4).unwrap();
        assert_eq!(sorted, vec![42]);
    }

    #[test]
    fn test_pool_sort_all_equal_elements() {
        let data = vec![5; 20];
        let sorted = PoolMergeSort.sort(&data, 4).unwrap();
        assert_eq!(sorted, vec![5; 20]);
    }

    #[test]
    fn test_pool_sort_more_threads_than_elements() {
        let data = vec![2, 1, 3];
        let sorted = PoolMergeSort.sort(&data, 8).unwrap();
        assert_eq!(sorted, vec![1, 2, 3]);
    }
}
