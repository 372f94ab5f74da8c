use crate::Comparisons;

use super::{insertion_sort, merge, split_point};

/// Merge sort that hands runs of at most `threshold` elements to insertion
/// sort. A threshold of zero behaves like one.
pub fn sort(data: &mut [i64], threshold: usize) -> Comparisons {
    sort_recursive(data, threshold.max(1))
}

fn sort_recursive(data: &mut [i64], threshold: usize) -> Comparisons {
    let len = data.len();
    if len <= threshold {
        return insertion_sort::sort(data);
    }

    let mid = split_point(len);
    let (left, right) = data.split_at_mut(mid);
    let mut comparisons = sort_recursive(left, threshold);
    comparisons += sort_recursive(right, threshold);
    comparisons + merge::merge(data, mid)
}
