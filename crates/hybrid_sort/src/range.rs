//! Entry points addressed by inclusive `(left, right)` bounds.
//!
//! A range with `left == right + 1` is empty. Bounds outside the sequence
//! panic before any element is touched.

use std::ops::Range;

use crate::Comparisons;
use crate::algorithms;

#[track_caller]
fn checked_span(len: usize, left: usize, right: usize) -> Range<usize> {
    let end = right.checked_add(1).filter(|&end| end <= len);
    match end {
        Some(end) if left <= end => left..end,
        _ => panic!("range [{left}, {right}] is invalid for a sequence of length {len}"),
    }
}

/// Insertion-sorts `data[left..=right]`.
#[track_caller]
pub fn insertion_sort(data: &mut [i64], left: usize, right: usize) -> Comparisons {
    let span = checked_span(data.len(), left, right);
    algorithms::insertion_sort::sort(&mut data[span])
}

/// Merges the sorted runs `data[left..=mid]` and `data[mid + 1..=right]`.
#[track_caller]
pub fn merge(data: &mut [i64], left: usize, mid: usize, right: usize) -> Comparisons {
    let span = checked_span(data.len(), left, right);
    assert!(
        left <= mid && mid < right,
        "merge split {mid} is not inside [{left}, {right})"
    );
    algorithms::merge::merge(&mut data[span], mid - left + 1)
}

/// Merge-sorts `data[left..=right]` down to single elements.
#[track_caller]
pub fn merge_sort(data: &mut [i64], left: usize, right: usize) -> Comparisons {
    let span = checked_span(data.len(), left, right);
    algorithms::merge_sort::sort(&mut data[span])
}

/// Merge-sorts `data[left..=right]`, insertion-sorting runs of at most
/// `threshold` elements.
#[track_caller]
pub fn hybrid_sort(
    data: &mut [i64],
    left: usize,
    right: usize,
    threshold: usize,
) -> Comparisons {
    let span = checked_span(data.len(), left, right);
    algorithms::hybrid_sort::sort(&mut data[span], threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_only_the_addressed_range() {
        let mut data = [9, 5, 3, 8, 1, 0];
        assert_eq!(insertion_sort(&mut data, 1, 4), 5);
        assert_eq!(data, [9, 1, 3, 5, 8, 0]);

        let mut data = [9, 5, 3, 8, 1, 0];
        merge_sort(&mut data, 1, 4);
        assert_eq!(data, [9, 1, 3, 5, 8, 0]);

        let mut data = [9, 5, 3, 8, 1, 0];
        assert_eq!(hybrid_sort(&mut data, 1, 4, 4), 5);
        assert_eq!(data, [9, 1, 3, 5, 8, 0]);
    }

    #[test]
    fn merge_with_offset() {
        let mut data = [100, 1, 3, 5, 2, 4, 6, -100];
        assert_eq!(merge(&mut data, 1, 3, 6), 5);
        assert_eq!(data, [100, 1, 2, 3, 4, 5, 6, -100]);
    }

    #[test]
    fn empty_and_single_ranges() {
        let mut data = [3, 2, 1];
        assert_eq!(insertion_sort(&mut data, 1, 0), 0);
        assert_eq!(merge_sort(&mut data, 2, 1), 0);
        assert_eq!(merge_sort(&mut data, 3, 2), 0);
        assert_eq!(hybrid_sort(&mut data, 1, 1, 1), 0);
        assert_eq!(data, [3, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "invalid for a sequence of length 3")]
    fn right_past_end_panics() {
        let mut data = [3, 2, 1];
        insertion_sort(&mut data, 0, 3);
    }

    #[test]
    #[should_panic(expected = "invalid for a sequence of length 3")]
    fn inverted_range_panics() {
        let mut data = [3, 2, 1];
        hybrid_sort(&mut data, 2, 0, 4);
    }

    #[test]
    #[should_panic(expected = "is not inside")]
    fn merge_split_at_right_panics() {
        let mut data = [1, 2, 3];
        merge(&mut data, 0, 2, 2);
    }

    #[test]
    #[should_panic(expected = "invalid for a sequence of length 0")]
    fn merge_sort_on_empty_sequence_panics_past_end() {
        let mut data: [i64; 0] = [];
        merge_sort(&mut data, 0, 5);
    }
}
