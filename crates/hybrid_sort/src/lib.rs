mod algorithms;
pub mod range;

pub use range::{hybrid_sort, insertion_sort, merge, merge_sort};

/// Number of element-vs-element comparisons performed by a sort.
pub type Comparisons = u64;

/// Threshold used by the reference experiments when none is given.
pub const DEFAULT_THRESHOLD: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    InsertionSort,
    MergeSort,
    HybridSort { threshold: usize },
}

pub const ALL_STRATEGY_NAMES: [&str; 3] = ["insertion_sort", "merge_sort", "hybrid_sort"];

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::InsertionSort => ALL_STRATEGY_NAMES[0],
        Strategy::MergeSort => ALL_STRATEGY_NAMES[1],
        Strategy::HybridSort { .. } => ALL_STRATEGY_NAMES[2],
    }
}

pub fn insertion_sort_slice(data: &mut [i64]) -> Comparisons {
    algorithms::insertion_sort::sort(data)
}

/// Merges `data[..mid]` with `data[mid..]`; both must already be sorted.
pub fn merge_slice(data: &mut [i64], mid: usize) -> Comparisons {
    algorithms::merge::merge(data, mid)
}

pub fn merge_sort_slice(data: &mut [i64]) -> Comparisons {
    algorithms::merge_sort::sort(data)
}

pub fn hybrid_sort_slice(data: &mut [i64], threshold: usize) -> Comparisons {
    algorithms::hybrid_sort::sort(data, threshold)
}

pub fn sort_i64(strategy: Strategy, data: &mut [i64]) -> Comparisons {
    match strategy {
        Strategy::InsertionSort => insertion_sort_slice(data),
        Strategy::MergeSort => merge_sort_slice(data),
        Strategy::HybridSort { threshold } => hybrid_sort_slice(data, threshold),
    }
}

/// Sorts `data[left..=right]` with `strategy`, panicking on invalid bounds.
#[track_caller]
pub fn sort_range_i64(
    strategy: Strategy,
    data: &mut [i64],
    left: usize,
    right: usize,
) -> Comparisons {
    match strategy {
        Strategy::InsertionSort => insertion_sort(data, left, right),
        Strategy::MergeSort => merge_sort(data, left, right),
        Strategy::HybridSort { threshold } => hybrid_sort(data, left, right, threshold),
    }
}
