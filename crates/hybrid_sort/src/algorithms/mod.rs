pub(crate) mod hybrid_sort;
pub(crate) mod insertion_sort;
pub(crate) mod merge;
pub(crate) mod merge_sort;

/// Length of the left half when splitting a run of `len` elements.
///
/// Matches `mid = (left + right) / 2` on inclusive bounds: the left half
/// takes the extra element of an odd-length run.
#[inline]
pub(crate) fn split_point(len: usize) -> usize {
    len - (len >> 1)
}
