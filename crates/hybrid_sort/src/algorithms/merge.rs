use crate::Comparisons;

/// Merges the sorted runs `data[..mid]` and `data[mid..]` in place.
///
/// Only the two-pointer phase is counted; whichever run is left over is
/// copied back without comparisons. Ties take the left element, so the
/// merge is stable. Unsorted runs are not detected and yield an unsorted
/// interleaving.
pub fn merge(data: &mut [i64], mid: usize) -> Comparisons {
    assert!(
        mid <= data.len(),
        "merge split {mid} is past the end of a run of length {}",
        data.len()
    );

    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;
    let mut comparisons = 0;

    while i < left.len() && j < right.len() {
        comparisons += 1;
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        data[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        data[k..].copy_from_slice(&right[j..]);
    }

    comparisons
}
