use crate::Comparisons;

/// Sorts `data` ascending and returns the number of element comparisons.
///
/// Every executed `data[j] > key` test is counted: one per shift, plus the
/// failing test that stops the scan on a valid index. Running off the left
/// edge costs nothing, so sorted input costs exactly `len - 1`.
pub fn sort(data: &mut [i64]) -> Comparisons {
    let mut comparisons = 0;

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            comparisons += 1;
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }

    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_ranges_cost_nothing() {
        let mut empty: [i64; 0] = [];
        assert_eq!(sort(&mut empty), 0);

        let mut single = [7];
        assert_eq!(sort(&mut single), 0);
        assert_eq!(single, [7]);
    }

    #[test]
    fn reference_trace() {
        // 5>3 shift; 5>8 stop; 8>1, 5>1, 3>1 shift then run off the edge.
        let mut data = [5, 3, 8, 1];
        assert_eq!(sort(&mut data), 5);
        assert_eq!(data, [1, 3, 5, 8]);
    }

    #[test]
    fn sorted_input_is_minimum() {
        let mut data: Vec<i64> = (0..64).collect();
        let expected = data.clone();
        assert_eq!(sort(&mut data), 63);
        assert_eq!(data, expected);
    }

    #[test]
    fn reversed_input_is_quadratic() {
        let m = 50_u64;
        let mut data: Vec<i64> = (0..m as i64).rev().collect();
        assert_eq!(sort(&mut data), m * (m - 1) / 2);
        assert!(data.is_sorted());
    }

    #[test]
    fn equal_keys_stop_the_scan() {
        let mut data = [4, 4, 4, 4];
        assert_eq!(sort(&mut data), 3);
    }

    #[test]
    fn negative_values() {
        let mut data = [0, -3, i64::MAX, i64::MIN, -3];
        sort(&mut data);
        assert_eq!(data, [i64::MIN, -3, -3, 0, i64::MAX]);
    }
}
