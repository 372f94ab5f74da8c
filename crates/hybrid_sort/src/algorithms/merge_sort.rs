use crate::Comparisons;

use super::{merge, split_point};

pub fn sort(data: &mut [i64]) -> Comparisons {
    let len = data.len();
    if len < 2 {
        return 0;
    }

    let mid = split_point(len);
    let (left, right) = data.split_at_mut(mid);
    let mut comparisons = sort(left);
    comparisons += sort(right);
    comparisons + merge::merge(data, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cases() {
        let mut empty: [i64; 0] = [];
        assert_eq!(sort(&mut empty), 0);

        let mut single = [9];
        assert_eq!(sort(&mut single), 0);

        let mut pair = [2, 1];
        assert_eq!(sort(&mut pair), 1);
        assert_eq!(pair, [1, 2]);
    }

    #[test]
    fn odd_split_puts_extra_element_left() {
        // [3, 1 | 2]: sorting [3, 1] costs 1, merging [1, 3] with [2] costs 2.
        let mut data = [3, 1, 2];
        assert_eq!(sort(&mut data), 3);
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn sorted_power_of_two() {
        // Each merge of two sorted halves of size h costs h: n/2 per level.
        let mut data: Vec<i64> = (0..16).collect();
        assert_eq!(sort(&mut data), 4 * 8);
        assert!(data.is_sorted());
    }

    #[test]
    fn reversed_power_of_two() {
        // Right half always wins, so each merge also costs h.
        let mut data: Vec<i64> = (0..16).rev().collect();
        assert_eq!(sort(&mut data), 4 * 8);
        assert_eq!(data, (0..16).collect::<Vec<i64>>());
    }
}
