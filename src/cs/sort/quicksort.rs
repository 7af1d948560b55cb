use crate::cs::sort::partition::partition_at;
use crate::cs::sort::pivot::RandomPivot;

/// Sorts `arr` in place with random-pivot quicksort.
///
/// Expected `O(n log n)` comparisons; the quadratic worst case has vanishing
/// probability. Equal elements are not kept in their original order.
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::sort;
///
/// let mut arr = [5, 6, 1, 4, 7, 2, 3];
/// sort(&mut arr);
/// assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn sort<T: Ord>(arr: &mut [T]) {
    sort_with(arr, &mut RandomPivot::new());
}

/// Sorts `arr` in place using the given pivot generator, for reproducible runs.
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::{sort_with, RandomPivot};
///
/// let mut arr = vec![3, 1, 2];
/// sort_with(&mut arr, &mut RandomPivot::with_seed(41));
/// assert_eq!(arr, vec![1, 2, 3]);
/// ```
pub fn sort_with<T: Ord>(arr: &mut [T], pivot: &mut RandomPivot) {
    quicksort(arr, pivot);
}

fn quicksort<T: Ord>(mut arr: &mut [T], pivot: &mut RandomPivot) {
    // Recurse into the smaller side and loop on the larger one, keeping the
    // stack depth logarithmic even on adversarial pivot sequences.
    while arr.len() > 1 {
        let pivot_idx = pivot.pick(arr.len());
        let p = partition_at(arr, pivot_idx);

        let current = arr;
        let (left, rest) = current.split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() <= right.len() {
            quicksort(left, pivot);
            arr = right;
        } else {
            quicksort(right, pivot);
            arr = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sort_scenario() {
        let mut arr = [5, 6, 1, 4, 7, 2, 3];
        sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sort_matches_std_sort() {
        let mut rng = ChaCha20Rng::seed_from_u64(41);
        let mut arr: Vec<i64> = (0..500).map(|x| (x * 37) % 101).collect();
        arr.shuffle(&mut rng);

        let mut expected = arr.clone();
        expected.sort();
        sort_with(&mut arr, &mut RandomPivot::with_seed(7));
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut arr: Vec<i32> = (1..=50).collect();
        sort(&mut arr);
        assert_eq!(arr, (1..=50).collect::<Vec<i32>>());
        sort(&mut arr);
        assert_eq!(arr, (1..=50).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_reverse_sorted() {
        let mut arr: Vec<i32> = (1..=100).rev().collect();
        sort(&mut arr);
        assert_eq!(arr, (1..=100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_duplicates() {
        let mut arr = vec![2, 3, 2, 1, 3, 3, 1];
        sort(&mut arr);
        assert_eq!(arr, vec![1, 1, 2, 2, 3, 3, 3]);

        let mut arr = vec![4, 4, 4, 4];
        sort(&mut arr);
        assert_eq!(arr, vec![4, 4, 4, 4]);
    }

    #[test]
    fn test_sort_trivial_ranges() {
        let mut empty: Vec<i32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_sort_non_copy_elements() {
        let mut arr = vec![
            "pear".to_string(),
            "apple".to_string(),
            "quince".to_string(),
            "fig".to_string(),
        ];
        sort(&mut arr);
        assert_eq!(arr, vec!["apple", "fig", "pear", "quince"]);
    }

    #[test]
    fn test_seeded_sort_is_reproducible() {
        let input: Vec<u32> = vec![9, 4, 6, 0, 3, 8, 1, 7, 2, 5];
        let mut a = input.clone();
        let mut b = input;
        sort_with(&mut a, &mut RandomPivot::with_seed(99));
        sort_with(&mut b, &mut RandomPivot::with_seed(99));
        assert_eq!(a, b);
    }
}
