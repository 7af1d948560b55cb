use crate::cs::sort::median_of_medians::MedianOfMedians;
use crate::cs::sort::partition::partition_at;
use crate::cs::sort::pivot::{PivotStrategy, RandomPivot};
use crate::error::{Error, Result};

/// Returns the `rank`-th smallest element of `arr` (1-based) using a random
/// pivot, partially reordering `arr` as a side effect.
///
/// Expected linear time; the worst case is quadratic with vanishing
/// probability.
///
/// # Errors
/// * `InvalidRange` if `arr` is empty
/// * `RankOutOfBounds` if `rank` is not in `1..=arr.len()`
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::select_randomized;
///
/// let mut arr = [5, 6, 1, 4, 7, 2, 3];
/// assert_eq!(select_randomized(&mut arr, 3).unwrap(), 3);
/// ```
pub fn select_randomized<T: Ord + Clone>(arr: &mut [T], rank: usize) -> Result<T> {
    select_with(arr, rank, &mut RandomPivot::new())
}

/// Returns the `rank`-th smallest element of `arr` (1-based) using a
/// median-of-medians pivot, partially reordering `arr` as a side effect.
///
/// Worst-case linear time via the recurrence `T(n) <= T(n/5) + T(7n/10) + O(n)`.
///
/// # Errors
/// * `InvalidRange` if `arr` is empty
/// * `RankOutOfBounds` if `rank` is not in `1..=arr.len()`
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::select_deterministic;
///
/// let mut arr = [5, 6, 1, 4, 7, 2, 3, 8, 9, 10, 11];
/// assert_eq!(select_deterministic(&mut arr, 1).unwrap(), 1);
/// assert_eq!(select_deterministic(&mut arr, 11).unwrap(), 11);
/// ```
pub fn select_deterministic<T: Ord + Clone>(arr: &mut [T], rank: usize) -> Result<T> {
    select_with(arr, rank, &mut MedianOfMedians::new())
}

/// Order-statistic driver shared by the randomized and deterministic variants.
///
/// Each step asks `strategy` for a pivot, partitions, and narrows to the side
/// holding the requested rank; the rank is re-expressed relative to the new
/// sub-range. The range strictly shrinks every step, so the loop terminates.
pub fn select_with<T, P>(arr: &mut [T], rank: usize, strategy: &mut P) -> Result<T>
where
    T: Ord + Clone,
    P: PivotStrategy<T>,
{
    if arr.is_empty() {
        return Err(Error::invalid_range(
            "cannot select from an empty range",
        ));
    }
    if rank < 1 || rank > arr.len() {
        return Err(Error::RankOutOfBounds {
            rank,
            len: arr.len(),
        });
    }

    let mut arr = arr;
    let mut rank = rank;
    loop {
        if arr.len() == 1 {
            return Ok(arr[0].clone());
        }

        let pivot_idx = strategy.pivot_index(arr)?;
        let p = partition_at(arr, pivot_idx);
        let pivot_rank = p + 1;
        log::trace!(
            "selection step: range length {}, pivot rank {}, target rank {}",
            arr.len(),
            pivot_rank,
            rank
        );

        if rank == pivot_rank {
            return Ok(arr[p].clone());
        }
        let current = arr;
        let (left, rest) = current.split_at_mut(p);
        if rank < pivot_rank {
            arr = left;
        } else {
            rank -= pivot_rank;
            arr = &mut rest[1..];
        }
    }
}
