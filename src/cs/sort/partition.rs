use crate::error::{Error, Result};

/// Partitions `arr` in place around the element at `pivot_idx`.
///
/// After the call, every element left of the returned index is strictly less
/// than the pivot value and every element right of it is greater or equal;
/// the pivot itself sits at the returned index. Elements equal to the pivot
/// always end up on the greater-or-equal side, a tie-break the order-statistic
/// selector relies on.
///
/// Costs exactly `arr.len() - 1` comparisons and at most that many swaps, with
/// no allocation.
///
/// # Errors
/// * `InvalidRange` if `arr` is empty or `pivot_idx` is out of bounds
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::partition;
///
/// let mut arr = [5, 6, 1, 4, 7, 2, 3];
/// let p = partition(&mut arr, 3).unwrap();
/// assert_eq!(arr[p], 4);
/// assert!(arr[..p].iter().all(|x| *x < 4));
/// assert!(arr[p + 1..].iter().all(|x| *x >= 4));
/// ```
pub fn partition<T: Ord>(arr: &mut [T], pivot_idx: usize) -> Result<usize> {
    if arr.is_empty() {
        return Err(Error::invalid_range("cannot partition an empty range"));
    }
    if pivot_idx >= arr.len() {
        return Err(Error::invalid_range(format!(
            "pivot index {} out of bounds for range of length {}",
            pivot_idx,
            arr.len()
        )));
    }
    Ok(partition_at(arr, pivot_idx))
}

/// Unchecked partition used internally by the quicksort and selection drivers,
/// which validate their ranges once at the public boundary.
pub(crate) fn partition_at<T: Ord>(arr: &mut [T], pivot_idx: usize) -> usize {
    debug_assert!(pivot_idx < arr.len());

    // Move the pivot to the front, out of the way of the scan.
    arr.swap(0, pivot_idx);

    // `boundary` marks the first position known to hold an element >= pivot.
    let mut boundary = 1;
    for idx in 1..arr.len() {
        if arr[idx] < arr[0] {
            arr.swap(idx, boundary);
            boundary += 1;
        }
    }

    // Put the pivot where it belongs, between the two sides.
    arr.swap(0, boundary - 1);
    boundary - 1
}
