use crate::cs::sort::pivot::PivotStrategy;
use crate::cs::sort::selection::select_with;
use crate::error::{Error, Result};

/// Standard group size for the median-of-medians computation. Together with
/// the lower-median tie-break it bounds the pivot between the 30th and 70th
/// percentile, which is what makes deterministic selection worst-case linear.
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Deterministic pivot choice via the median-of-medians of the range.
///
/// Computes the pivot value with [`median_of_medians`] and converts it back to
/// an index by scanning for the first equal element. With duplicate values the
/// scan may pick a different instance than the one that produced the median,
/// which is harmless for selection correctness.
pub struct MedianOfMedians {
    group_size: usize,
}

impl MedianOfMedians {
    /// Strategy with the standard group size of 5.
    pub fn new() -> Self {
        MedianOfMedians {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }

    /// Strategy with a custom group size.
    ///
    /// # Errors
    /// * `InvalidInput` for group sizes below 2, which would never shrink the
    ///   recursion on the medians list
    pub fn with_group_size(group_size: usize) -> Result<Self> {
        if group_size < 2 {
            return Err(Error::invalid_input(format!(
                "median-of-medians group size must be at least 2, got {group_size}"
            )));
        }
        Ok(MedianOfMedians { group_size })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }
}

impl Default for MedianOfMedians {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> PivotStrategy<T> for MedianOfMedians {
    fn pivot_index(&mut self, arr: &[T]) -> Result<usize> {
        let value = median_of_medians(arr, self.group_size)?;
        arr.iter()
            .position(|x| *x == value)
            .ok_or_else(|| Error::internal("median-of-medians value not found in its own range"))
    }
}

/// Computes the median-of-medians of `arr` with the given group size.
///
/// Ranges no longer than `group_size` are sorted directly and yield their lower
/// median. Longer ranges are split into contiguous groups (the last one may be
/// shorter), each group contributes its lower median, and the lower median of
/// that list is found by calling back into the order-statistic selector with
/// this same strategy.
///
/// The returned value is guaranteed to lie strictly between the 30th and 70th
/// percentile of `arr` by value rank (up to small-range slack).
///
/// # Errors
/// * `InvalidRange` if `arr` is empty
/// * `InvalidInput` for group sizes below 2
pub fn median_of_medians<T: Ord + Clone>(arr: &[T], group_size: usize) -> Result<T> {
    if arr.is_empty() {
        return Err(Error::invalid_range(
            "cannot take the median of an empty range",
        ));
    }
    if group_size < 2 {
        return Err(Error::invalid_input(format!(
            "median-of-medians group size must be at least 2, got {group_size}"
        )));
    }

    if arr.len() <= group_size {
        return Ok(group_median(arr));
    }

    let mut medians: Vec<T> = arr.chunks(group_size).map(group_median).collect();

    // Lower median of the medians list, found through the selector itself.
    let rank = (medians.len() - 1) / 2 + 1;
    select_with(&mut medians, rank, &mut MedianOfMedians { group_size })
}

/// Sorts a copy of the group and returns its lower median.
fn group_median<T: Ord + Clone>(group: &[T]) -> T {
    let mut buf = group.to_vec();
    buf.sort();
    buf[(buf.len() - 1) / 2].clone()
}
