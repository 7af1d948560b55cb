//! Sorting and order-statistic selection.
//!
//! The quicksort driver, the randomized and deterministic order-statistic
//! selectors, and the median-of-medians pivot computation all share one
//! in-place partition primitive and differ only in how they choose pivots and
//! steer the recursion afterwards. Merge sort stands alone as an out-of-place
//! routine.

pub mod median_of_medians;
pub mod merge_sort;
pub mod partition;
pub mod pivot;
pub mod quicksort;
pub mod selection;

pub use median_of_medians::{median_of_medians, MedianOfMedians, DEFAULT_GROUP_SIZE};
pub use merge_sort::merge_sort;
pub use partition::partition;
pub use pivot::{PivotStrategy, RandomPivot};
pub use quicksort::{sort, sort_with};
pub use selection::{select_deterministic, select_randomized, select_with};
