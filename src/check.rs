//! Invariants every mover output has to satisfy.

use itertools::Itertools;

pub fn zero_count(array: &[i32]) -> usize {
    array.iter().filter(|&&v| v == 0).count()
}

/// True when no zero appears after a non-zero element.
pub fn is_partitioned(array: &[i32]) -> bool {
    let zeros = array.iter().take_while(|&&v| v == 0).count();
    array[zeros..].iter().all(|&v| v != 0)
}

/// True when both slices hold the same multiset of values.
pub fn is_permutation(before: &[i32], after: &[i32]) -> bool {
    before.len() == after.len() && before.iter().counts() == after.iter().counts()
}
