use log::debug;

use super::ZeroMover;

/// Moves zeros to the front in place, with constant auxiliary space.
///
/// A backwards scan looks for zeros while a forward cursor looks for the
/// leftmost non-zero still in front of the scan; each zero found is swapped
/// with it. The two cursors meet after at most `n` steps in total.
#[derive(Default, Debug, Clone, Copy)]
pub struct SpaceOptimized;

impl ZeroMover for SpaceOptimized {
    fn name(&self) -> &'static str {
        "SpaceOptimized"
    }

    fn rearrange(&self, array: &mut [i32]) {
        let mut next_zero = 0;
        let mut swaps = 0usize;
        let Some(mut i) = array.len().checked_sub(1) else {
            return;
        };
        while i > next_zero {
            if array[i] == 0 {
                while array[next_zero] == 0 && i > next_zero {
                    next_zero += 1;
                }
                // array[i] is zero, so this leaves a zero at next_zero
                array.swap(i, next_zero);
                swaps += 1;
            }
            i -= 1;
        }
        debug!("SpaceOptimized: {swaps} swaps in {} elements", array.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveError;

    #[test]
    fn test_fixed_input() {
        let mut array = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
        SpaceOptimized.apply(&mut array).unwrap();
        assert_eq!(array, [0, 0, 3, 4, 5, 6, 7, 8, 2, 1]);
    }

    #[test]
    fn test_zeros_between_non_zeros() {
        let mut array = [1, 2, 0, 3, 0];
        SpaceOptimized.apply(&mut array).unwrap();
        assert_eq!(array, [0, 0, 2, 3, 1]);

        let mut array = [5, 0, 0];
        SpaceOptimized.apply(&mut array).unwrap();
        assert_eq!(array, [0, 0, 5]);
    }

    #[test]
    fn test_single_element() {
        let mut zero = [0];
        SpaceOptimized.apply(&mut zero).unwrap();
        assert_eq!(zero, [0]);

        let mut five = [5];
        SpaceOptimized.apply(&mut five).unwrap();
        assert_eq!(five, [5]);
    }

    #[test]
    fn test_rearrange_empty() {
        let mut empty: [i32; 0] = [];
        SpaceOptimized.rearrange(&mut empty);
        crate::RuntimeOptimized.rearrange(&mut empty);
        assert_eq!(empty, [] as [i32; 0]);
    }

    #[test]
    fn test_already_partitioned() {
        let mut array = [0, 0, 0, 5];
        SpaceOptimized.apply(&mut array).unwrap();
        assert_eq!(array, [0, 0, 0, 5]);
    }

    #[test]
    fn test_rejects_without_mutation() {
        let mut array = [0, 1];
        let err = SpaceOptimized.move_zeroes(Some(&mut array), 3).unwrap_err();
        assert!(matches!(err, MoveError::InvalidArgument { .. }));
        assert_eq!(array, [0, 1]);
        assert!(SpaceOptimized.move_zeroes(None, 1).is_err());
    }
}
