use crate::error::{MoveError, Result};

/// A way of moving every zero of an array in front of every non-zero.
///
/// Implementors only provide `rearrange`, which receives an already validated,
/// non-empty slice. Argument checking lives in `move_zeroes` so that every
/// mover rejects the same inputs before touching any element.
pub trait ZeroMover {
    /// Label used in the harness transcript.
    fn name(&self) -> &'static str;

    fn rearrange(&self, array: &mut [i32]);

    /// Moves the zeros of the first `size` elements of `array` to the front.
    ///
    /// Fails with [`MoveError::InvalidArgument`] when `array` is absent, when
    /// `size` is zero, or when `size` exceeds the slice. Nothing is mutated on
    /// failure.
    fn move_zeroes(&self, array: Option<&mut [i32]>, size: usize) -> Result<()> {
        let array = checked_prefix(array, size)?;
        log::trace!("{}: moving zeros of {array:?}", self.name());
        self.rearrange(array);
        log::trace!("{}: result {array:?}", self.name());
        Ok(())
    }

    /// Runs the mover over the whole slice.
    fn apply(&self, array: &mut [i32]) -> Result<()> {
        let size = array.len();
        self.move_zeroes(Some(array), size)
    }
}

/// Validates the `(array, size)` pair and returns the `size`-element prefix.
///
/// The size check comes first so a zero size never looks at the array.
pub fn checked_prefix(array: Option<&mut [i32]>, size: usize) -> Result<&mut [i32]> {
    if size == 0 {
        return Err(MoveError::InvalidArgument {
            reason: "array size is zero",
        });
    }
    let array = array.ok_or(MoveError::InvalidArgument {
        reason: "array is absent",
    })?;
    if size > array.len() {
        return Err(MoveError::InvalidArgument {
            reason: "array size exceeds array length",
        });
    }
    Ok(&mut array[..size])
}
