use log::debug;

use super::ZeroMover;

/// Moves zeros to the front through a scratch buffer of the same length.
///
/// Linear time: one backwards scan fills the buffer and one copy writes it
/// back. Linear auxiliary space for the buffer, which is dropped before the
/// call returns. Non-zero elements keep their relative order.
#[derive(Default, Debug, Clone, Copy)]
pub struct RuntimeOptimized;

impl ZeroMover for RuntimeOptimized {
    fn name(&self) -> &'static str {
        "RuntimeOptimized"
    }

    fn rearrange(&self, array: &mut [i32]) {
        let mut scratch = vec![0; array.len()];
        // one past the next slot to fill, counting down from the end
        let mut next_output = scratch.len();
        for &value in array.iter().rev() {
            if value != 0 {
                next_output -= 1;
                scratch[next_output] = value;
            }
        }
        debug!("RuntimeOptimized: {next_output} zeros in {} elements", array.len());
        array.copy_from_slice(&scratch);
    }
}
