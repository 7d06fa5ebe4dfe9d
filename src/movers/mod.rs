mod mover;
mod runtime_optimized;
mod space_optimized;

pub use mover::{checked_prefix, ZeroMover};
pub use runtime_optimized::RuntimeOptimized;
pub use space_optimized::SpaceOptimized;
