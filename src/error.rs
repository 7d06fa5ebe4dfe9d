use thiserror::Error;

/// Status code reported for a successful move.
pub const STATUS_OK: i32 = 0;

/// Status code reported for a rejected argument.
pub const STATUS_INVALID_ARGUMENT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

impl MoveError {
    pub fn status(&self) -> i32 {
        match self {
            MoveError::InvalidArgument { .. } => STATUS_INVALID_ARGUMENT,
        }
    }
}

pub type Result<T> = std::result::Result<T, MoveError>;

/// Collapses a mover result into the numeric status of the C-style entry points.
pub fn status_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => err.status(),
    }
}
