use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while validating input, solving or rendering.
#[derive(Debug, Error)]
pub enum RodCutError {
    #[error("Rod length must be between 1 and {max}.")]
    RodLengthOutOfRange { length: i64, max: usize },

    #[error("Memory allocation failed.")]
    Allocation(#[from] TryReserveError),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render solution: {0}")]
    Render(#[from] serde_yaml::Error),
}
