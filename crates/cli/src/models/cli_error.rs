use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Address length must be positive")]
    AddressLengthMustBePositive,
    #[error("Max in flight cannot be zero")]
    MaxInFlightCannotBeZero,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Failed to read answer: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    CoreError(#[from] Error),
}

impl From<ReportError> for CliError {
    fn from(error: ReportError) -> Self {
        Self::CoreError(error.into())
    }
}
