use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{errors} file(s) could not be padded")]
    BatchFailed { errors: usize },

    #[error(transparent)]
    Squarepad(#[from] squarepad::Error),
}
