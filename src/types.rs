//! Shared types and enums used across squarepad.
//! Includes the per-file `FileOutcome` and the batch `ErrorPolicy`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the batch does when a single file fails to decode, encode or write.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Record the failure and move on to the next file
    #[default]
    Continue,
    /// Stop the run at the first failure
    Abort,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Continue => write!(f, "continue"),
            ErrorPolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Terminal state of a single file. Every file reaches exactly one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FileOutcome {
    /// Written to the output path as a `size`x`size` canvas
    Padded { size: u32 },
    /// Left untouched; nothing was written
    AlreadySquare { width: u32, height: u32 },
    Failed { reason: String },
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Padded { size } => write!(f, "padding to {}x{}", size, size),
            FileOutcome::AlreadySquare { width, height } => {
                write!(f, "already square ({}x{})", width, height)
            }
            FileOutcome::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}
