//! Command Line Interface (CLI) layer for squarepad.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns user-provided options
//! into `SquareParams` and drives `squarepad::ImageSquarer`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
