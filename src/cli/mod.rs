//! Command Line Interface (CLI) layer for promptpress.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the interactive and batch
//! flows. It wires user-provided options to the library functionality
//! exposed via `promptpress::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
