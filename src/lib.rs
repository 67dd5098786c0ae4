#![warn(missing_docs)]
//! Library support for the resume CLI.

/// Command-line interface wiring and dispatch.
mod cli;
/// Command implementations.
mod commands;
/// Configuration loading and validation.
mod config;
/// Box borders, banner and terminal capability checks.
mod decorate;
/// The built-in resume document.
mod defaults;
/// Warning aggregation.
mod diagnostics;
/// Error handling for the crate.
mod error;
/// JSON Resume schema export.
mod json_resume;
/// Plain-text resume reader and writer.
mod legacy;
/// Resume discovery and loading.
mod loader;
/// Color palette and styling for CLI output.
mod palette;
/// Path expansion and normalization utilities.
mod paths;
/// Line building, wrapping and layout.
mod render;
/// The normalized resume record.
mod resume;
/// ASCII substitution.
mod sanitize;
/// Test fixtures.
#[cfg(test)]
mod testutil;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub async fn run() -> Result<()> {
    cli::run().await
}
