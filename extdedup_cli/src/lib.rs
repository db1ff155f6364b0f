//! extdedup command line library
//!
//! Argument parsing, configuration layering, reporting and exit codes for the
//! `extdedup` binary. The deduplication itself lives in `extdedup_core`.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod terminal;

pub use app::{RunSettings, load_config, run, run_with_stdio};
pub use cli::Cli;
pub use error::{CliError, CliResult, ExitCode};
