//! Command line arguments

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::terminal::ColorMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "extdedup")]
#[command(
    author,
    version,
    about = "Delete default-extension files that have a preferred-extension twin",
    long_about = "Scans the current directory for files sharing a base name, such as \
                  photo.png and photo.jpg, and deletes the default-extension file whenever \
                  the preferred-extension file exists next to it."
)]
pub struct Cli {
    /// Preferred extension without leading dot, e.g. png
    #[arg(
        short,
        long,
        value_name = "EXT",
        required_unless_present = "completions"
    )]
    pub preferred: Option<String>,

    /// Default extension without leading dot, e.g. jpg
    #[arg(
        short = 'd',
        long = "default",
        value_name = "EXT",
        required_unless_present = "completions"
    )]
    pub default_ext: Option<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// List deletions without performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print every kept and deleted file
    #[arg(short, long)]
    pub verbose: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth for recursive scans (1 = current directory only)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Glob of paths to leave alone, relative to the current directory (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
