//! CLI definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Frost - deterministic freeze-build pipeline for Python apps
#[derive(Parser, Debug)]
#[command(name = "frost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NDJSON event output for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root directory
    #[arg(short = 'C', long, default_value = ".", global = true)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: activate, clean, package, report
    Build {
        /// Output artifact name (overrides frost.toml)
        #[arg(long)]
        name: Option<String>,

        /// Entry-point script (overrides frost.toml)
        #[arg(long)]
        entry: Option<PathBuf>,

        /// Output directory (overrides frost.toml)
        #[arg(long)]
        dist: Option<PathBuf>,

        /// Bundle as a directory instead of a single file
        #[arg(long)]
        onedir: bool,

        /// Keep the console window (disable windowed mode)
        #[arg(long)]
        console: bool,

        /// Bundle without an icon resource
        #[arg(long)]
        no_icon: bool,

        /// Keep stale output-directory contents before the build
        #[arg(long)]
        no_clean_dist: bool,

        /// Show what would run without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove build artifacts (build dir, spec files, output dir)
    Clean {
        /// Preserve the output directory and its artifact
        #[arg(long)]
        keep_dist: bool,

        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate the workspace without building
    Check,
}
