//! Frost CLI - deterministic freeze-build pipeline
//!
//! Usage: frost <COMMAND>
//!
//! Commands:
//!   build   Run the full pipeline: activate, clean, package, report
//!   clean   Remove build artifacts
//!   check   Validate the workspace without building

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};
use commands::{cmd_build, cmd_check, cmd_clean, BuildOverrides};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            name,
            entry,
            dist,
            onedir,
            console,
            no_icon,
            no_clean_dist,
            dry_run,
        } => {
            let overrides = BuildOverrides {
                name,
                entry,
                dist,
                onedir,
                console,
                no_icon,
            };
            cmd_build(
                &cli.root,
                &overrides,
                no_clean_dist,
                dry_run,
                cli.json,
                cli.verbose,
            )
        }
        Commands::Clean { keep_dist, dry_run } => {
            cmd_clean(&cli.root, keep_dist, dry_run, cli.json, cli.verbose)
        }
        Commands::Check => cmd_check(&cli.root, cli.json),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
