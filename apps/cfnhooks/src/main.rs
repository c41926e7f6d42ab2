//! cfnhooks CLI binary entry point.
//! Delegates to modules for target resolution, lint execution, and filename
//! checks, then maps results onto the process exit code.

mod cli;
mod error;
mod filenames;
mod lint;
mod models;
mod output;
mod targets;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint { filenames } => {
            std::process::exit(run_descriptor_lint(&filenames));
        }
        Commands::Filenames { filenames, min_len } => {
            // Collect first so every filename gets its diagnostics even when
            // an earlier one already failed.
            let results: Vec<bool> = filenames
                .iter()
                .map(|f| !filenames::is_valid_filename(f, min_len))
                .collect();
            std::process::exit(i32::from(results.iter().any(|r| *r)));
        }
    }
}

/// Resolve descriptors from `filenames` and lint every target, returning the
/// process exit code: 0 when nothing failed (including zero targets), 1 when
/// at least one target failed linting, 2 on fatal errors.
fn run_descriptor_lint(filenames: &[String]) -> i32 {
    let groups = match targets::find_targets(Path::new("."), filenames) {
        Ok(groups) => groups,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };

    let linter = lint::CfnLint;
    let mut failed = false;
    for group in &groups {
        match lint::run_lint(&linter, group) {
            Ok(results) => failed = results.iter().any(|f| *f) || failed,
            Err(e) => {
                eprintln!("{} {}", utils::error_prefix(), e);
                return 2;
            }
        }
    }
    i32::from(failed)
}
