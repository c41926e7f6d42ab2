//! CLI argument parsing via `clap`.

use crate::filenames::DEFAULT_MIN_LEN;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cfnhooks",
    version,
    about = "Pre-commit checks for CloudFormation repositories",
    long_about = "cfnhooks — lint cfn-cli deployment descriptors with cfn-lint and enforce snake_case filenames.\n\nIntended to run from the repository root, e.g. as a pre-commit hook over the staged file list.",
    after_help = "Examples:\n  cfnhooks lint products/app/cfn-cli.yaml\n  cfnhooks filenames src/my_module.py --min-len 3",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for descriptor linting and filename validation.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current cfnhooks version."
    )]
    Version,
    /// Lint deployment descriptors with cfn-lint
    #[command(
        about = "Lint deployment descriptors",
        long_about = "Resolve cfn-cli.yaml descriptors from the given paths and run cfn-lint once per referenced template with its stage parameters. Paths outside products/ or with other names are ignored. Exits 1 when any template fails linting.",
        after_help = "Examples:\n  cfnhooks lint products/app/cfn-cli.yaml\n  cfnhooks lint $(git diff --cached --name-only)"
    )]
    Lint {
        #[arg(required = true, help = "Filenames to process")]
        filenames: Vec<String>,
    },
    /// Validate filenames against the snake_case convention
    #[command(
        about = "Validate filenames",
        long_about = "Check that each filename's stem is snake_case (lowercase letters and underscores only) and at least --min-len characters long. Exits 1 when any filename violates a rule.",
        after_help = "Examples:\n  cfnhooks filenames src/my_module.py\n  cfnhooks filenames src/db.py --min-len 2"
    )]
    Filenames {
        #[arg(required = true, help = "Filenames to process")]
        filenames: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_MIN_LEN, help = "Minimum length for a filename stem")]
        min_len: usize,
    },
}
