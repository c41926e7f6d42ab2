//! Filename convention checks used by the `filenames` subcommand.
//!
//! The check applies to the file stem only, so `src/my_module.py` is judged
//! on `my_module`. Two rules: minimum length and a snake_case character
//! class (lowercase letters and underscores, whole-stem match).

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Default minimum stem length for the `--min-len` flag.
pub const DEFAULT_MIN_LEN: usize = 3;

fn snake_case_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[a-z_]+$").unwrap())
}

#[derive(Debug, PartialEq, Eq)]
/// A single naming-convention violation for one filename.
pub enum Violation {
    TooShort { min_len: usize },
    NotSnakeCase,
}

impl Violation {
    /// Diagnostic line printed for this violation.
    pub fn message(&self, filename: &str) -> String {
        match self {
            Violation::TooShort { min_len } => {
                format!("Name too short (min_len={min_len}): {filename}")
            }
            Violation::NotSnakeCase => {
                format!("Filename is not in snake_case: {filename}")
            }
        }
    }
}

/// Check the file stem of `filename` against the naming convention.
pub fn check_filename(filename: &str, min_len: usize) -> Vec<Violation> {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    let mut violations = Vec::new();
    if stem.chars().count() < min_len {
        violations.push(Violation::TooShort { min_len });
    }
    if !snake_case_re().is_match(stem) {
        violations.push(Violation::NotSnakeCase);
    }
    violations
}

/// Predicate mirroring the CLI behavior: prints one diagnostic line per
/// violation, returns whether the filename passes.
pub fn is_valid_filename(filename: &str, min_len: usize) -> bool {
    let violations = check_filename(filename, min_len);
    for v in &violations {
        println!("{}", v.message(filename));
    }
    violations.is_empty()
}
