//! Lint runner: invokes the external linter once per resolved target.
//!
//! Targets run strictly in the order received, one blocking subprocess at a
//! time; reports stream to stdout as each target completes. A failure to
//! *launch* the linter aborts the run, while a lint failure is a normal
//! per-target result that feeds the exit code upstream.

use crate::error::{Error, Result};
use crate::models::{LintOutcome, LintTarget};
use crate::output;
use std::path::Path;
use std::process::Command;

/// External linter executable, expected on PATH.
pub const CFN_LINT_BIN: &str = "cfn-lint";

/// Narrow seam around the external linter so tests can substitute a fake
/// without spawning real processes.
pub trait TemplateLinter {
    fn lint(&self, template: &Path, parameters: &[String]) -> Result<LintOutcome>;
}

/// Production linter backed by the `cfn-lint` executable.
pub struct CfnLint;

impl TemplateLinter for CfnLint {
    fn lint(&self, template: &Path, parameters: &[String]) -> Result<LintOutcome> {
        let out = Command::new(CFN_LINT_BIN)
            .arg("--template")
            .arg(template)
            .arg("--parameters")
            .args(parameters)
            .output()
            .map_err(|e| Error::LinterLaunch {
                bin: CFN_LINT_BIN,
                source: e,
            })?;
        Ok(LintOutcome {
            failed: !out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

/// Run the linter over `targets` in order, printing each report as it
/// completes. Returns one flag per target, `true` when linting failed.
pub fn run_lint(linter: &dyn TemplateLinter, targets: &[LintTarget]) -> Result<Vec<bool>> {
    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        let outcome = linter.lint(&target.template_path, &target.parameters)?;
        if outcome.failed {
            print!("{}", output::render_failure(target, &outcome));
        } else {
            println!("{}", outcome.stdout);
        }
        results.push(outcome.failed);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fake linter that fails for templates recorded in `failing`.
    struct FakeLinter {
        failing: Vec<PathBuf>,
    }

    impl TemplateLinter for FakeLinter {
        fn lint(&self, template: &Path, _parameters: &[String]) -> Result<LintOutcome> {
            let failed = self.failing.iter().any(|p| p == template);
            Ok(LintOutcome {
                failed,
                stdout: if failed {
                    "E0001 something is off\n".to_string()
                } else {
                    String::new()
                },
                stderr: String::new(),
            })
        }
    }

    /// Fake linter whose executable cannot be started.
    struct MissingLinter;

    impl TemplateLinter for MissingLinter {
        fn lint(&self, _template: &Path, _parameters: &[String]) -> Result<LintOutcome> {
            Err(Error::LinterLaunch {
                bin: CFN_LINT_BIN,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn target(template: &str) -> LintTarget {
        LintTarget {
            descriptor_path: PathBuf::from("products/app/cfn-cli.yaml"),
            template_path: PathBuf::from(template),
            parameters: vec!["Env=dev".to_string()],
        }
    }

    #[test]
    fn test_all_pass_yields_no_failures() {
        let linter = FakeLinter { failing: vec![] };
        let targets = vec![target("/t/a.yaml"), target("/t/b.yaml")];
        let results = run_lint(&linter, &targets).unwrap();
        assert_eq!(results, vec![false, false]);
        assert!(!results.iter().any(|f| *f));
    }

    #[test]
    fn test_one_failure_is_recorded_in_position() {
        let linter = FakeLinter {
            failing: vec![PathBuf::from("/t/b.yaml")],
        };
        let targets = vec![target("/t/a.yaml"), target("/t/b.yaml"), target("/t/c.yaml")];
        let results = run_lint(&linter, &targets).unwrap();
        assert_eq!(results, vec![false, true, false]);
        assert!(results.iter().any(|f| *f));
    }

    #[test]
    fn test_launch_failure_aborts_the_run() {
        let targets = vec![target("/t/a.yaml")];
        let err = run_lint(&MissingLinter, &targets).unwrap_err();
        assert!(matches!(err, Error::LinterLaunch { .. }));
    }

    #[test]
    fn test_no_targets_is_vacuous_success() {
        let linter = FakeLinter { failing: vec![] };
        let results = run_lint(&linter, &[]).unwrap();
        assert!(results.is_empty());
        assert!(!results.iter().any(|f| *f));
    }
}
