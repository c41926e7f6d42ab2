//! Report rendering for lint outcomes.
//!
//! Rendering is kept pure (string in, string out) so the exact report shape
//! can be asserted in tests; the runner decides when to print.

use crate::models::{LintOutcome, LintTarget};

/// Marker prepended to each non-empty linter output line in a failure report.
const BULLET: &str = "    * ";

/// Compose the failure report for one target: the originating descriptor
/// path, each non-empty stdout line bulleted, then stderr verbatim.
pub fn render_failure(target: &LintTarget, outcome: &LintOutcome) -> String {
    let mut out = String::new();
    out.push_str(&target.descriptor_path.display().to_string());
    out.push('\n');
    for line in outcome.stdout.lines() {
        if !line.is_empty() {
            out.push_str(BULLET);
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(&outcome.stderr);
    out.push('\n');
    out
}
