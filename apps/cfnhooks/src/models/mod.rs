//! Shared data models for target resolution and lint outcomes.

pub mod descriptor;

use std::path::PathBuf;

#[derive(Debug, Clone)]
/// A resolved (template, parameters) unit of work ready for linting.
///
/// Built once per (descriptor, stage, resource) triple and immutable
/// thereafter; the runner never mutates it.
pub struct LintTarget {
    /// Originating descriptor path, kept as given for diagnostic attribution.
    pub descriptor_path: PathBuf,
    /// Absolute, normalized path to the referenced template.
    pub template_path: PathBuf,
    /// Flattened `name=value` parameter assignments in document order.
    pub parameters: Vec<String>,
}

#[derive(Debug)]
/// Result of one linter invocation over a single target.
pub struct LintOutcome {
    pub failed: bool,
    pub stdout: String,
    pub stderr: String,
}
