//! Target resolver: descriptor discovery, parsing, and parameter flattening.
//!
//! Given an explicit list of candidate paths (relative to the repository
//! root, as pre-commit supplies them), keeps only the ones matching the
//! descriptor convention, parses each, and emits lint targets grouped per
//! descriptor so failures can be attributed back to their source file.

use crate::error::{Error, Result};
use crate::models::descriptor::{Descriptor, ResourceDef, CONFIG_KEY};
use crate::models::LintTarget;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Conventional file name for a deployment descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "cfn-cli.yaml";
/// Conventional top-level directory holding descriptors.
pub const PRODUCTS_DIR: &str = "products";

/// Resolve lint targets from `paths`, grouped per matching descriptor.
///
/// Paths that do not match the descriptor convention are silently excluded
/// and never opened. Any matching descriptor that fails to parse aborts the
/// whole resolution.
pub fn find_targets(repo_root: &Path, paths: &[String]) -> Result<Vec<Vec<LintTarget>>> {
    let mut groups = Vec::new();
    for path in paths {
        let path = Path::new(path);
        if !is_descriptor_path(path) {
            continue;
        }
        groups.push(parse_descriptor(repo_root, path)?);
    }
    Ok(groups)
}

/// Eligibility rule: exact conventional file name AND the path's first
/// normal component (the top-level directory, not the immediate parent)
/// equals the products directory.
fn is_descriptor_path(path: &Path) -> bool {
    if path.file_name().and_then(|n| n.to_str()) != Some(DESCRIPTOR_FILE_NAME) {
        return false;
    }
    top_level_dir(path) == Some(PRODUCTS_DIR)
}

fn top_level_dir(path: &Path) -> Option<&str> {
    path.components().find_map(|c| match c {
        Component::Normal(s) => s.to_str(),
        _ => None,
    })
}

/// Parse one descriptor into its lint targets.
///
/// Stages and resources are visited in document order. `Config` entries are
/// skipped before decoding, so even a malformed `Config` body is harmless.
/// A resource missing `Template` fails the whole descriptor.
pub fn parse_descriptor(repo_root: &Path, path: &Path) -> Result<Vec<LintTarget>> {
    let full = repo_root.join(path);
    let data = fs::read_to_string(&full).map_err(|e| Error::Io {
        path: full.clone(),
        source: e,
    })?;
    let doc: Descriptor = serde_yaml::from_str(&data).map_err(|e| malformed(&full, e))?;

    // The descriptor's directory exists (we just read a file in it), so
    // canonicalize it once; template paths are then joined and normalized
    // lexically. A dangling template path is not an error here; cfn-lint
    // reports those itself.
    let dir = full.parent().unwrap_or_else(|| Path::new("."));
    let dir = dir.canonicalize().map_err(|e| Error::PathResolution {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut targets = Vec::new();
    for (stage_key, stage) in &doc.stages {
        let stage_name = stage_key.as_str().unwrap_or("<non-string stage>");
        let resources = stage.as_mapping().ok_or_else(|| {
            malformed(&full, format!("stage `{stage_name}` is not a mapping"))
        })?;
        for (name_key, value) in resources {
            let name = name_key.as_str().unwrap_or("<non-string resource>");
            if name == CONFIG_KEY {
                continue;
            }
            let def: ResourceDef = serde_yaml::from_value(value.clone()).map_err(|e| {
                malformed(&full, format!("resource `{name}` in stage `{stage_name}`: {e}"))
            })?;
            let parameters = flatten_parameters(&def.parameters).map_err(|detail| {
                malformed(&full, format!("resource `{name}` in stage `{stage_name}`: {detail}"))
            })?;
            targets.push(LintTarget {
                descriptor_path: path.to_path_buf(),
                template_path: normalize(dir.join(&def.template)),
                parameters,
            });
        }
    }
    Ok(targets)
}

fn malformed(path: &Path, detail: impl ToString) -> Error {
    Error::MalformedDescriptor {
        path: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Flatten a parameter mapping into `name=value` strings in document order.
fn flatten_parameters(params: &Mapping) -> std::result::Result<Vec<String>, String> {
    let mut out = Vec::with_capacity(params.len());
    for (key, value) in params {
        let key = scalar_to_string(key).ok_or("parameter name is not a scalar")?;
        let value = scalar_to_string(value)
            .ok_or_else(|| format!("parameter `{key}` has a non-scalar value"))?;
        out.push(format!("{key}={value}"));
    }
    Ok(out)
}

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Resolve `.`/`..` lexically. The input is already absolute (rooted at a
/// canonicalized directory), so this never has to consult the filesystem.
fn normalize(path: PathBuf) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
