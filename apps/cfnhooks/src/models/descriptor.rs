//! Descriptor schema: the shape of a `cfn-cli.yaml` deployment descriptor.
//!
//! A descriptor groups resources by deployment stage. Each resource binds a
//! template (relative to the descriptor's directory) to a set of parameters.
//! The reserved resource name [`CONFIG_KEY`] marks a non-resource entry that
//! resolution skips without ever decoding its body.

use serde::Deserialize;
use serde_yaml::Mapping;

/// Reserved resource name for stage-level configuration; never a lint target.
pub const CONFIG_KEY: &str = "Config";

#[derive(Deserialize)]
/// Top-level descriptor document.
pub struct Descriptor {
    /// Stage name -> mapping of resource name -> resource definition.
    /// `serde_yaml::Mapping` keeps document order, which downstream
    /// flattening and reporting rely on for reproducible output.
    #[serde(rename = "Stages")]
    pub stages: Mapping,
}

#[derive(Deserialize)]
/// One resource entry within a stage.
pub struct ResourceDef {
    /// Template path, relative to the descriptor's containing directory.
    #[serde(rename = "Template")]
    pub template: String,
    /// Parameter name -> scalar value, in document order. Absent means empty.
    #[serde(rename = "Parameters", default)]
    pub parameters: Mapping,
}
