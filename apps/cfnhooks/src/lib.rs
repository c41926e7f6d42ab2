//! cfnhooks core library.
//!
//! This crate exposes programmatic APIs for validating a repository of
//! cfn-cli deployment descriptors and for checking filename conventions.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `targets`: Target resolution — descriptor discovery, parsing, and
//!   parameter flattening into lint targets.
//! - `lint`: Lint execution via the external `cfn-lint` process, behind a
//!   `TemplateLinter` seam.
//! - `filenames`: snake_case filename validation.
//! - `models`: Data models for descriptors, lint targets, and outcomes.
//! - `output`: Failure report rendering.
//! - `error`: Error taxonomy shared across modules.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod error;
pub mod filenames;
pub mod lint;
pub mod models;
pub mod output;
pub mod targets;
pub mod utils;
