//! CLI commands

pub mod list;
pub mod pull;
pub mod summary;

use std::path::PathBuf;

/// Options shared by both modes
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Modules named on the command line (shorthands first)
    pub modules: Vec<String>,
    /// Base directory receiving `.cursor/rules` (current directory if unset)
    pub target: Option<PathBuf>,
}
