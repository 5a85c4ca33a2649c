//! Rule modules, rule files and pulling them into a project

pub mod pull;
pub mod reader;

use std::path::PathBuf;

pub use pull::{pull_all_from_modules, pull_rule_files, PullError};
pub use reader::ModuleReader;

/// Extension that marks a file as a rule file
pub const RULE_EXTENSION: &str = ".mdc";

/// A rule file offered by a module
///
/// Identity is the (module, name) pair; the same name in two modules is two files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    /// Module (directory) the file belongs to
    pub module: String,
    /// File name, including the extension
    pub name: String,
    /// Absolute source path
    pub path: PathBuf,
}

impl RuleFile {
    pub fn new(module: impl Into<String>, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            path: path.into(),
        }
    }

    /// Key used in outcomes and messages: `module/name`
    pub fn key(&self) -> String {
        format!("{}/{}", self.module, self.name)
    }
}

/// Per-file results of one pull
///
/// Every candidate file lands in exactly one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub success: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl Outcome {
    /// Total number of files accounted for
    pub fn total(&self) -> usize {
        self.success.len() + self.skipped.len() + self.failed.len()
    }
}
