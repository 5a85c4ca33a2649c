//! Diagnostics emitted while discovering and pulling rule files
//!
//! Components never print directly. They report to a [`Diagnostics`] sink, which
//! the CLI renders to the console and tests collect for inspection.

use owo_colors::OwoColorize;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::rules::pull::PullError;

/// How loudly a diagnostic should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single non-fatal event
#[derive(Debug)]
pub enum Diagnostic {
    /// The rules root could not be listed
    RootUnreadable { path: PathBuf, source: io::Error },
    /// A requested module directory is not accessible
    ModuleMissing { module: String },
    /// A module directory exists but could not be listed
    ModuleUnreadable { module: String, source: io::Error },
    /// Rule files were resolved for a batch pull
    Found { files: usize, modules: usize },
    /// The rules root holds no modules
    NoModules,
    /// The user picked no modules
    NoModulesSelected,
    /// The requested modules contain no rule files
    NoRuleFiles,
    /// The user picked no rule files
    NoFilesSelected,
    /// A rule file was copied into the target directory
    Pulled { key: String },
    /// The target already holds identical content
    UpToDate { key: String },
    /// The user declined to overwrite a differing target
    Declined { key: String },
    /// A single rule file could not be pulled
    PullFailed { key: String, error: PullError },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::ModuleMissing { .. } => Severity::Warning,
            Self::RootUnreadable { .. }
            | Self::ModuleUnreadable { .. }
            | Self::PullFailed { .. } => Severity::Error,
            Self::Found { .. }
            | Self::NoModules
            | Self::NoModulesSelected
            | Self::NoRuleFiles
            | Self::NoFilesSelected
            | Self::Pulled { .. }
            | Self::UpToDate { .. }
            | Self::Declined { .. } => Severity::Info,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootUnreadable { path, source } => {
                write!(f, "Error reading rule modules in {}: {}", path.display(), source)
            }
            Self::ModuleMissing { module } => write!(f, "Module {} does not exist", module),
            Self::ModuleUnreadable { module, source } => {
                write!(f, "Error reading module {}: {}", module, source)
            }
            Self::Found { files, modules } => {
                write!(f, "Found {} rule files in {} modules", files, modules)
            }
            Self::NoModules => write!(f, "No rule modules found"),
            Self::NoModulesSelected => write!(f, "No modules selected"),
            Self::NoRuleFiles => write!(f, "No rule files found in the selected modules"),
            Self::NoFilesSelected => write!(f, "No files selected"),
            Self::Pulled { key } => write!(f, "Pulled {}", key),
            Self::UpToDate { key } => write!(f, "Skipping {} (already up to date)", key),
            Self::Declined { key } => write!(f, "Skipping {} (not overwritten)", key),
            Self::PullFailed { key, error } => write!(f, "Error pulling {}: {}", key, error),
        }
    }
}

/// Sink for diagnostics
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Prints diagnostics to the terminal
#[derive(Debug, Default)]
pub struct Console;

impl Diagnostics for Console {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => println!("{}", diagnostic),
            Severity::Warning => eprintln!("{} {}", "Warning:".yellow(), diagnostic),
            Severity::Error => eprintln!("{} {}", "Error:".red(), diagnostic),
        }
    }
}

/// Keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct Collector {
    pub diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered messages, in report order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Number of diagnostics at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

impl Diagnostics for Collector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
