//! Environment mode and filesystem layout

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Name of the directory holding rule modules
pub const RULES_DIR: &str = "rules";

/// Environment variable selecting the layout mode
pub const ENV_VAR: &str = "PULLRULE_ENV";

/// Where the bundled rules live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Environment {
    /// Rules beside the working directory (running from a checkout)
    Development,
    /// Rules beside the installed executable
    #[default]
    Production,
}

/// Process-wide directory layout, computed once per invocation
#[derive(Debug, Clone)]
pub struct Layout {
    environment: Environment,
    install_dir: PathBuf,
    working_dir: PathBuf,
}

impl Layout {
    pub fn new(
        environment: Environment,
        install_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            environment,
            install_dir: install_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Detect the layout of the running process
    ///
    /// The installation directory is the directory containing the (canonicalized)
    /// executable, so a symlinked binary still finds the rules it was shipped with.
    pub fn detect(environment: Environment) -> Result<Self> {
        let exe = std::env::current_exe().context("Could not determine executable path")?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let install_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .context("Executable has no parent directory")?;
        let working_dir = std::env::current_dir().context("Failed to get current directory")?;

        Ok(Self::new(environment, install_dir, working_dir))
    }

    /// Get the rules root for this layout
    /// - Development: <working dir>/rules
    /// - Production: <install dir>/rules
    pub fn rules_dir(&self) -> PathBuf {
        match self.environment {
            Environment::Development => self.working_dir.join(RULES_DIR),
            Environment::Production => self.install_dir.join(RULES_DIR),
        }
    }
}

/// Get the directory rule files are pulled into (<base>/.cursor/rules)
pub fn target_dir(base: &Path) -> PathBuf {
    base.join(".cursor").join("rules")
}
