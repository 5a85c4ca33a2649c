//! Pull rule files into `<base>/.cursor/rules`
//!
//! Each file is reconciled independently against whatever already sits in the
//! target directory:
//! - absent target: copy
//! - identical content: skip without asking
//! - different content: ask before overwriting (default no)
//!
//! A failure for one file is recorded and the batch moves on.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ModuleReader, Outcome, RuleFile};
use crate::config;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::prompt::Prompter;

/// Why a single rule file could not be pulled
#[derive(Debug, thiserror::Error)]
pub enum PullError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("overwrite prompt failed: {0:#}")]
    Prompt(anyhow::Error),
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reconciled {
    Copied,
    UpToDate,
    Declined,
}

/// Pull the given rule files into `<base_dir or cwd>/.cursor/rules`
///
/// The target directory is created if needed; failing to create it (or to find
/// the current directory) is the only error returned. Everything else ends up
/// in the returned [`Outcome`].
pub fn pull_rule_files(
    files: &[RuleFile],
    base_dir: Option<&Path>,
    prompter: &mut dyn Prompter,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Outcome> {
    let base = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let target_dir = config::target_dir(&base);

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create: {}", target_dir.display()))?;

    let mut outcome = Outcome::default();

    for file in files {
        let key = file.key();

        match reconcile(file, &target_dir, prompter) {
            Ok(Reconciled::Copied) => {
                diagnostics.report(Diagnostic::Pulled { key: key.clone() });
                outcome.success.push(key);
            }
            Ok(Reconciled::UpToDate) => {
                diagnostics.report(Diagnostic::UpToDate { key: key.clone() });
                outcome.skipped.push(key);
            }
            Ok(Reconciled::Declined) => {
                diagnostics.report(Diagnostic::Declined { key: key.clone() });
                outcome.skipped.push(key);
            }
            Err(error) => {
                tracing::debug!(key = %key, error = %error, "pull failed");
                diagnostics.report(Diagnostic::PullFailed {
                    key: key.clone(),
                    error,
                });
                outcome.failed.push(key);
            }
        }
    }

    Ok(outcome)
}

/// Pull every rule file in the given modules
///
/// Returns `Ok(None)` when the modules hold no rule files at all, which is
/// distinct from an outcome where nothing was copied.
pub fn pull_all_from_modules<S: AsRef<str>>(
    reader: &ModuleReader,
    modules: &[S],
    base_dir: Option<&Path>,
    prompter: &mut dyn Prompter,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Option<Outcome>> {
    let files = reader.list_rule_files(modules, diagnostics);

    if files.is_empty() {
        diagnostics.report(Diagnostic::NoRuleFiles);
        return Ok(None);
    }

    diagnostics.report(Diagnostic::Found {
        files: files.len(),
        modules: modules.len(),
    });

    pull_rule_files(&files, base_dir, prompter, diagnostics).map(Some)
}

fn reconcile(
    file: &RuleFile,
    target_dir: &Path,
    prompter: &mut dyn Prompter,
) -> Result<Reconciled, PullError> {
    let target = target_dir.join(&file.name);

    if target.exists() {
        let source_text = read_text(&file.path)?;
        let target_text = read_text(&target)?;

        if source_text == target_text {
            return Ok(Reconciled::UpToDate);
        }

        let message = format!("File {} already exists. Overwrite?", file.name);
        let overwrite = prompter
            .confirm(&message, false)
            .map_err(PullError::Prompt)?;

        if !overwrite {
            return Ok(Reconciled::Declined);
        }
    }

    fs::copy(&file.path, &target).map_err(|source| PullError::Copy {
        from: file.path.clone(),
        to: target.clone(),
        source,
    })?;
    tracing::debug!(from = %file.path.display(), to = %target.display(), "copied");

    Ok(Reconciled::Copied)
}

/// Read a file as text, replacing invalid UTF-8
///
/// No line-ending or whitespace normalization: `a\r\n` and `a\n` differ.
fn read_text(path: &Path) -> Result<String, PullError> {
    let bytes = fs::read(path).map_err(|source| PullError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
