//! Pull command - Pick individual rule files and pull them

use anyhow::Result;

use super::{summary, PullOptions};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::prompt::{self, Prompter};
use crate::rules::{self, ModuleReader, Outcome};

/// Execute the pull command
///
/// Offers the files of the requested modules (every module when none were
/// named), then pulls whatever the user picks. Returns `None` when nothing was
/// offered or nothing was picked.
pub fn execute(
    reader: &ModuleReader,
    options: &PullOptions,
    prompter: &mut dyn Prompter,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Option<Outcome>> {
    let modules = if options.modules.is_empty() {
        reader.list_modules(diagnostics)
    } else {
        options.modules.clone()
    };
    tracing::debug!(?modules, "offering rule files");

    let files = reader.list_rule_files(&modules, diagnostics);

    if files.is_empty() {
        diagnostics.report(Diagnostic::NoRuleFiles);
        return Ok(None);
    }

    let selected = prompt::select_files(prompter, &files)?;

    if selected.is_empty() {
        diagnostics.report(Diagnostic::NoFilesSelected);
        return Ok(None);
    }

    let outcome =
        rules::pull_rule_files(&selected, options.target.as_deref(), prompter, diagnostics)?;

    println!("{}", summary::format_keys(&outcome));

    Ok(Some(outcome))
}
