//! List command - Pick whole modules and pull every rule file in them

use anyhow::Result;

use super::{summary, PullOptions};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::prompt::{self, Prompter};
use crate::rules::{self, ModuleReader, Outcome};

/// Execute the list command
///
/// Modules named in `options` start out checked.
pub fn execute(
    reader: &ModuleReader,
    options: &PullOptions,
    prompter: &mut dyn Prompter,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Option<Outcome>> {
    let available = reader.list_modules(diagnostics);

    if available.is_empty() {
        diagnostics.report(Diagnostic::NoModules);
        return Ok(None);
    }

    let selected = prompt::select_modules(prompter, &available, &options.modules)?;

    if selected.is_empty() {
        diagnostics.report(Diagnostic::NoModulesSelected);
        return Ok(None);
    }

    let outcome = rules::pull_all_from_modules(
        reader,
        &selected,
        options.target.as_deref(),
        prompter,
        diagnostics,
    )?;

    if let Some(outcome) = &outcome {
        println!("{}", summary::format_counts(outcome));
    }

    Ok(outcome)
}
