//! Interactive selection of modules and rule files
//!
//! All interaction goes through the [`Prompter`] trait: one blocking
//! request/response per call. [`TerminalPrompter`] talks to the user;
//! tests drive the same code with canned answers.

mod terminal;

#[cfg(test)]
pub(crate) mod scripted;

use anyhow::Result;
use std::collections::BTreeMap;

pub use terminal::TerminalPrompter;

use crate::rules::RuleFile;

/// Page size of the module prompt
pub const MODULE_PAGE_SIZE: usize = 10;

/// Page size of the file prompt
pub const FILE_PAGE_SIZE: usize = 15;

/// One line of a multi-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Non-selectable line (group header or spacer)
    Separator(String),
    /// Selectable line
    Item { label: String, checked: bool },
}

impl Choice {
    pub fn item(label: impl Into<String>, checked: bool) -> Self {
        Self::Item {
            label: label.into(),
            checked,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Item { .. })
    }
}

/// A multi-select request
#[derive(Debug, Clone)]
pub struct SelectPrompt<'a> {
    pub message: &'a str,
    pub choices: &'a [Choice],
    pub page_size: usize,
}

/// Capability to ask the user things
pub trait Prompter {
    /// Ask the user to check any number of choices; returns indices into `choices`
    fn multi_select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Vec<usize>>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Let the user pick modules, pre-checking those in `preselected`
///
/// The selection keeps the order in which modules were presented.
pub fn select_modules<S: AsRef<str>>(
    prompter: &mut dyn Prompter,
    available: &[String],
    preselected: &[S],
) -> Result<Vec<String>> {
    if available.is_empty() {
        return Ok(Vec::new());
    }

    let choices: Vec<Choice> = available
        .iter()
        .map(|module| {
            let checked = preselected.iter().any(|p| p.as_ref() == module);
            Choice::item(format!("📦 {}", module), checked)
        })
        .collect();

    let picked = prompter.multi_select(&SelectPrompt {
        message: "Select rule modules to pull:",
        choices: &choices,
        page_size: MODULE_PAGE_SIZE,
    })?;

    Ok(resolve(&picked, &choices)
        .map(|i| available[i].clone())
        .collect())
}

/// Let the user pick rule files, grouped under module headers
///
/// Groups are shown sorted by module name; files keep their given order within
/// a group. The returned files are the offered records, in display order.
pub fn select_files(prompter: &mut dyn Prompter, files: &[RuleFile]) -> Result<Vec<RuleFile>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_module: BTreeMap<&str, Vec<&RuleFile>> = BTreeMap::new();
    for file in files {
        by_module.entry(file.module.as_str()).or_default().push(file);
    }

    // `slots` runs parallel to `choices`; separators have no file
    let mut choices = Vec::new();
    let mut slots: Vec<Option<&RuleFile>> = Vec::new();

    for (module, group) in by_module {
        if !choices.is_empty() {
            choices.push(Choice::Separator(" ".to_string()));
            slots.push(None);
        }
        choices.push(Choice::Separator(format!("> {}", module)));
        slots.push(None);

        for file in group {
            choices.push(Choice::item(format!("📄 {}", file.name), false));
            slots.push(Some(file));
        }
    }

    let picked = prompter.multi_select(&SelectPrompt {
        message: "Select rule files to pull:",
        choices: &choices,
        page_size: FILE_PAGE_SIZE,
    })?;

    Ok(resolve(&picked, &choices)
        .filter_map(|i| slots[i])
        .cloned()
        .collect())
}

/// Sort, de-duplicate and drop indices that are out of range or not selectable
fn resolve<'a>(picked: &[usize], choices: &'a [Choice]) -> impl Iterator<Item = usize> + 'a {
    let mut picked = picked.to_vec();
    picked.sort_unstable();
    picked.dedup();
    picked
        .into_iter()
        .filter(|&i| choices.get(i).is_some_and(Choice::is_selectable))
}
