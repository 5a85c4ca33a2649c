//! Terminal prompts backed by dialoguer

use anyhow::{Context, Result};
use dialoguer::{Confirm, MultiSelect};
use owo_colors::OwoColorize;

use super::{Choice, Prompter, SelectPrompt};

/// Prompts on the controlling terminal
///
/// dialoguer has no separator rows, so separators are rendered as styled rows;
/// checking one has no effect on the result.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn multi_select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Vec<usize>> {
        let items: Vec<(String, bool)> = prompt
            .choices
            .iter()
            .map(|choice| match choice {
                Choice::Separator(label) => (label.bright_white().bold().to_string(), false),
                Choice::Item { label, checked } => (label.clone(), *checked),
            })
            .collect();

        MultiSelect::new()
            .with_prompt(prompt.message)
            .items_checked(&items)
            .max_length(prompt.page_size)
            .interact()
            .context("Selection prompt failed")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .context("Confirmation prompt failed")
    }
}
