//! Prompter that replays canned answers and records what it was asked

use anyhow::{bail, Result};
use std::collections::VecDeque;

use super::{Choice, Prompter, SelectPrompt};

/// A recorded multi-select request
#[derive(Debug, Clone)]
pub struct AskedSelect {
    pub message: String,
    pub choices: Vec<Choice>,
    pub page_size: usize,
}

#[derive(Debug, Default)]
pub struct Scripted {
    selections: VecDeque<Vec<usize>>,
    confirmations: VecDeque<bool>,
    selects: Vec<AskedSelect>,
    confirms: Vec<(String, bool)>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next multi-select
    pub fn select(mut self, indices: Vec<usize>) -> Self {
        self.selections.push_back(indices);
        self
    }

    /// Queue the answer to the next confirmation
    pub fn confirm(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn selects_asked(&self) -> &[AskedSelect] {
        &self.selects
    }

    /// Messages of the confirmations asked so far
    pub fn confirms_asked(&self) -> Vec<String> {
        self.confirms.iter().map(|(message, _)| message.clone()).collect()
    }

    /// Default answers offered with each confirmation
    pub fn confirm_defaults(&self) -> Vec<bool> {
        self.confirms.iter().map(|(_, default)| *default).collect()
    }
}

impl Prompter for Scripted {
    fn multi_select(&mut self, prompt: &SelectPrompt<'_>) -> Result<Vec<usize>> {
        self.selects.push(AskedSelect {
            message: prompt.message.to_string(),
            choices: prompt.choices.to_vec(),
            page_size: prompt.page_size,
        });
        match self.selections.pop_front() {
            Some(indices) => Ok(indices),
            None => bail!("no scripted selection for: {}", prompt.message),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.confirms.push((message.to_string(), default));
        match self.confirmations.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted confirmation for: {}", message),
        }
    }
}
