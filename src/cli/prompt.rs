//! Interactive prompts and confirmations

use dialoguer::{Confirm, Input};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("no answer available for prompt: {0}")]
    NoAnswer(String),
}

/// Source of answers to interactive questions
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Asks for a line of text, starting from `initial`.
    fn input(&self, message: &str, initial: &str) -> Result<String, PromptError>;
}

/// Prompter reading from the user's terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn input(&self, message: &str, initial: &str) -> Result<String, PromptError> {
        Ok(Input::<String>::new()
            .with_prompt(message)
            .default(initial.to_string())
            .interact_text()?)
    }
}

/// Prompter answering from a fixed script, for tests
#[cfg(test)]
pub struct ScriptedPrompter {
    confirms: std::cell::RefCell<std::collections::VecDeque<bool>>,
    inputs: std::cell::RefCell<std::collections::VecDeque<String>>,
    asked: std::cell::RefCell<Vec<(String, String)>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            confirms: Default::default(),
            inputs: Default::default(),
            asked: Default::default(),
        }
    }

    pub fn with_confirms(confirms: &[bool]) -> Self {
        let prompter = Self::new();
        prompter.confirms.borrow_mut().extend(confirms.iter().copied());
        prompter
    }

    pub fn with_inputs(inputs: &[&str]) -> Self {
        let prompter = Self::new();
        prompter
            .inputs
            .borrow_mut()
            .extend(inputs.iter().map(|s| s.to_string()));
        prompter
    }

    /// Messages asked so far, paired with the initial value offered
    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.borrow().clone()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        self.asked
            .borrow_mut()
            .push((message.to_string(), default.to_string()));
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::NoAnswer(message.to_string()))
    }

    fn input(&self, message: &str, initial: &str) -> Result<String, PromptError> {
        self.asked
            .borrow_mut()
            .push((message.to_string(), initial.to_string()));
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::NoAnswer(message.to_string()))
    }
}
