//! User interaction for collecting plugin metadata.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Capability for asking the user a single free-text question.
///
/// Input collection takes this as an injected dependency so tests can supply
/// canned answers instead of driving a real terminal.
pub trait Prompter {
    /// Asks one question and returns the entered value.
    ///
    /// # Arguments
    /// * `prompt` - Question text shown to the user
    /// * `default` - Value used when the user submits an empty answer;
    ///   `None` permits an empty answer instead
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Prompter backed by dialoguer's terminal input.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);

        input = match default {
            Some(default) => input.default(default.to_string()),
            None => input.allow_empty(true),
        };

        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }
}
