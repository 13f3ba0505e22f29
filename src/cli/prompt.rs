use crate::domain::Prompt;
use anyhow::{Context, Result};
use dialoguer::Select;
use std::io::ErrorKind;

/// Terminal prompt; Esc, q or an interrupted read count as an abort.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for DialoguerPrompt {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
        let selection = Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt();

        match selection {
            Ok(choice) => Ok(choice),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e).with_context(|| format!("showing selection {title:?}")),
        }
    }
}
