use crate::domain::{DefinitionFile, Prompt};
use crate::error::ShellError;
use crate::infra::compose_file::list_services;
use anyhow::{Result, anyhow};
use tracing::debug;

pub const FILE_PROMPT: &str = "Docker Compose YAML";
pub const BACK_OPTION: &str = "[back]";
pub const NO_SERVICES_OPTION: &str = "(no services defined)";

/// The file and service the user settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub file: DefinitionFile,
    pub service: String,
}

/// What the service step offers for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceChoices {
    Services(Vec<String>),
    /// Extraction failed; shown as a single `Error: ...` entry.
    Error(String),
}

impl ServiceChoices {
    /// Reads the file from disk; nothing is cached between calls.
    pub fn load(file: &DefinitionFile) -> Self {
        match list_services(file.path()) {
            Ok(services) => Self::Services(services),
            Err(e) => {
                debug!("Listing services failed: {e}");
                Self::Error(e.to_string())
            }
        }
    }

    /// Menu entries, always ending with the back entry.
    pub fn items(&self) -> Vec<String> {
        let mut items = match self {
            Self::Services(services) if services.is_empty() => {
                vec![NO_SERVICES_OPTION.to_string()]
            }
            Self::Services(services) => services.clone(),
            Self::Error(message) => vec![format!("Error: {message}")],
        };
        items.push(BACK_OPTION.to_string());
        items
    }

    /// The service behind menu entry `index`, if it is a real service.
    pub fn service_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Services(services) => services.get(index).map(String::as_str),
            Self::Error(_) => None,
        }
    }
}

/// Drives the two-step file → service selection.
pub struct Picker<'a> {
    prompt: &'a mut dyn Prompt,
}

impl<'a> Picker<'a> {
    pub fn new(prompt: &'a mut dyn Prompt) -> Self {
        Self { prompt }
    }

    /// Asks for a file, then for one of its services.
    ///
    /// The service list is re-read every time a file is chosen. Picking the
    /// back entry, an error entry or the empty placeholder returns to the file
    /// list. Aborting either step yields `ShellError::Aborted`.
    pub fn pick(&mut self, files: &[DefinitionFile]) -> Result<Selection> {
        let file_items: Vec<String> = files.iter().map(DefinitionFile::display_path).collect();

        loop {
            let index = self
                .prompt
                .select(FILE_PROMPT, &file_items)?
                .ok_or(ShellError::Aborted)?;
            let file = files
                .get(index)
                .ok_or_else(|| anyhow!("file selection {index} out of range"))?;

            let choices = ServiceChoices::load(file);
            let items = choices.items();
            let title = format!("Services in {}", file);

            let index = self
                .prompt
                .select(&title, &items)?
                .ok_or(ShellError::Aborted)?;
            if index >= items.len() {
                return Err(anyhow!("service selection {index} out of range"));
            }

            match choices.service_at(index) {
                Some(service) => {
                    return Ok(Selection {
                        file: file.clone(),
                        service: service.to_string(),
                    });
                }
                None => debug!("Back to file selection"),
            }
        }
    }
}
