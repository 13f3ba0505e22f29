pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;

// Test doubles shared with the integration tests
pub mod test_support;

pub use domain::{
    CommandTemplate, ContainerRuntime, DefinitionFile, Prompt, RunStatus, SearchPath,
};
pub use error::{ExtractError, ScanError, ShellError};
pub use infra::{AppConfig, ComposeDiscovery, DockerAdapter};
pub use services::{Picker, Selection, ShellService, StatusProber};
