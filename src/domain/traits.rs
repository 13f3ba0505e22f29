use anyhow::Result;
use std::fmt::Debug;
use std::path::Path;

/// Trait for the container runtime CLI
pub trait ContainerRuntime: Send + Sync + Debug {
    /// Query compose for the status of one service, returning raw stdout.
    ///
    /// Implementations return `Err` on launch failure or non-zero exit; the
    /// caller decides what an error means.
    fn compose_ps(&self, compose_file: &Path, service: &str) -> Result<String>;

    /// Run a command with inherited stdin/stdout/stderr and wait for it.
    fn exec_interactive(&self, argv: &[String]) -> Result<()>;
}

/// Trait for the interactive selection UI
pub trait Prompt {
    /// Ask the user to pick one of `items`.
    ///
    /// `Ok(None)` means the user aborted the selection.
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>>;
}
