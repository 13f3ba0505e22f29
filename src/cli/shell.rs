use crate::cli::DialoguerPrompt;
use crate::domain::{ContainerRuntime, Prompt};
use crate::infra::{AppConfig, ComposeDiscovery, DockerAdapter};
use crate::services::{Picker, ShellService};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Full interactive flow: discover, pick, probe, attach.
pub fn run(
    config: &AppConfig,
    prompt: &mut dyn Prompt,
    runtime: Arc<dyn ContainerRuntime>,
) -> Result<()> {
    let discovery = ComposeDiscovery::new(config.search_paths.clone(), config.max_depth);
    debug!(
        "Searching {:?} (max depth {})",
        discovery.search_paths(),
        discovery.max_depth()
    );

    let files = discovery.discover_all()?;

    let selection = Picker::new(prompt).pick(&files)?;

    let shell = ShellService::new(
        runtime,
        config.exec_command.clone(),
        config.exec_command_not_running.clone(),
    );
    shell.attach(&selection.file, &selection.service)
}

/// Runs the flow with the process environment, the terminal and the
/// configured runtime binary.
pub fn run_from_env() -> Result<()> {
    let config = AppConfig::from_env();
    let runtime = Arc::new(DockerAdapter::new(config.runtime.clone()));
    let mut prompt = DialoguerPrompt::new();

    run(&config, &mut prompt, runtime)
}
