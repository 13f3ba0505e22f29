use crate::domain::ContainerRuntime;
use crate::error::ShellError;
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Talks to the compose CLI of a docker-compatible runtime.
#[derive(Debug, Clone)]
pub struct DockerAdapter {
    binary: String,
}

impl DockerAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for DockerAdapter {
    fn default() -> Self {
        Self::new("docker")
    }
}

impl ContainerRuntime for DockerAdapter {
    fn compose_ps(&self, compose_file: &Path, service: &str) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("compose")
            .arg("-f")
            .arg(compose_file)
            .args(["ps", service, "--format", "json"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("checking status of {service} in {:?}", compose_file))?;

        if !output.status.success() {
            bail!("{} compose ps returned status {:?}", self.binary, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn exec_interactive(&self, argv: &[String]) -> Result<()> {
        let Some((program, args)) = argv.split_first() else {
            bail!(ShellError::EmptyCommand(String::new()));
        };

        debug!("Spawning {program} with {} argument(s)", args.len());
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ShellError::Launch {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            bail!(ShellError::CommandFailed {
                program: program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
