use crate::domain::{ContainerRuntime, RunStatus};
use serde::Deserialize;
use serde_json::Deserializer;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Classifies a compose service as running or not.
///
/// Never fails: a runtime that cannot be reached, a non-zero exit, output
/// that is not JSON, or an empty result all classify as `NotRunning`, so
/// the not-running command is used whenever the status is unknown.
pub struct StatusProber {
    runtime: Arc<dyn ContainerRuntime>,
}

impl StatusProber {
    pub fn new(runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self { runtime }
    }

    pub fn probe(&self, compose_file: &Path, service: &str) -> RunStatus {
        match self.runtime.compose_ps(compose_file, service) {
            Ok(stdout) => parse_ps_output(&stdout),
            Err(e) => {
                debug!("Status query for {service} failed: {e:#}");
                RunStatus::NotRunning
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PsDocument {
    Many(Vec<PsEntry>),
    One(PsEntry),
}

#[derive(Debug, Deserialize)]
struct PsEntry {
    #[serde(rename = "State", default)]
    state: Option<String>,
}

/// Interprets `compose ps --format json` output.
///
/// Older compose releases print a JSON array, newer ones print one object
/// per line; both are accepted.
pub fn parse_ps_output(stdout: &str) -> RunStatus {
    let mut entries = Vec::new();

    for document in Deserializer::from_str(stdout).into_iter::<PsDocument>() {
        match document {
            Ok(PsDocument::Many(many)) => entries.extend(many),
            Ok(PsDocument::One(one)) => entries.push(one),
            Err(e) => {
                debug!("Unparseable status output: {e}");
                return RunStatus::NotRunning;
            }
        }
    }

    let running = entries
        .iter()
        .any(|entry| entry.state.as_deref() == Some("running"));

    if running {
        RunStatus::Running
    } else {
        RunStatus::NotRunning
    }
}
