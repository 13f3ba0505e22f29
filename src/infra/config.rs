use crate::domain::{CommandTemplate, SearchPath};
use std::collections::HashMap;
use tracing::warn;

pub const BASE_PATH_ENV: &str = "CONTAINER_BASE_PATH";
pub const MAX_DEPTH_ENV: &str = "CONTAINER_BASE_PATH_MAX_DEPTH";
pub const EXEC_COMMAND_ENV: &str = "CONTAINER_EXEC_COMMAND";
pub const EXEC_COMMAND_NOT_RUNNING_ENV: &str = "CONTAINER_EXEC_COMMAND_NOT_RUNNING";
pub const RUNTIME_ENV: &str = "CONTAINER_RUNTIME";

pub const DEFAULT_BASE_PATH: &str = "/var/container:/srv/container";
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_EXEC_COMMAND: &str =
    "docker compose -f %COMPOSE exec --user root %SERVICE /bin/sh";
pub const DEFAULT_EXEC_COMMAND_NOT_RUNNING: &str =
    "docker compose -f %COMPOSE exec --user root %SERVICE /bin/sh";
pub const DEFAULT_RUNTIME: &str = "docker";

/// Settings for one invocation, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub search_paths: Vec<SearchPath>,
    pub max_depth: usize,
    pub exec_command: CommandTemplate,
    pub exec_command_not_running: CommandTemplate,
    pub runtime: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let base_path = get(BASE_PATH_ENV).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        Self {
            search_paths: resolve_search_paths(&base_path),
            max_depth: parse_max_depth(get(MAX_DEPTH_ENV).as_deref()),
            exec_command: CommandTemplate::new(
                get(EXEC_COMMAND_ENV).unwrap_or_else(|| DEFAULT_EXEC_COMMAND.to_string()),
            ),
            exec_command_not_running: CommandTemplate::new(
                get(EXEC_COMMAND_NOT_RUNNING_ENV)
                    .unwrap_or_else(|| DEFAULT_EXEC_COMMAND_NOT_RUNNING.to_string()),
            ),
            runtime: get(RUNTIME_ENV).unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
        }
    }

    /// Convenience for tests and embedding: configuration from a key/value map.
    pub fn from_map(values: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| values.get(key).cloned())
    }
}

/// Splits a colon-separated list into unique, normalized search paths,
/// keeping first-occurrence order. Empty segments are kept.
pub fn resolve_search_paths(raw: &str) -> Vec<SearchPath> {
    let mut paths: Vec<SearchPath> = Vec::new();

    for segment in raw.split(':') {
        let path = SearchPath::new(segment);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    paths
}

/// Parses the scan depth, clamping to at least 1. Unparseable input warns
/// and falls back to the default.
pub fn parse_max_depth(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_MAX_DEPTH;
    };

    match raw.parse::<i64>() {
        Ok(depth) if depth < 1 => 1,
        Ok(depth) => usize::try_from(depth).unwrap_or(usize::MAX),
        Err(_) => {
            warn!(
                "Invalid value for {}: {}. Using default: {}",
                MAX_DEPTH_ENV, raw, DEFAULT_MAX_DEPTH
            );
            DEFAULT_MAX_DEPTH
        }
    }
}
