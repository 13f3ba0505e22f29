use std::path::PathBuf;
use thiserror::Error;

/// Why a single base path contributed no definition files.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("error while scanning directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no docker compose files found in {0}")]
    NoDefinitionFiles(PathBuf),
}

/// Why the services of a definition file could not be listed.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("{0} does not contain a key/value document")]
    NotAMapping(PathBuf),

    #[error("{0} has no \"services\" mapping")]
    MissingServices(PathBuf),
}

/// Outcomes that end an invocation and that `main` maps to exit codes.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no docker compose YAML found in {}", .searched.join(" "))]
    NoDefinitionFiles { searched: Vec<String> },

    #[error("selection aborted by user")]
    Aborted,

    #[error("command template {0:?} is empty")]
    EmptyCommand(String),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", .code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    CommandFailed { program: String, code: Option<i32> },
}

impl ShellError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Aborted => 130,
            _ => 1,
        }
    }
}
