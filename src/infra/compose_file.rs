use crate::error::ExtractError;
use serde_yml::Value;
use std::fs;
use std::path::Path;

/// Reads a compose file and lists the keys of its top-level `services`
/// mapping, sorted.
pub fn list_services(path: &Path) -> Result<Vec<String>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_services(&content).map_err(|err| err.at(path))
}

/// Parses compose content; errors carry an empty path until `at` is applied.
pub fn parse_services(content: &str) -> Result<Vec<String>, ExtractError> {
    let document: Value =
        serde_yml::from_str(content).map_err(|source| ExtractError::Malformed {
            path: Default::default(),
            source,
        })?;

    let root = document
        .as_mapping()
        .ok_or_else(|| ExtractError::NotAMapping(Default::default()))?;

    let services = root
        .get("services")
        .and_then(Value::as_mapping)
        .ok_or_else(|| ExtractError::MissingServices(Default::default()))?;

    let mut names: Vec<String> = services.keys().filter_map(key_to_string).collect();
    names.sort();
    Ok(names)
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ExtractError {
    fn at(self, path: &Path) -> Self {
        let path = path.to_path_buf();
        match self {
            Self::Unreadable { source, .. } => Self::Unreadable { path, source },
            Self::Malformed { source, .. } => Self::Malformed { path, source },
            Self::NotAMapping(_) => Self::NotAMapping(path),
            Self::MissingServices(_) => Self::MissingServices(path),
        }
    }
}
