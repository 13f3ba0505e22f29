use std::fmt;
use std::path::{Path, PathBuf};

/// Basenames recognized as compose definition files (exact, case-sensitive).
pub const DEFINITION_FILE_NAMES: [&str; 4] = [
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

pub fn is_definition_file_name(name: &str) -> bool {
    DEFINITION_FILE_NAMES.contains(&name)
}

/// A configured base directory, normalized: leading `~` expanded and a single
/// trailing `/` removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchPath(String);

impl SearchPath {
    pub fn new(raw: &str) -> Self {
        let expanded = shellexpand::tilde(raw);
        let trimmed = expanded.strip_suffix('/').unwrap_or(&expanded[..]);
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file believed to be a compose definition. Content is never cached; it is
/// read again every time services are listed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DefinitionFile {
    pub path: PathBuf,
}

impl DefinitionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as handed to the UI and substituted for `%COMPOSE`.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Display for DefinitionFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
