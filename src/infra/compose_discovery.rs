use crate::domain::{DefinitionFile, SearchPath, is_definition_file_name};
use crate::error::{ScanError, ShellError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Discovers compose files below the configured base paths
pub struct ComposeDiscovery {
    search_paths: Vec<SearchPath>,
    max_depth: usize,
}

impl ComposeDiscovery {
    /// Creates a new ComposeDiscovery instance
    ///
    /// # Arguments
    /// * `search_paths` - Base directories, scanned in order
    /// * `max_depth` - Scan depth; values below 1 are treated as 1
    pub fn new(search_paths: Vec<SearchPath>, max_depth: usize) -> Self {
        Self {
            search_paths,
            max_depth: max_depth.max(1),
        }
    }

    /// Lists the compose files of every base path
    ///
    /// A base path that cannot be scanned contributes nothing. Finding no
    /// file at all is an error carrying every searched path.
    pub fn discover_all(&self) -> Result<Vec<DefinitionFile>, ShellError> {
        let mut files = Vec::new();

        for base in &self.search_paths {
            match scan_dir(base.as_path(), self.max_depth) {
                Ok(found) => {
                    debug!("{} compose file(s) in {}", found.len(), base);
                    files.extend(found.into_iter().map(DefinitionFile::new));
                }
                Err(e) => debug!("Skipping {:?}: {}", base.as_str(), e),
            }
        }

        if files.is_empty() {
            return Err(ShellError::NoDefinitionFiles {
                searched: self
                    .search_paths
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect(),
            });
        }

        info!("Found {} compose file(s)", files.len());
        Ok(files)
    }

    pub fn search_paths(&self) -> &[SearchPath] {
        &self.search_paths
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Walks `base` and returns every recognized compose file.
///
/// A file is reported when its path relative to `base` has fewer than
/// `max_depth` separators; directories at that depth are not entered.
/// Symlinked directories are not followed.
pub fn scan_dir(base: &Path, max_depth: usize) -> Result<Vec<PathBuf>, ScanError> {
    if !base.is_dir() {
        return Err(ScanError::NotADirectory(base.to_path_buf()));
    }

    let mut found = Vec::new();
    walk(base, 0, max_depth.max(1), &mut found)?;

    if found.is_empty() {
        return Err(ScanError::NoDefinitionFiles(base.to_path_buf()));
    }

    Ok(found)
}

fn walk(
    dir: &Path,
    level: usize,
    max_depth: usize,
    found: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_type = entry.file_type().map_err(io_err)?;
        let path = entry.path();

        if file_type.is_dir() {
            if level + 1 < max_depth {
                walk(&path, level + 1, max_depth, found)?;
            }
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(is_definition_file_name);
        if matches {
            found.push(path);
        }
    }

    Ok(())
}
