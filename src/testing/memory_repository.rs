//! Test double for `RepositoryFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::identities::validation::validate_contained_relative_path;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Directories exist implicitly as prefixes of stored file paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    files: BTreeMap<String, String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    fn dir_prefix(path: &str) -> String {
        if path.ends_with('/') { path.to_string() } else { format!("{}/", path) }
    }
}

impl RepositoryFilesystem for MemoryRepository {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::file_access(
                "read",
                path,
                io::Error::new(io::ErrorKind::NotFound, "Mock file not found"),
            )
        })
    }

    fn list_dir(&self, path: &str) -> Result<Vec<PathBuf>, AppError> {
        if !self.is_dir(path) {
            return Err(AppError::file_access(
                "list",
                path,
                io::Error::new(io::ErrorKind::NotFound, "Mock directory not found"),
            ));
        }

        let prefix = Self::dir_prefix(path);
        let mut results = BTreeSet::new();
        for key in self.files.keys() {
            if let Some(suffix) = key.strip_prefix(&prefix) {
                let entry = suffix.split('/').next().unwrap_or(suffix);
                results.insert(Path::new(path).join(entry));
            }
        }

        Ok(results.into_iter().collect())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = Self::dir_prefix(path);
        self.files.keys().any(|k| k.starts_with(&prefix))
    }

    fn resolve_path(&self, path: &str) -> Result<PathBuf, AppError> {
        if !validate_contained_relative_path(path) {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        Ok(Path::new("/repo").join(path))
    }
}
