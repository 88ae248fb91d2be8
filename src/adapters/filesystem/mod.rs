//! Filesystem adapter for the `RepositoryFilesystem` port.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed repository rooted at a directory.
///
/// Path operations are validated against the root to prevent directory
/// traversal.
#[derive(Debug, Clone)]
pub struct FilesystemRepository {
    root: PathBuf,
}

impl FilesystemRepository {
    /// Create a repository rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a repository rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Fail unless `path`, once `.` and `..` are resolved, stays under the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let absolute = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        if normalize_path(&absolute).starts_with(normalize_path(&self.root)) {
            Ok(())
        } else {
            Err(AppError::PathTraversal(path.display().to_string()))
        }
    }

    /// Root-relative `path` resolved and checked against the root.
    fn checked_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let target = self.root.join(path);
        self.validate_path_within_root(&target)?;
        Ok(target)
    }
}

/// Resolve `.` and `..` without touching the filesystem, so paths through
/// directories that do not exist yet are still checked.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut normalized, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
        normalized
    })
}
