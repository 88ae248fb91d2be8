//! Repository-level filesystem reads.
//!
//! Discovery and configuration loading go through this port so they can be
//! exercised against an in-memory tree. Generated manifests are written by
//! `CloudBuildConfig` itself at the resolved path.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for read-only repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// List entries in a directory (returns paths relative to root, sorted).
    fn list_dir(&self, path: &str) -> Result<Vec<PathBuf>, AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Resolve a relative path to an absolute path within the repository root.
    fn resolve_path(&self, path: &str) -> Result<PathBuf, AppError>;
}
