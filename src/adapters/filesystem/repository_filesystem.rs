//! `RepositoryFilesystem` implementation for `FilesystemRepository`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemRepository;

impl RepositoryFilesystem for FilesystemRepository {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let target = self.checked_path(path)?;
        fs::read_to_string(&target).map_err(|e| AppError::file_access("read", target, e))
    }

    fn list_dir(&self, path: &str) -> Result<Vec<PathBuf>, AppError> {
        let target = self.checked_path(path)?;
        let mut entries = fs::read_dir(&target)
            .map_err(|e| AppError::file_access("list", &target, e))?
            .map(|entry| -> Result<PathBuf, AppError> {
                let absolute = entry?.path();
                Ok(absolute.strip_prefix(&self.root).map(Path::to_path_buf).unwrap_or(absolute))
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();
        Ok(entries)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.checked_path(path).is_ok_and(|target| target.exists())
    }

    fn is_dir(&self, path: &str) -> bool {
        self.checked_path(path).is_ok_and(|target| target.is_dir())
    }

    fn resolve_path(&self, path: &str) -> Result<PathBuf, AppError> {
        self.checked_path(path)
    }
}
