//! API Facade for the application.
//!
//! High-level functions that bind the filesystem adapter to command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemRepository;
use crate::app::commands::{generate, render, verify};

pub use crate::app::commands::generate::{GenerateOutput, ManifestFailure};
pub use crate::app::commands::render::RenderOptions;
pub use crate::app::commands::verify::{ManifestReport, ManifestStatus, VerifyOutput};
pub use crate::domain::AppError;

/// Render one solution's manifest.
pub fn render(options: &RenderOptions) -> Result<String, AppError> {
    render::execute(options)
}

/// Generate manifests for the repository in the current directory.
pub fn generate() -> Result<GenerateOutput, AppError> {
    generate::execute(&FilesystemRepository::current()?)
}

/// Generate manifests for the repository at the specified path.
pub fn generate_at(root: impl Into<PathBuf>) -> Result<GenerateOutput, AppError> {
    generate::execute(&FilesystemRepository::new(root.into()))
}

/// Verify manifests for the repository in the current directory.
pub fn verify() -> Result<VerifyOutput, AppError> {
    verify::execute(&FilesystemRepository::current()?)
}

/// Verify manifests for the repository at the specified path.
pub fn verify_at(root: impl Into<PathBuf>) -> Result<VerifyOutput, AppError> {
    verify::execute(&FilesystemRepository::new(root.into()))
}
