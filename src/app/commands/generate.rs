//! Generate command.
//!
//! Writes one manifest per discovered solution and removes generated files
//! whose solution no longer exists. A failure on one file is recorded and the
//! remaining files are still processed.

use serde::Serialize;
use tracing::{info, warn};

use super::plan::{display_path, plan_manifests};
use crate::domain::{AppError, CloudBuildConfig, load_project_config};
use crate::ports::RepositoryFilesystem;

const SCHEMA_VERSION: u32 = 1;

/// Output of the generate command.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Schema version for output format stability.
    pub schema_version: u32,
    /// Manifests written, as paths.
    pub written: Vec<String>,
    /// Stale manifests removed, as paths.
    pub removed: Vec<String>,
    /// Manifests that could not be written or removed.
    pub failed: Vec<ManifestFailure>,
}

impl GenerateOutput {
    /// True when every write and removal succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A manifest the command could not write or remove.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestFailure {
    pub solution: String,
    pub path: String,
    pub reason: String,
}

impl ManifestFailure {
    fn new(manifest: &CloudBuildConfig, err: &AppError) -> Self {
        warn!(solution = %manifest.solution, %err, "manifest operation failed");
        Self {
            solution: manifest.solution.to_string(),
            path: display_path(manifest),
            reason: err.to_string(),
        }
    }
}

/// Execute the generate command.
pub fn execute(repository: &impl RepositoryFilesystem) -> Result<GenerateOutput, AppError> {
    let config = load_project_config(repository)?;
    let plan = plan_manifests(repository, &config)?;

    let mut written = Vec::with_capacity(plan.manifests.len());
    let mut failed = Vec::new();
    for manifest in &plan.manifests {
        match manifest.save() {
            Ok(()) => written.push(display_path(manifest)),
            Err(err) => failed.push(ManifestFailure::new(manifest, &err)),
        }
    }

    let mut removed = Vec::with_capacity(plan.stale.len());
    for stale in &plan.stale {
        match stale.remove() {
            Ok(()) => {
                info!(solution = %stale.solution, "removed stale manifest");
                removed.push(display_path(stale));
            }
            Err(err) => failed.push(ManifestFailure::new(stale, &err)),
        }
    }

    Ok(GenerateOutput { schema_version: SCHEMA_VERSION, written, removed, failed })
}
