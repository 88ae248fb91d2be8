//! Verify command.
//!
//! Reports, per solution, whether the generated manifest on disk matches a
//! fresh rendering. Stale manifests of removed solutions are reported too.
//! A manifest that cannot be checked is reported as an error on its own line.

use serde::Serialize;
use tracing::warn;

use super::plan::{display_path, plan_manifests};
use crate::domain::{AppError, CloudBuildConfig, load_project_config};
use crate::ports::RepositoryFilesystem;

const SCHEMA_VERSION: u32 = 1;

/// State of one generated manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestStatus {
    UpToDate,
    Drifted,
    Missing,
    Stale,
    Error,
}

impl ManifestStatus {
    pub fn label(self) -> &'static str {
        match self {
            ManifestStatus::UpToDate => "up-to-date",
            ManifestStatus::Drifted => "drifted",
            ManifestStatus::Missing => "missing",
            ManifestStatus::Stale => "stale",
            ManifestStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestReport {
    pub solution: String,
    pub path: String,
    pub status: ManifestStatus,
    /// Why the manifest could not be checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output of the verify command.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOutput {
    /// Schema version for output format stability.
    pub schema_version: u32,
    pub manifests: Vec<ManifestReport>,
}

impl VerifyOutput {
    /// True when every manifest is up to date and nothing is stale.
    pub fn is_clean(&self) -> bool {
        self.manifests.iter().all(|m| m.status == ManifestStatus::UpToDate)
    }
}

/// Execute the verify command.
pub fn execute(repository: &impl RepositoryFilesystem) -> Result<VerifyOutput, AppError> {
    let config = load_project_config(repository)?;
    let plan = plan_manifests(repository, &config)?;

    let mut manifests = Vec::with_capacity(plan.manifests.len() + plan.stale.len());
    for manifest in &plan.manifests {
        let (status, error) = match check(manifest) {
            Ok(status) => (status, None),
            Err(err) => {
                warn!(solution = %manifest.solution, %err, "could not verify manifest");
                (ManifestStatus::Error, Some(err.to_string()))
            }
        };
        manifests.push(ManifestReport {
            solution: manifest.solution.to_string(),
            path: display_path(manifest),
            status,
            error,
        });
    }

    for stale in &plan.stale {
        manifests.push(ManifestReport {
            solution: stale.solution.to_string(),
            path: display_path(stale),
            status: ManifestStatus::Stale,
            error: None,
        });
    }

    Ok(VerifyOutput { schema_version: SCHEMA_VERSION, manifests })
}

fn check(manifest: &CloudBuildConfig) -> Result<ManifestStatus, AppError> {
    Ok(if !manifest.exists()? {
        ManifestStatus::Missing
    } else if manifest.verify()? {
        ManifestStatus::UpToDate
    } else {
        ManifestStatus::Drifted
    })
}
