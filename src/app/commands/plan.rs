//! Manifest planning shared by `generate` and `verify`.
//!
//! Discovers solutions under the configured solutions directory and builds one
//! `CloudBuildConfig` per solution, plus one per generated file whose solution
//! no longer exists.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, CloudBuildConfig, DEFAULT_TEMPLATE, ProjectConfig, SolutionId};
use crate::ports::RepositoryFilesystem;

/// Manifests to write or check for one repository.
#[derive(Debug, Clone)]
pub struct ManifestPlan {
    /// One entry per discovered solution, sorted by solution.
    pub manifests: Vec<CloudBuildConfig>,
    /// Generated files left behind by solutions that no longer exist.
    pub stale: Vec<CloudBuildConfig>,
}

pub fn plan_manifests(
    repository: &impl RepositoryFilesystem,
    config: &ProjectConfig,
) -> Result<ManifestPlan, AppError> {
    let settings = &config.generator;
    let template = load_template(repository, settings.template.as_deref())?;
    let solutions = discover_solutions(repository, config)?;

    for configured in config.solutions.keys() {
        if !solutions.contains(configured) {
            warn!(
                solution = %configured,
                "settings declared for a solution that was not discovered"
            );
        }
    }

    let manifests = solutions
        .iter()
        .map(|solution| -> Result<CloudBuildConfig, AppError> {
            Ok(CloudBuildConfig::new(solution.clone())
                .with_template(template.clone())
                .with_extra_configs(config.extra_configs_for(solution).to_vec())
                .with_path(manifest_path(repository, config, solution)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stale = find_stale_manifests(repository, config, &solutions)?;

    Ok(ManifestPlan { manifests, stale })
}

fn load_template(
    repository: &impl RepositoryFilesystem,
    template_path: Option<&str>,
) -> Result<String, AppError> {
    match template_path {
        Some(path) => {
            debug!(template = path, "using template override");
            repository.read_file(path)
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Subdirectories of the solutions directory that get a manifest.
pub fn discover_solutions(
    repository: &impl RepositoryFilesystem,
    config: &ProjectConfig,
) -> Result<BTreeSet<SolutionId>, AppError> {
    let settings = &config.generator;
    if !repository.is_dir(&settings.solutions_dir) {
        return Err(AppError::config_error(format!(
            "Solutions directory '{}' not found",
            settings.solutions_dir
        )));
    }

    let mut solutions = BTreeSet::new();
    for entry in repository.list_dir(&settings.solutions_dir)? {
        let Some(name) = entry_name(&entry) else { continue };
        if name.starts_with('.') || !repository.is_dir(&entry.to_string_lossy()) {
            continue;
        }
        if settings.is_skipped(name) {
            debug!(solution = name, "skipping solution");
            continue;
        }
        match SolutionId::new(name) {
            Ok(solution) => {
                solutions.insert(solution);
            }
            Err(err) => debug!(entry = name, %err, "ignoring directory"),
        }
    }

    Ok(solutions)
}

fn find_stale_manifests(
    repository: &impl RepositoryFilesystem,
    config: &ProjectConfig,
    solutions: &BTreeSet<SolutionId>,
) -> Result<Vec<CloudBuildConfig>, AppError> {
    let settings = &config.generator;
    if !repository.is_dir(&settings.output_dir) {
        return Ok(Vec::new());
    }

    let mut stale = Vec::new();
    for entry in repository.list_dir(&settings.output_dir)? {
        if repository.is_dir(&entry.to_string_lossy()) {
            continue;
        }
        let Some(solution) = entry_name(&entry).and_then(|n| settings.solution_from_file_name(n))
        else {
            continue;
        };
        if !solutions.contains(&solution) {
            let path = manifest_path(repository, config, &solution)?;
            stale.push(CloudBuildConfig::new(solution).with_path(path));
        }
    }

    Ok(stale)
}

fn manifest_path(
    repository: &impl RepositoryFilesystem,
    config: &ProjectConfig,
    solution: &SolutionId,
) -> Result<PathBuf, AppError> {
    let settings = &config.generator;
    let relative = Path::new(&settings.output_dir).join(settings.manifest_file_name(solution));
    repository.resolve_path(&relative.to_string_lossy())
}

pub(super) fn display_path(manifest: &CloudBuildConfig) -> String {
    manifest.path.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
}

fn entry_name(entry: &Path) -> Option<&str> {
    entry.file_name().and_then(|n| n.to_str())
}
