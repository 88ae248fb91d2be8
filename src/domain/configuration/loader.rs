//! Project configuration loading.

use tracing::info;

use super::project_config::{CONFIG_FILE, ProjectConfig};
use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// Load `cloudbuild-gen.toml` from the repository root.
///
/// A missing file yields the documented defaults.
pub fn load_project_config(
    repository: &impl RepositoryFilesystem,
) -> Result<ProjectConfig, AppError> {
    if !repository.file_exists(CONFIG_FILE) {
        info!("{} not found; using default generator settings", CONFIG_FILE);
        return Ok(ProjectConfig::default());
    }

    let content = repository.read_file(CONFIG_FILE)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
