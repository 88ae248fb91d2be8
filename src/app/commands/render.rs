//! Render command: print one solution's manifest without touching the repository.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, CloudBuildConfig, SolutionId, parse_extra_configs_yaml};

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Solution substituted into the template.
    pub solution: String,
    /// Template file; the built-in template when absent.
    pub template: Option<PathBuf>,
    /// YAML file holding a list of extra configs.
    pub extra_configs: Option<PathBuf>,
}

/// Execute the render command.
pub fn execute(options: &RenderOptions) -> Result<String, AppError> {
    let mut config = CloudBuildConfig::new(SolutionId::new(&options.solution)?);

    if let Some(path) = &options.template {
        config.template =
            fs::read_to_string(path).map_err(|e| AppError::file_access("read", path, e))?;
    }
    if let Some(path) = &options.extra_configs {
        let content =
            fs::read_to_string(path).map_err(|e| AppError::file_access("read", path, e))?;
        config.extra_configs = parse_extra_configs_yaml(&content)?;
    }

    config.render().map_err(|err| match (err, &options.template) {
        (AppError::TemplateRender { solution, reason }, Some(path)) => AppError::TemplateRender {
            solution,
            reason: format!("{}: {}", path.display(), reason),
        },
        (err, _) => err,
    })
}
