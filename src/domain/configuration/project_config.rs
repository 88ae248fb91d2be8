//! Project configuration domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::identities::validation::{
    validate_contained_relative_path, validate_safe_path_component,
};
use crate::domain::{AppError, ExtraConfig, SolutionId};

/// Project configuration file, relative to the repository root.
pub const CONFIG_FILE: &str = "cloudbuild-gen.toml";

const MANIFEST_EXTENSION: &str = ".yaml";

/// Configuration loaded from `cloudbuild-gen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Where solutions live and where manifests go.
    #[serde(default)]
    pub generator: GeneratorSettings,
    /// Per-solution settings keyed by solution name.
    #[serde(default)]
    pub solutions: BTreeMap<SolutionId, SolutionSettings>,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generator.validate()?;
        for (solution, settings) in &self.solutions {
            for extra_config in &settings.extra_configs {
                extra_config.validate().map_err(|e| {
                    AppError::Validation(format!("solutions.{}: {}", solution, e))
                })?;
            }
        }
        Ok(())
    }

    /// Extra configs declared for `solution`, in declaration order.
    pub fn extra_configs_for(&self, solution: &SolutionId) -> &[ExtraConfig] {
        self.solutions.get(solution).map(|s| s.extra_configs.as_slice()).unwrap_or_default()
    }
}

/// `[generator]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Directory whose subdirectories are solutions.
    #[serde(default = "default_solutions_dir")]
    pub solutions_dir: String,
    /// Directory receiving generated manifests.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Generated file name prefix; the file is `<prefix><solution>.yaml`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Template override. The built-in template is used when absent.
    #[serde(default)]
    pub template: Option<String>,
    /// Solution directories that never get a manifest.
    #[serde(default)]
    pub skip: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            solutions_dir: default_solutions_dir(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            template: None,
            skip: Vec::new(),
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.solutions_dir.trim().is_empty() {
            return Err(AppError::Validation("generator.solutions_dir must be non-empty".into()));
        }
        if self.output_dir.trim().is_empty() {
            return Err(AppError::Validation("generator.output_dir must be non-empty".into()));
        }
        let dirs = [("solutions_dir", &self.solutions_dir), ("output_dir", &self.output_dir)];
        for (key, dir) in dirs {
            if !validate_contained_relative_path(dir) {
                return Err(AppError::Validation(format!(
                    "generator.{} '{}' must be a relative path inside the repository",
                    key, dir
                )));
            }
        }
        if !validate_safe_path_component(&self.file_prefix) {
            return Err(AppError::Validation(format!(
                "generator.file_prefix '{}' must be alphanumeric with hyphens or underscores",
                self.file_prefix
            )));
        }
        if self.template.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::Validation(
                "generator.template must be non-empty when set".into(),
            ));
        }
        Ok(())
    }

    pub fn is_skipped(&self, solution: &str) -> bool {
        self.skip.iter().any(|s| s == solution)
    }

    /// File name of the manifest generated for `solution`.
    pub fn manifest_file_name(&self, solution: &SolutionId) -> String {
        format!("{}{}{}", self.file_prefix, solution, MANIFEST_EXTENSION)
    }

    /// Inverse of `manifest_file_name`; `None` for files this tool does not own.
    pub fn solution_from_file_name(&self, file_name: &str) -> Option<SolutionId> {
        let name = file_name.strip_prefix(&self.file_prefix)?.strip_suffix(MANIFEST_EXTENSION)?;
        SolutionId::new(name).ok()
    }
}

/// `[solutions.<name>]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionSettings {
    #[serde(default)]
    pub extra_configs: Vec<ExtraConfig>,
}

fn default_solutions_dir() -> String {
    "k8s".to_string()
}

fn default_output_dir() -> String {
    "cloudbuild".to_string()
}

fn default_file_prefix() -> String {
    "cloudbuild-k8s-".to_string()
}
