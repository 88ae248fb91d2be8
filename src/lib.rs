//! cloudbuild-gen: generate and drift-check per-solution Cloud Build configurations.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOutput, ManifestFailure, ManifestReport, ManifestStatus, RenderOptions, VerifyOutput,
    generate, generate_at, render, verify, verify_at,
};
pub use domain::{
    AppError, CONFIG_FILE, CloudBuildConfig, DEFAULT_TEMPLATE, ExtraConfig, ProjectConfig,
    SolutionId, parse_extra_configs_yaml,
};
