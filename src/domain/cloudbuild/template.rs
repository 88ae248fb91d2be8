//! Manifest template rendering.
//!
//! Templates use Jinja syntax and see two variables: `solution` and
//! `extra_configs` (a list of `{name, env_vars}`). Undefined variables are
//! render errors.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::ExtraConfig;
use crate::domain::AppError;

/// Built-in Cloud Build manifest template.
pub static DEFAULT_TEMPLATE: &str = include_str!("templates/cloudbuild-k8s.yaml.j2");

const EXTRA_CONFIGS_VAR: &str = "extra_configs";

/// Parameters exposed to a manifest template.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestContext<'a> {
    pub solution: &'a str,
    pub extra_configs: &'a [ExtraConfig],
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Render `template` with `context`, right-trimmed.
pub fn render_manifest(template: &str, context: &ManifestContext<'_>) -> Result<String, AppError> {
    let rendered = environment().render_str(template, context).map_err(|err| {
        AppError::TemplateRender { solution: context.solution.to_string(), reason: err.to_string() }
    })?;

    Ok(rendered.trim_end().to_string())
}

/// Whether the template references `extra_configs` at all.
pub fn accepts_extra_configs(template: &str) -> bool {
    template.contains(EXTRA_CONFIGS_VAR)
}
