use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// An additional verification variant for a solution.
///
/// Each entry renders as one more `Verify <solution> (<name>)` step whose
/// `env:` list ends with `env_vars`, verbatim and in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraConfig {
    /// Label embedded in the generated step id.
    pub name: String,
    /// Literal `KEY=VALUE` entries.
    #[serde(default)]
    pub env_vars: Vec<String>,
}

impl ExtraConfig {
    pub fn new(
        name: impl Into<String>,
        env_vars: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self { name: name.into(), env_vars: env_vars.into_iter().map(Into::into).collect() }
    }

    /// Reject entries that cannot be placed on a single manifest line.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("extra config name must be non-empty".into()));
        }
        if self.name.contains('\n') {
            return Err(AppError::Validation(format!(
                "extra config name '{}' must be a single line",
                self.name.escape_debug()
            )));
        }

        for env_var in &self.env_vars {
            let key = env_var.split_once('=').map(|(key, _)| key);
            if key.is_none_or(|key| key.trim().is_empty()) {
                return Err(AppError::Validation(format!(
                    "env var '{}' in extra config '{}' must have the form KEY=VALUE",
                    env_var, self.name
                )));
            }
            if env_var.contains('\n') {
                return Err(AppError::Validation(format!(
                    "env var '{}' in extra config '{}' must be a single line",
                    env_var.escape_debug(),
                    self.name
                )));
            }
        }

        Ok(())
    }
}

/// Parse a YAML list of extra configs and validate every entry.
///
/// ```yaml
/// - name: Public service and ingress
///   env_vars:
///   - PUBLIC_SERVICE_AND_INGRESS_ENABLED=true
/// ```
pub fn parse_extra_configs_yaml(content: &str) -> Result<Vec<ExtraConfig>, AppError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let extra_configs: Vec<ExtraConfig> = serde_yaml::from_str(content).map_err(|e| {
        AppError::ParseError { what: "extra configs YAML".into(), details: e.to_string() }
    })?;

    for extra_config in &extra_configs {
        extra_config.validate()?;
    }

    Ok(extra_configs)
}
