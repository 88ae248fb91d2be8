//! Per-solution Cloud Build configuration and its backing file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ExtraConfig;
use super::template::{DEFAULT_TEMPLATE, ManifestContext, accepts_extra_configs, render_manifest};
use crate::domain::{AppError, SolutionId};

/// Generator for one solution's Cloud Build manifest.
///
/// Rendering is a pure function of `solution`, `template` and `extra_configs`.
/// Every disk operation works on `path`, which must be assigned explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudBuildConfig {
    /// Substituted for `{{ solution }}`.
    pub solution: SolutionId,
    /// Template source. Defaults to [`DEFAULT_TEMPLATE`].
    pub template: String,
    /// Extra verification variants, rendered in order. Defaults to empty.
    pub extra_configs: Vec<ExtraConfig>,
    /// Target file. Defaults to `None`.
    pub path: Option<PathBuf>,
}

impl CloudBuildConfig {
    pub fn new(solution: SolutionId) -> Self {
        Self {
            solution,
            template: DEFAULT_TEMPLATE.to_string(),
            extra_configs: Vec::new(),
            path: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_extra_configs(
        mut self,
        extra_configs: impl IntoIterator<Item = ExtraConfig>,
    ) -> Self {
        self.extra_configs = extra_configs.into_iter().collect();
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Render the manifest text, right-trimmed.
    ///
    /// Extra configs are dropped without error when the template never
    /// iterates `extra_configs`.
    pub fn render(&self) -> Result<String, AppError> {
        if !self.extra_configs.is_empty() && !accepts_extra_configs(&self.template) {
            warn!(
                solution = %self.solution,
                dropped = self.extra_configs.len(),
                "template has no extra_configs insertion point; extra configs are ignored"
            );
        }

        let context =
            ManifestContext { solution: self.solution.as_str(), extra_configs: &self.extra_configs };
        render_manifest(&self.template, &context)
    }

    /// Whether a file exists at `path`.
    pub fn exists(&self) -> Result<bool, AppError> {
        Ok(self.require_path()?.exists())
    }

    /// Compare the file at `path` with a fresh rendering.
    ///
    /// Both sides are right-trimmed; any other difference is drift.
    pub fn verify(&self) -> Result<bool, AppError> {
        let path = self.require_path()?;
        let expected = self.render()?;
        let actual =
            fs::read_to_string(path).map_err(|e| AppError::file_access("read", path, e))?;

        let up_to_date = expected.trim_end() == actual.trim_end();
        debug!(solution = %self.solution, path = %path.display(), up_to_date, "verified manifest");
        Ok(up_to_date)
    }

    /// Render and overwrite the file at `path`.
    pub fn save(&self) -> Result<(), AppError> {
        let path = self.require_path()?;
        let rendered = self.render()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::file_access("create directory", parent, e))?;
        }
        fs::write(path, rendered).map_err(|e| AppError::file_access("write", path, e))?;

        debug!(solution = %self.solution, path = %path.display(), "saved manifest");
        Ok(())
    }

    /// Delete the file at `path`. A missing file is not an error.
    pub fn remove(&self) -> Result<(), AppError> {
        let path = self.require_path()?;

        match fs::remove_file(path) {
            Ok(()) => {
                debug!(solution = %self.solution, path = %path.display(), "removed manifest");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::file_access("remove", path, e)),
        }
    }

    fn require_path(&self) -> Result<&Path, AppError> {
        self.path
            .as_deref()
            .ok_or_else(|| AppError::PathNotSet { solution: self.solution.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const SIMPLE_TEMPLATE: &str = r#"
    steps:
    - id: Build {{ solution }}
      name: gcr.io/cloud-builders/docker
      dir: k8s

    {%- for extra_config in extra_configs %}

    - id: Verify {{ solution }} ({{ extra_config['name'] }})
      name: gcr.io/cloud-builders/docker
      dir: k8s
      env:
      {%- for env_var in extra_config['env_vars'] %}
      - '{{ env_var }}'
      {%- endfor %}

    {%- endfor %}
    "#;

    fn solution(name: &str) -> SolutionId {
        SolutionId::new(name).unwrap()
    }

    fn public_ingress() -> ExtraConfig {
        ExtraConfig::new("Public service and ingress", ["PUBLIC_SERVICE_AND_INGRESS_ENABLED=true"])
    }

    #[test]
    fn defaults_are_documented_values() {
        let config = CloudBuildConfig::new(solution("wordpress"));

        assert_eq!(config.template, DEFAULT_TEMPLATE);
        assert!(config.extra_configs.is_empty());
        assert!(config.path.is_none());
    }

    #[test]
    fn path_can_be_assigned_after_construction() {
        let mut config = CloudBuildConfig::new(solution("wordpress"));
        config.path = Some(PathBuf::from("/tmp/wordpress.yaml"));
        assert_eq!(config.path.as_deref(), Some(Path::new("/tmp/wordpress.yaml")));
    }

    #[test]
    fn renders_custom_template_without_extra_configs() {
        let config = CloudBuildConfig::new(solution("wordpress")).with_template(SIMPLE_TEMPLATE);

        assert_eq!(
            config.render().unwrap(),
            "\n    steps:\n    - id: Build wordpress\n      name: gcr.io/cloud-builders/docker\n      dir: k8s"
        );
    }

    #[test]
    fn renders_custom_template_with_extra_config() {
        let config = CloudBuildConfig::new(solution("wordpress"))
            .with_template(SIMPLE_TEMPLATE)
            .with_extra_configs([public_ingress()]);

        let expected = r#"
    steps:
    - id: Build wordpress
      name: gcr.io/cloud-builders/docker
      dir: k8s

    - id: Verify wordpress (Public service and ingress)
      name: gcr.io/cloud-builders/docker
      dir: k8s
      env:
      - 'PUBLIC_SERVICE_AND_INGRESS_ENABLED=true'"#;
        assert_eq!(config.render().unwrap(), expected);
    }

    #[test]
    fn template_without_insertion_point_drops_extra_configs() {
        let template = "steps:\n- id: Build {{ solution }}\n";
        let plain = CloudBuildConfig::new(solution("redis")).with_template(template);
        let extended = plain.clone().with_extra_configs([public_ingress()]);

        assert_eq!(extended.render().unwrap(), plain.render().unwrap());
    }

    #[test]
    fn render_failure_propagates() {
        let config = CloudBuildConfig::new(solution("redis")).with_template("{% for %}");
        assert!(matches!(config.render(), Err(AppError::TemplateRender { .. })));
    }

    #[test]
    fn disk_operations_require_path() {
        let config = CloudBuildConfig::new(solution("redis"));

        assert!(matches!(config.exists(), Err(AppError::PathNotSet { .. })));
        assert!(matches!(config.verify(), Err(AppError::PathNotSet { .. })));
        assert!(matches!(config.save(), Err(AppError::PathNotSet { .. })));
        assert!(matches!(
            config.remove(),
            Err(AppError::PathNotSet { ref solution }) if solution == "redis"
        ));
    }

    #[test]
    fn exists_reports_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CloudBuildConfig::new(solution("unknown")).with_path(file.path());
        assert!(config.exists().unwrap());
    }

    #[test]
    fn verify_detects_drift_then_matches_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloudbuild.yaml");
        fs::write(
            &path,
            "\n    steps:\n    - id: Build unknown\n      name: gcr.io/cloud-builders/docker\n      dir: k8s\n    ",
        )
        .unwrap();

        let mut config = CloudBuildConfig::new(solution("unknown")).with_path(&path);
        assert!(!config.verify().unwrap());

        config.template =
            "\n    steps:\n    - id: Build {{ solution }}\n      name: gcr.io/cloud-builders/docker\n      dir: k8s\n    "
                .to_string();
        assert!(config.verify().unwrap());
    }

    #[test]
    fn verify_ignores_trailing_newlines_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloudbuild.yaml");
        let config = CloudBuildConfig::new(solution("redis"))
            .with_template("id: {{ solution }}\n")
            .with_path(&path);

        fs::write(&path, "id: redis\n\n\n").unwrap();
        assert!(config.verify().unwrap());

        fs::write(&path, "id:  redis\n").unwrap();
        assert!(!config.verify().unwrap());

        fs::write(&path, "id: redis # edited\n").unwrap();
        assert!(!config.verify().unwrap());
    }

    #[test]
    fn verify_missing_file_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let config =
            CloudBuildConfig::new(solution("redis")).with_path(dir.path().join("absent.yaml"));

        let err = config.verify().unwrap_err();
        assert!(matches!(err, AppError::FileAccess { action: "read", .. }));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn save_writes_rendered_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloudbuild.yaml");
        let template = "\n    steps:\n    - id: Build unknown\n      dir: k8s\n    ";
        let config =
            CloudBuildConfig::new(solution("wordpress")).with_template(template).with_path(&path);

        config.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), template.trim_end());
    }

    #[test]
    fn save_overwrites_existing_content_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cloudbuild.yaml");
        let config = CloudBuildConfig::new(solution("redis"))
            .with_template("id: {{ solution }}")
            .with_path(&path);

        config.save().unwrap();
        fs::write(&path, "a much longer stale body that must disappear entirely\n").unwrap();
        config.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "id: redis");
    }

    #[test]
    fn save_then_verify_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = CloudBuildConfig::new(solution("wordpress"))
            .with_extra_configs([public_ingress()])
            .with_path(dir.path().join("cloudbuild-k8s-wordpress.yaml"));

        config.save().unwrap();
        assert!(config.verify().unwrap());
    }

    #[test]
    fn verify_follows_field_changes_without_caching() {
        let dir = TempDir::new().unwrap();
        let mut config = CloudBuildConfig::new(solution("wordpress"))
            .with_path(dir.path().join("cloudbuild.yaml"));

        config.save().unwrap();
        config.extra_configs.push(public_ingress());
        assert!(!config.verify().unwrap());

        config.extra_configs.clear();
        assert!(config.verify().unwrap());
    }

    #[test]
    fn existence_lifecycle() {
        let dir = TempDir::new().unwrap();
        let config = CloudBuildConfig::new(solution("wordpress"))
            .with_path(dir.path().join("cloudbuild-k8s-wordpress.yaml"));

        assert!(!config.exists().unwrap());
        config.save().unwrap();
        assert!(config.exists().unwrap());
        config.remove().unwrap();
        assert!(!config.exists().unwrap());
    }

    #[test]
    fn remove_is_idempotent() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let (_, path) = file.keep().unwrap();
        let config = CloudBuildConfig::new(solution("wordpress")).with_path(&path);

        config.remove().unwrap();
        assert!(!config.exists().unwrap());
        config.remove().unwrap();
        assert!(!config.exists().unwrap());
    }

    fn extra_config_strategy() -> impl Strategy<Value = ExtraConfig> {
        let env_vars = prop::collection::vec("[A-Z][A-Z_]{0,8}=[a-z0-9]{0,6}", 0..4);
        ("[A-Za-z][A-Za-z0-9 ]{0,12}", env_vars)
            .prop_map(|(name, env_vars)| ExtraConfig::new(name, env_vars))
    }

    proptest! {
        #[test]
        fn render_is_idempotent(
            name in "[a-z][a-z0-9-]{0,15}",
            extra_configs in prop::collection::vec(extra_config_strategy(), 0..4),
        ) {
            let config = CloudBuildConfig::new(SolutionId::new(&name).unwrap())
                .with_extra_configs(extra_configs);

            let first = config.render().unwrap();
            prop_assert_eq!(&first, &config.render().unwrap());
            prop_assert_eq!(first.trim_end(), first.as_str());
        }

        #[test]
        fn extra_blocks_keep_their_order(
            a in extra_config_strategy(),
            b in extra_config_strategy(),
        ) {
            prop_assume!(a.name != b.name);
            let config = CloudBuildConfig::new(SolutionId::new("wordpress").unwrap())
                .with_extra_configs([a.clone(), b.clone()]);
            let rendered = config.render().unwrap();

            let a_at = rendered.find(&format!("- id: Verify wordpress ({})\n", a.name)).unwrap();
            let b_at = rendered.find(&format!("- id: Verify wordpress ({})\n", b.name)).unwrap();
            prop_assert!(a_at < b_at);

            let block_a = &rendered[a_at..b_at];
            let mut cursor = 0;
            for env_var in &a.env_vars {
                let needle = format!("  - '{}'\n", env_var);
                let found = block_a[cursor..].find(&needle);
                prop_assert!(found.is_some(), "missing {} in block", env_var);
                cursor += found.unwrap() + needle.len();
            }
        }
    }
}
