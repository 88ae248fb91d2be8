mod cloudbuild_config;
mod extra_config;
mod template;

pub use cloudbuild_config::CloudBuildConfig;
pub use extra_config::{ExtraConfig, parse_extra_configs_yaml};
pub use template::{DEFAULT_TEMPLATE, ManifestContext, accepts_extra_configs, render_manifest};
