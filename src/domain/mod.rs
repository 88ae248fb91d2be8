pub mod cloudbuild;
pub mod configuration;
pub mod error;
pub mod identities;

pub use cloudbuild::{CloudBuildConfig, DEFAULT_TEMPLATE, ExtraConfig, parse_extra_configs_yaml};
pub use configuration::{
    CONFIG_FILE, GeneratorSettings, ProjectConfig, SolutionSettings, load_project_config,
    parse_config_content,
};
pub use error::AppError;
pub use identities::SolutionId;
