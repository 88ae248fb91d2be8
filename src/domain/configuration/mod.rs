pub mod loader;
pub mod project_config;

pub use loader::{load_project_config, parse_config_content};
pub use project_config::{CONFIG_FILE, GeneratorSettings, ProjectConfig, SolutionSettings};
