pub mod generate;
mod plan;
pub mod render;
pub mod verify;

pub use plan::{ManifestPlan, discover_solutions, plan_manifests};
