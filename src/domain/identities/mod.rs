pub mod solution_id;
pub mod validation;

pub use solution_id::SolutionId;
