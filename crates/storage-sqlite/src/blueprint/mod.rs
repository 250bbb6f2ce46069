//! SQLite storage implementation for the exam blueprint.

mod model;
mod repository;

pub use model::{BlueprintCategoryDB, NecRefDB};
pub use repository::BlueprintRepository;
