//! Exam blueprint module - domain models, weight engine, services, and traits.

mod blueprint_model;
mod blueprint_service;
mod blueprint_traits;
pub mod weight_engine;

pub use blueprint_model::{
    Allocation, BlueprintCategory, CategoryAllocation, CategoryWeight, DistributionMode,
    ExamPreview, NecRef, NewBlueprintCategory, NewNecRef, QuestionDistribution,
};
pub use blueprint_service::BlueprintService;
pub use blueprint_traits::{BlueprintRepositoryTrait, BlueprintServiceTrait};
pub use weight_engine::allocate;
