use crate::blueprint::blueprint_model::{
    BlueprintCategory, ExamPreview, NecRef, NewBlueprintCategory, NewNecRef,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for blueprint repository operations
#[async_trait]
pub trait BlueprintRepositoryTrait: Send + Sync {
    /// Active categories, ascending by code.
    fn load_active_categories(&self) -> Result<Vec<BlueprintCategory>>;
    fn load_categories(&self) -> Result<Vec<BlueprintCategory>>;
    fn get_category(&self, code: &str) -> Result<BlueprintCategory>;
    async fn upsert_categories(&self, categories: Vec<NewBlueprintCategory>) -> Result<usize>;
    fn load_nec_refs(&self) -> Result<Vec<NecRef>>;
    async fn insert_nec_refs(&self, refs: Vec<NewNecRef>) -> Result<usize>;
    /// Cheap round trip used by readiness probes.
    fn ping(&self) -> Result<()>;
}

/// Trait for blueprint service operations
#[async_trait]
pub trait BlueprintServiceTrait: Send + Sync {
    fn get_active_categories(&self) -> Result<Vec<BlueprintCategory>>;
    fn get_categories(&self) -> Result<Vec<BlueprintCategory>>;
    fn get_category(&self, code: &str) -> Result<BlueprintCategory>;
    fn get_nec_refs(&self) -> Result<Vec<NecRef>>;
    fn preview_exam(&self, total_questions: u32) -> Result<ExamPreview>;
    async fn save_categories(&self, categories: Vec<NewBlueprintCategory>) -> Result<usize>;
    async fn save_nec_refs(&self, refs: Vec<NewNecRef>) -> Result<usize>;
    fn check_ready(&self) -> Result<()>;
}
