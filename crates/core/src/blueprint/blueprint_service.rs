use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::blueprint_model::{
    BlueprintCategory, CategoryWeight, ExamPreview, NecRef, NewBlueprintCategory, NewNecRef,
};
use super::blueprint_traits::{BlueprintRepositoryTrait, BlueprintServiceTrait};
use super::weight_engine;
use crate::errors::{Error, Result, ValidationError};

pub struct BlueprintService {
    repository: Arc<dyn BlueprintRepositoryTrait>,
}

impl BlueprintService {
    pub fn new(repository: Arc<dyn BlueprintRepositoryTrait>) -> Self {
        BlueprintService { repository }
    }

    fn validate_category(category: &NewBlueprintCategory) -> Result<()> {
        if category.code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "code".to_string(),
            )));
        }
        if category.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(format!(
                "name (category {})",
                category.code
            ))));
        }
        if let Some(weight) = category.weight {
            if weight < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Category {} weight must not be negative, got {}",
                    category.code, weight
                ))));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl BlueprintServiceTrait for BlueprintService {
    fn get_active_categories(&self) -> Result<Vec<BlueprintCategory>> {
        self.repository.load_active_categories()
    }

    fn get_categories(&self) -> Result<Vec<BlueprintCategory>> {
        self.repository.load_categories()
    }

    fn get_category(&self, code: &str) -> Result<BlueprintCategory> {
        self.repository.get_category(code)
    }

    fn get_nec_refs(&self) -> Result<Vec<NecRef>> {
        self.repository.load_nec_refs()
    }

    fn preview_exam(&self, total_questions: u32) -> Result<ExamPreview> {
        let categories = self.repository.load_active_categories()?;
        let weights: Vec<CategoryWeight> = categories.iter().map(CategoryWeight::from).collect();

        let allocation = weight_engine::allocate(&weights, total_questions)?;
        debug!(
            "Allocated {} questions across {} categories ({})",
            total_questions,
            allocation.categories.len(),
            allocation.mode
        );

        Ok(ExamPreview::from_allocation(total_questions, allocation))
    }

    async fn save_categories(&self, categories: Vec<NewBlueprintCategory>) -> Result<usize> {
        for category in &categories {
            Self::validate_category(category)?;
        }
        self.repository.upsert_categories(categories).await
    }

    async fn save_nec_refs(&self, refs: Vec<NewNecRef>) -> Result<usize> {
        if let Some(bad) = refs.iter().find(|r| r.article.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::MissingField(format!(
                "article (reference '{}')",
                bad.title
            ))));
        }
        self.repository.insert_nec_refs(refs).await
    }

    fn check_ready(&self) -> Result<()> {
        self.repository.ping()
    }
}
