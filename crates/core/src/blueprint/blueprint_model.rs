//! Exam blueprint domain models.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a blueprint category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintCategory {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub weight: Option<Decimal>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or replacing a blueprint category
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBlueprintCategory {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub weight: Option<Decimal>,
    pub is_active: bool,
}

/// A code reference (article and section of an NEC edition)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NecRef {
    pub id: String,
    pub article: String,
    pub section: String,
    pub title: String,
    pub edition: String,
}

/// Input model for a new code reference
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewNecRef {
    pub article: String,
    pub section: String,
    pub title: String,
    pub edition: String,
}

/// One entry fed to the weight engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeight {
    pub code: String,
    pub name: String,
    pub weight: Option<Decimal>,
}

impl CategoryWeight {
    pub fn new(code: impl Into<String>, name: impl Into<String>, weight: Option<Decimal>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            weight,
        }
    }
}

impl From<&BlueprintCategory> for CategoryWeight {
    fn from(category: &BlueprintCategory) -> Self {
        Self {
            code: category.code.clone(),
            name: category.name.clone(),
            weight: category.weight,
        }
    }
}

/// How the engine split the total across categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    Proportional,
    Uniform,
}

impl DistributionMode {
    /// Proportional only when every category carries a weight.
    pub fn resolve(categories: &[CategoryWeight]) -> Self {
        if categories.iter().all(|c| c.weight.is_some()) {
            DistributionMode::Proportional
        } else {
            DistributionMode::Uniform
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionMode::Proportional => "proportional",
            DistributionMode::Uniform => "uniform",
        }
    }
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer share awarded to one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAllocation {
    pub code: String,
    pub name: String,
    pub weight: Option<Decimal>,
    pub allocated: u32,
}

/// Output of the weight engine, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub mode: DistributionMode,
    pub categories: Vec<CategoryAllocation>,
}

impl Allocation {
    pub fn total(&self) -> u64 {
        self.categories.iter().map(|c| u64::from(c.allocated)).sum()
    }

    pub fn counts(&self) -> Vec<u32> {
        self.categories.iter().map(|c| c.allocated).collect()
    }
}

/// Per-category line of an exam preview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDistribution {
    pub category_code: String,
    pub category_name: String,
    pub weight: Option<Decimal>,
    pub questions_allocated: u32,
}

impl From<CategoryAllocation> for QuestionDistribution {
    fn from(allocation: CategoryAllocation) -> Self {
        Self {
            category_code: allocation.code,
            category_name: allocation.name,
            weight: allocation.weight,
            questions_allocated: allocation.allocated,
        }
    }
}

/// How many questions each active category contributes to an exam of a given size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamPreview {
    pub total_questions: u32,
    pub distribution: Vec<QuestionDistribution>,
    pub engine: DistributionMode,
}

impl ExamPreview {
    pub fn from_allocation(total_questions: u32, allocation: Allocation) -> Self {
        Self {
            total_questions,
            distribution: allocation
                .categories
                .into_iter()
                .map(QuestionDistribution::from)
                .collect(),
            engine: allocation.mode,
        }
    }
}
