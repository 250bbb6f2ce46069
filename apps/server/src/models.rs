use blueprint_core::blueprint as core_blueprint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDistribution {
    pub category_code: String,
    pub category_name: String,
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,
    pub questions_allocated: u32,
}

impl From<core_blueprint::QuestionDistribution> for CategoryDistribution {
    fn from(d: core_blueprint::QuestionDistribution) -> Self {
        Self {
            category_code: d.category_code,
            category_name: d.category_name,
            weight: d.weight,
            questions_allocated: d.questions_allocated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExamPreviewResponse {
    pub total_questions: u32,
    pub distribution: Vec<CategoryDistribution>,
    /// Either `proportional` or `uniform`.
    pub engine: String,
}

impl From<core_blueprint::ExamPreview> for ExamPreviewResponse {
    fn from(p: core_blueprint::ExamPreview) -> Self {
        Self {
            total_questions: p.total_questions,
            distribution: p
                .distribution
                .into_iter()
                .map(CategoryDistribution::from)
                .collect(),
            engine: p.engine.as_str().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintCategory {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,
    pub is_active: bool,
}

impl From<core_blueprint::BlueprintCategory> for BlueprintCategory {
    fn from(c: core_blueprint::BlueprintCategory) -> Self {
        Self {
            code: c.code,
            name: c.name,
            description: c.description,
            weight: c.weight,
            is_active: c.is_active,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NecRef {
    pub id: String,
    pub article: String,
    pub section: String,
    pub title: String,
    pub edition: String,
}

impl From<core_blueprint::NecRef> for NecRef {
    fn from(r: core_blueprint::NecRef) -> Self {
        Self {
            id: r.id,
            article: r.article,
            section: r.section,
            title: r.title,
            edition: r.edition,
        }
    }
}
