use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use blueprint_core::constants::MIN_QUESTION_COUNT;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{BlueprintCategory, ExamPreviewResponse, NecRef},
};

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PreviewQuery {
    /// Number of questions to distribute. Defaults to the configured count.
    pub questions: Option<String>,
}

/// Resolves the `questions` parameter against the configured bounds.
fn parse_question_count(raw: Option<&str>, default: u32, max: u32) -> ApiResult<u32> {
    let invalid = || {
        ApiError::BadRequest(format!(
            "Invalid questions parameter. Must be between {} and {}.",
            MIN_QUESTION_COUNT, max
        ))
    };

    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };
    let count: i64 = raw.parse().map_err(|_| invalid())?;
    if count < i64::from(MIN_QUESTION_COUNT) || count > i64::from(max) {
        return Err(invalid());
    }
    u32::try_from(count).map_err(|_| invalid())
}

#[utoipa::path(
    get,
    path = "/api/v1/exam/preview",
    params(PreviewQuery),
    responses(
        (status = 200, body = ExamPreviewResponse),
        (status = 400, description = "questions is not a number in range"),
        (status = 404, description = "No active blueprint categories"),
        (status = 422, description = "Blueprint weights cannot be apportioned"),
    )
)]
pub async fn preview_exam(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreviewQuery>,
) -> ApiResult<Json<ExamPreviewResponse>> {
    let total = parse_question_count(
        query.questions.as_deref(),
        state.default_questions,
        state.max_questions,
    )?;
    let preview = state.blueprint_service.preview_exam(total)?;
    Ok(Json(ExamPreviewResponse::from(preview)))
}

#[utoipa::path(get, path = "/api/v1/blueprint/categories", responses((status = 200, body = [BlueprintCategory])))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BlueprintCategory>>> {
    let categories = state.blueprint_service.get_categories()?;
    Ok(Json(
        categories.into_iter().map(BlueprintCategory::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/blueprint/categories/{code}",
    params(("code" = String, Path, description = "Category code, e.g. BC01")),
    responses(
        (status = 200, body = BlueprintCategory),
        (status = 404, description = "Unknown category code"),
    )
)]
pub async fn get_category(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BlueprintCategory>> {
    let category = state.blueprint_service.get_category(&code)?;
    Ok(Json(BlueprintCategory::from(category)))
}

#[utoipa::path(get, path = "/api/v1/nec-refs", responses((status = 200, body = [NecRef])))]
pub async fn list_nec_refs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<NecRef>>> {
    let refs = state.blueprint_service.get_nec_refs()?;
    Ok(Json(refs.into_iter().map(NecRef::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/exam/preview", get(preview_exam))
        .route("/blueprint/categories", get(list_categories))
        .route("/blueprint/categories/{code}", get(get_category))
        .route("/nec-refs", get(list_nec_refs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_uses_default() {
        assert_eq!(parse_question_count(None, 40, 1000).unwrap(), 40);
        assert_eq!(parse_question_count(Some("  "), 40, 1000).unwrap(), 40);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_question_count(Some("1"), 40, 1000).unwrap(), 1);
        assert_eq!(parse_question_count(Some("1000"), 40, 1000).unwrap(), 1000);
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        for raw in ["0", "-5", "1001", "abc", "12.5", "99999999999999999999"] {
            assert!(
                matches!(
                    parse_question_count(Some(raw), 40, 1000),
                    Err(ApiError::BadRequest(_))
                ),
                "{} should be rejected",
                raw
            );
        }
    }
}
