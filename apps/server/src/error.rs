use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blueprint_core::errors::{AllocationError, DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Allocation(AllocationError::EmptyCategorySet) => (
                    StatusCode::NOT_FOUND,
                    "No active blueprint categories found".to_string(),
                ),
                CoreError::Allocation(
                    AllocationError::DegenerateWeights
                    | AllocationError::InvalidWeight { .. }
                    | AllocationError::WeightOverflow,
                ) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CoreError::Allocation(AllocationError::RoundingDriftDetected { .. }) => {
                    tracing::error!("Blueprint weight engine defect: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
                CoreError::Database(DatabaseError::NotFound(what)) => {
                    (StatusCode::NOT_FOUND, format!("{} not found", what))
                }
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                _ => {
                    tracing::error!("Request failed: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Anyhow(e) => {
                tracing::error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
