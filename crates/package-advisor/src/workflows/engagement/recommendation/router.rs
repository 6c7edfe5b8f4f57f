use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RecommendationId, SelectionSet};
use super::repository::{EscalationPublisher, RecommendationRepository, RepositoryError};
use super::service::{AdvisoryServiceError, PackageAdvisoryService};

/// Router builder exposing HTTP endpoints for scoring and ACV validation.
pub fn advisor_router<R, E>(service: Arc<PackageAdvisoryService<R, E>>) -> Router
where
    R: RecommendationRepository + 'static,
    E: EscalationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/advisor/recommendations",
            post(recommend_handler::<R, E>),
        )
        .route(
            "/api/v1/advisor/recommendations/:recommendation_id",
            get(record_handler::<R, E>),
        )
        .route(
            "/api/v1/advisor/recommendations/:recommendation_id/validation",
            post(validate_handler::<R, E>),
        )
        .with_state(service)
}

pub(crate) async fn recommend_handler<R, E>(
    State(service): State<Arc<PackageAdvisoryService<R, E>>>,
    axum::Json(selections): axum::Json<SelectionSet>,
) -> Response
where
    R: RecommendationRepository + 'static,
    E: EscalationPublisher + 'static,
{
    match service.recommend(selections) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(AdvisoryServiceError::Selection(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AdvisoryServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "recommendation already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R, E>(
    State(service): State<Arc<PackageAdvisoryService<R, E>>>,
    Path(recommendation_id): Path<String>,
) -> Response
where
    R: RecommendationRepository + 'static,
    E: EscalationPublisher + 'static,
{
    let id = RecommendationId(recommendation_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(AdvisoryServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "recommendation_id": id.0,
                "error": "recommendation not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AcvRequest {
    pub(crate) acv: f64,
}

pub(crate) async fn validate_handler<R, E>(
    State(service): State<Arc<PackageAdvisoryService<R, E>>>,
    Path(recommendation_id): Path<String>,
    axum::Json(request): axum::Json<AcvRequest>,
) -> Response
where
    R: RecommendationRepository + 'static,
    E: EscalationPublisher + 'static,
{
    let id = RecommendationId(recommendation_id);
    match service.validate(&id, request.acv) {
        Ok(review) => {
            let summary = review.assessment.summary();
            let payload = json!({
                "recommendation_id": id.0,
                "acv": review.acv,
                "assessment": review.assessment,
                "summary": summary,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(AdvisoryServiceError::Contract(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AdvisoryServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "recommendation_id": id.0,
                "error": "recommendation not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
