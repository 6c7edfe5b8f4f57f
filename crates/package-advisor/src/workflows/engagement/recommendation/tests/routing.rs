use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::engagement::recommendation::router;
use crate::workflows::engagement::recommendation::PackageAdvisoryService;

#[tokio::test]
async fn recommend_route_creates_a_recommendation() {
    let (service, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/advisor/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&base_selections()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("recommendation_id").is_some());
    assert_eq!(payload.get("package"), Some(&json!("Jumpstart AI Advanced")));
    assert_eq!(payload.get("price"), Some(&json!(20_000)));
    assert_eq!(payload.get("status"), Some(&json!("issued")));
}

#[tokio::test]
async fn recommend_route_rejects_incomplete_payloads() {
    let (service, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/advisor/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("incomplete"));
}

#[tokio::test]
async fn recommend_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(PackageAdvisoryService::new(
        Arc::new(ConflictStore),
        Arc::new(MemoryEscalations::default()),
        advisor_config(),
    ));

    let response = router::recommend_handler::<ConflictStore, MemoryEscalations>(
        State(service),
        axum::Json(base_selections()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn recommend_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(PackageAdvisoryService::new(
        Arc::new(UnavailableStore),
        Arc::new(MemoryEscalations::default()),
        advisor_config(),
    ));

    let response = router::recommend_handler::<UnavailableStore, MemoryEscalations>(
        State(service),
        axum::Json(base_selections()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn record_route_returns_stored_views() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let record = service
        .recommend(base_selections())
        .expect("recommendation issued");
    let router = router::advisor_router(service);

    let uri = format!(
        "/api/v1/advisor/recommendations/{}",
        record.recommendation_id.0
    );
    let response = router
        .oneshot(
            axum::http::Request::get(uri.as_str())
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_score"), Some(&json!(15)));
    assert!(payload
        .get("validation_rationale")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("pending"));
}

#[tokio::test]
async fn record_route_returns_not_found_for_unknown_ids() {
    let (service, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/advisor/recommendations/rec-999999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_route_reports_misalignment_with_contacts() {
    let (service, _, escalations) = build_service();
    let service = Arc::new(service);
    let record = service
        .recommend(selections_totaling_21())
        .expect("recommendation issued");
    let router = router::advisor_router(service);

    let uri = format!(
        "/api/v1/advisor/recommendations/{}/validation",
        record.recommendation_id.0
    );
    let response = router
        .oneshot(
            axum::http::Request::post(uri.as_str())
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"acv": 50000.0}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let misaligned = payload
        .get("assessment")
        .and_then(|assessment| assessment.get("misaligned"))
        .expect("misaligned assessment");
    assert_eq!(
        misaligned.get("suggested_package"),
        Some(&json!("Jumpstart AI Advanced"))
    );
    assert!(!misaligned
        .get("contacts")
        .and_then(serde_json::Value::as_array)
        .expect("contact roster")
        .is_empty());
    assert_eq!(escalations.events().len(), 1);
}

#[tokio::test]
async fn validation_route_rejects_non_positive_acv() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let record = service
        .recommend(base_selections())
        .expect("recommendation issued");
    let router = router::advisor_router(service);

    let uri = format!(
        "/api/v1/advisor/recommendations/{}/validation",
        record.recommendation_id.0
    );
    let response = router
        .oneshot(
            axum::http::Request::post(uri.as_str())
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"acv": 0.0}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn validation_route_returns_not_found_for_unknown_ids() {
    let (service, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/advisor/recommendations/rec-999999/validation")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"acv": 50000.0}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
