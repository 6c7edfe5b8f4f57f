//! Integration specifications for the package recommendation workflow.
//!
//! Scenarios exercise the public service facade and HTTP router end to end so
//! scoring, explanation, and contract-value validation are covered without
//! reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use package_advisor::workflows::engagement::recommendation::domain::{
        BusinessLogicNeed, DataComplexity, DeploymentType, GoLiveSupport, PrimaryNeed,
        RecommendationId, SecurityRequirement, SelectionSet, TeamSize, TrainingSeats,
        UseCaseCount,
    };
    use package_advisor::workflows::engagement::recommendation::repository::{
        EscalationError, EscalationNotice, EscalationPublisher, RecommendationRecord,
        RecommendationRepository, RepositoryError,
    };
    use package_advisor::workflows::engagement::recommendation::{
        AdvisorConfig, PackageAdvisoryService,
    };

    pub(super) fn production_cloud_selections() -> SelectionSet {
        SelectionSet {
            team_size: Some(TeamSize::FiftyToHundred),
            primary_need: Some(PrimaryNeed::ProductionReady),
            data_complexity: Some(DataComplexity::MultipleSources),
            business_logic: Some(BusinessLogicNeed::StandardAggregations),
            security: Some(SecurityRequirement::BasicGroupLevel),
            training_seats: Some(TrainingSeats::FiveSeats),
            use_cases: Some(UseCaseCount::Multiple),
            go_live_support: Some(GoLiveSupport::Guided),
            deployment: Some(DeploymentType::Cloud),
            embedded_type: None,
            migration: false,
        }
    }

    pub(super) fn enterprise_selections() -> SelectionSet {
        SelectionSet {
            team_size: Some(TeamSize::EnterpriseWide),
            primary_need: Some(PrimaryNeed::ProofOfConcept),
            data_complexity: Some(DataComplexity::ComplexIntegration),
            business_logic: Some(BusinessLogicNeed::AdvancedFormulas),
            security: Some(SecurityRequirement::AdvancedCompliance),
            training_seats: Some(TrainingSeats::FifteenSeats),
            ..production_cloud_selections()
        }
    }

    pub(super) fn build_service() -> (
        PackageAdvisoryService<MemoryStore, MemoryEscalations>,
        Arc<MemoryStore>,
        Arc<MemoryEscalations>,
    ) {
        let repository = Arc::new(MemoryStore::default());
        let escalations = Arc::new(MemoryEscalations::default());
        let service = PackageAdvisoryService::new(
            repository.clone(),
            escalations.clone(),
            AdvisorConfig::default(),
        );
        (service, repository, escalations)
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryStore {
        records: Arc<Mutex<HashMap<RecommendationId, RecommendationRecord>>>,
    }

    impl RecommendationRepository for MemoryStore {
        fn insert(
            &self,
            record: RecommendationRecord,
        ) -> Result<RecommendationRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            if guard.contains_key(&record.recommendation_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.recommendation_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: RecommendationRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.insert(record.recommendation_id.clone(), record);
            Ok(())
        }

        fn fetch(
            &self,
            id: &RecommendationId,
        ) -> Result<Option<RecommendationRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryEscalations {
        events: Arc<Mutex<Vec<EscalationNotice>>>,
    }

    impl MemoryEscalations {
        pub(super) fn events(&self) -> Vec<EscalationNotice> {
            self.events.lock().expect("escalation mutex poisoned").clone()
        }
    }

    impl EscalationPublisher for MemoryEscalations {
        fn publish(&self, notice: EscalationNotice) -> Result<(), EscalationError> {
            self.events
                .lock()
                .expect("escalation mutex poisoned")
                .push(notice);
            Ok(())
        }
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use common::*;
use package_advisor::workflows::engagement::recommendation::domain::{
    PackageFamily, PackageTier, RecommendationStatus, SelectionSet,
};
use package_advisor::workflows::engagement::recommendation::advisor_router;
use package_advisor::workflows::engagement::recommendation::repository::RecommendationRepository;
use serde_json::json;
use tower::ServiceExt;

#[test]
fn recommendation_flows_from_submission_to_confirmation() {
    let (service, repository, escalations) = build_service();

    let record = service
        .recommend(production_cloud_selections())
        .expect("recommendation issued");
    assert_eq!(record.outcome.recommendation.total_score, 15);
    assert_eq!(record.outcome.recommendation.tier, PackageTier::Advanced);
    assert_eq!(record.outcome.recommendation.family, PackageFamily::Jumpstart);
    assert_eq!(record.outcome.recommendation.price, 20_000);

    let review = service
        .validate(&record.recommendation_id, 120_000.0)
        .expect("validation runs");
    assert!(review.assessment.is_aligned());

    let stored = repository
        .fetch(&record.recommendation_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.status, RecommendationStatus::Confirmed);
    assert!(escalations.events().is_empty());
}

#[test]
fn misaligned_contract_value_escalates_to_the_roster() {
    let (service, _repository, escalations) = build_service();

    let record = service
        .recommend(enterprise_selections())
        .expect("recommendation issued");
    assert_eq!(record.outcome.recommendation.tier, PackageTier::Premium);

    let review = service
        .validate(&record.recommendation_id, 50_000.0)
        .expect("validation runs");
    assert!(!review.assessment.is_aligned());

    let events = escalations.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].suggested_package, "Jumpstart AI Advanced");
}

#[tokio::test]
async fn router_round_trip_covers_scoring_and_validation() {
    let (service, _repository, _escalations) = build_service();
    let service = Arc::new(service);
    let app = advisor_router(service);

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/advisor/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&production_cloud_selections()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let recommendation_id = payload
        .get("recommendation_id")
        .and_then(serde_json::Value::as_str)
        .expect("recommendation id")
        .to_string();

    let uri = format!("/api/v1/advisor/recommendations/{recommendation_id}/validation");
    let response = app
        .oneshot(
            axum::http::Request::post(uri.as_str())
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"acv": 120000.0}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload.get("assessment"), Some(&json!("aligned")));
}

#[tokio::test]
async fn incomplete_submissions_are_rejected_over_http() {
    let (service, _repository, _escalations) = build_service();
    let app = advisor_router(Arc::new(service));

    let response = app
        .oneshot(
            axum::http::Request::post("/api/v1/advisor/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&SelectionSet::default()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
