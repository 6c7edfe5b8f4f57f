use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::engagement::recommendation::domain::{
    BusinessLogicNeed, DataComplexity, DeploymentType, GoLiveSupport, PrimaryNeed,
    RecommendationId, SecurityRequirement, SelectionSet, TeamSize, TrainingSeats, UseCaseCount,
};
use crate::workflows::engagement::recommendation::intake::CompletedSelections;
use crate::workflows::engagement::recommendation::repository::{
    EscalationError, EscalationNotice, EscalationPublisher, RecommendationRecord,
    RecommendationRepository, RepositoryError,
};
use crate::workflows::engagement::recommendation::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::engagement::recommendation::{
    advisor_router, AdvisorConfig, PackageAdvisoryService,
};

/// The worked example from the product rubric: weights 3+2+2+1+1+2+3+1 = 15.
pub(super) fn base_selections() -> SelectionSet {
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

/// Weights 2+2+2+1+1+2+1+1 = 12, the top of the Starter band.
pub(super) fn selections_totaling_12() -> SelectionSet {
    SelectionSet {
        team_size: Some(TeamSize::TenToFifty),
        use_cases: Some(UseCaseCount::Single),
        ..base_selections()
    }
}

/// Weights 3+2+2+1+1+2+1+1 = 13, the bottom of the Advanced band.
pub(super) fn selections_totaling_13() -> SelectionSet {
    SelectionSet {
        use_cases: Some(UseCaseCount::Single),
        ..base_selections()
    }
}

/// Weights 4+2+3+3+1+3+3+1 = 20, the top of the Advanced band.
pub(super) fn selections_totaling_20() -> SelectionSet {
    SelectionSet {
        team_size: Some(TeamSize::EnterpriseWide),
        data_complexity: Some(DataComplexity::ComplexIntegration),
        business_logic: Some(BusinessLogicNeed::AdvancedFormulas),
        training_seats: Some(TrainingSeats::FifteenSeats),
        ..base_selections()
    }
}

/// Weights 4+1+3+3+3+3+3+1 = 21, the bottom of the Premium band.
pub(super) fn selections_totaling_21() -> SelectionSet {
    SelectionSet {
        team_size: Some(TeamSize::EnterpriseWide),
        primary_need: Some(PrimaryNeed::ProofOfConcept),
        data_complexity: Some(DataComplexity::ComplexIntegration),
        business_logic: Some(BusinessLogicNeed::AdvancedFormulas),
        security: Some(SecurityRequirement::AdvancedCompliance),
        training_seats: Some(TrainingSeats::FifteenSeats),
        ..base_selections()
    }
}

pub(super) fn advisor_config() -> AdvisorConfig {
    AdvisorConfig::default()
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn completed(set: SelectionSet) -> CompletedSelections {
    CompletedSelections::from_set(&set).expect("selection set is complete")
}

pub(super) fn build_service() -> (
    PackageAdvisoryService<MemoryStore, MemoryEscalations>,
    Arc<MemoryStore>,
    Arc<MemoryEscalations>,
) {
    let repository = Arc::new(MemoryStore::default());
    let escalations = Arc::new(MemoryEscalations::default());
    let service =
        PackageAdvisoryService::new(repository.clone(), escalations.clone(), advisor_config());
    (service, repository, escalations)
}

pub(super) fn advisor_router_with_service(
    service: PackageAdvisoryService<MemoryStore, MemoryEscalations>,
) -> axum::Router {
    advisor_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<RecommendationId, RecommendationRecord>>>,
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

pub(super) struct ConflictStore;

impl RecommendationRepository for ConflictStore {
    fn insert(
        &self,
        _record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: RecommendationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(
        &self,
        _id: &RecommendationId,
    ) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl RecommendationRepository for UnavailableStore {
    fn insert(
        &self,
        _record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: RecommendationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &RecommendationId,
    ) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
