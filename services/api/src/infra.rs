use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use package_advisor::error::AppError;
use package_advisor::workflows::engagement::recommendation::{
    contacts_from_reader, AdvisorConfig, EscalationContact, EscalationError, EscalationNotice,
    EscalationPublisher, RecommendationId, RecommendationRecord, RecommendationRepository,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationStore {
    records: Arc<Mutex<HashMap<RecommendationId, RecommendationRecord>>>,
}

impl RecommendationRepository for InMemoryRecommendationStore {
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
        if guard.contains_key(&record.recommendation_id) {
            guard.insert(record.recommendation_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
pub(crate) struct InMemoryEscalationPublisher {
    events: Arc<Mutex<Vec<EscalationNotice>>>,
}

impl EscalationPublisher for InMemoryEscalationPublisher {
    fn publish(&self, notice: EscalationNotice) -> Result<(), EscalationError> {
        let mut guard = self.events.lock().expect("escalation mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryEscalationPublisher {
    pub(crate) fn events(&self) -> Vec<EscalationNotice> {
        self.events.lock().expect("escalation mutex poisoned").clone()
    }
}

pub(crate) fn default_advisor_config() -> AdvisorConfig {
    AdvisorConfig::default()
}

/// Load an escalation roster override from a `Region,Name` CSV file.
pub(crate) fn load_contacts(path: &Path) -> Result<Vec<EscalationContact>, AppError> {
    let file = std::fs::File::open(path)?;
    Ok(contacts_from_reader(file)?)
}
