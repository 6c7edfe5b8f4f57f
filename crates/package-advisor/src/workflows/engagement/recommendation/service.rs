use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{RecommendationId, RecommendationStatus, SelectionSet};
use super::intake::{CompletedSelections, SelectionError};
use super::narrative::{self, NarrativeCatalog};
use super::repository::{
    AcvReview, EscalationError, EscalationNotice, EscalationPublisher, RecommendationRecord,
    RecommendationRepository, RepositoryError,
};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::validation::{AcvAssessment, AcvError, AcvPolicy};

/// Full advisory rubric: scoring tables, narrative catalog, and ACV policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub scoring: ScoringConfig,
    pub narratives: NarrativeCatalog,
    pub acv: AcvPolicy,
}

/// Service composing the intake guard, scoring engine, explainer, and
/// contract-value validator over a repository and an escalation hook.
pub struct PackageAdvisoryService<R, E> {
    engine: ScoringEngine,
    narratives: NarrativeCatalog,
    acv_policy: AcvPolicy,
    repository: Arc<R>,
    escalations: Arc<E>,
}

static RECOMMENDATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_recommendation_id() -> RecommendationId {
    let id = RECOMMENDATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecommendationId(format!("rec-{id:06}"))
}

impl<R, E> PackageAdvisoryService<R, E>
where
    R: RecommendationRepository + 'static,
    E: EscalationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, escalations: Arc<E>, config: AdvisorConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config.scoring),
            narratives: config.narratives,
            acv_policy: config.acv,
            repository,
            escalations,
        }
    }

    /// Score a submission and store the issued recommendation.
    pub fn recommend(
        &self,
        set: SelectionSet,
    ) -> Result<RecommendationRecord, AdvisoryServiceError> {
        let selections = CompletedSelections::from_set(&set)?;
        let outcome = self.engine.score(&selections);
        let explanation =
            narrative::explain(&outcome.recommendation, &selections, &self.narratives);

        let record = RecommendationRecord {
            recommendation_id: next_recommendation_id(),
            selections,
            outcome,
            explanation,
            status: RecommendationStatus::Issued,
            review: None,
            issued_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            recommendation_id = %stored.recommendation_id.0,
            package = %stored.outcome.recommendation.package_name(),
            total_score = stored.outcome.recommendation.total_score,
            "recommendation issued"
        );
        Ok(stored)
    }

    /// Check a stored recommendation against a contract value, persist the
    /// review, and escalate misaligned outcomes.
    pub fn validate(
        &self,
        recommendation_id: &RecommendationId,
        acv: f64,
    ) -> Result<AcvReview, AdvisoryServiceError> {
        let mut record = self
            .repository
            .fetch(recommendation_id)?
            .ok_or(RepositoryError::NotFound)?;

        let assessment = self
            .acv_policy
            .assess(&record.outcome.recommendation, acv)?;

        record.status = if assessment.is_aligned() {
            RecommendationStatus::Confirmed
        } else {
            RecommendationStatus::Escalated
        };
        let review = AcvReview { acv, assessment };
        record.review = Some(review.clone());
        self.repository.update(record)?;

        if let AcvAssessment::Misaligned {
            suggested_package, ..
        } = &review.assessment
        {
            let mut details = BTreeMap::new();
            details.insert("suggested_package".to_string(), suggested_package.clone());
            details.insert("acv".to_string(), format!("{acv:.2}"));
            self.escalations.publish(EscalationNotice {
                recommendation_id: recommendation_id.clone(),
                suggested_package: suggested_package.clone(),
                details,
            })?;
            warn!(
                recommendation_id = %recommendation_id.0,
                %suggested_package,
                "recommendation escalated to the services team"
            );
        }

        Ok(review)
    }

    /// Fetch a stored recommendation for API responses.
    pub fn get(
        &self,
        recommendation_id: &RecommendationId,
    ) -> Result<RecommendationRecord, AdvisoryServiceError> {
        let record = self
            .repository
            .fetch(recommendation_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the advisory service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryServiceError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Contract(#[from] AcvError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Escalation(#[from] EscalationError),
}
