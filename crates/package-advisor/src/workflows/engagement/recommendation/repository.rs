use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{RecommendationId, RecommendationStatus};
use super::intake::CompletedSelections;
use super::narrative::Explanation;
use super::scoring::RecommendationOutcome;
use super::validation::AcvAssessment;

/// One contract-value check applied to a stored recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcvReview {
    pub acv: f64,
    pub assessment: AcvAssessment,
}

/// Stored wrapper around one issued recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub recommendation_id: RecommendationId,
    pub selections: CompletedSelections,
    pub outcome: RecommendationOutcome,
    pub explanation: Explanation,
    pub status: RecommendationStatus,
    pub review: Option<AcvReview>,
    pub issued_at: DateTime<Utc>,
}

impl RecommendationRecord {
    pub fn validation_rationale(&self) -> String {
        match &self.review {
            Some(review) => review.assessment.summary(),
            None => "pending contract-value validation".to_string(),
        }
    }

    pub fn view(&self) -> RecommendationView {
        let recommendation = &self.outcome.recommendation;
        RecommendationView {
            recommendation_id: self.recommendation_id.clone(),
            package: recommendation.package_name(),
            family: recommendation.family.label(),
            tier: recommendation.tier.label(),
            total_score: recommendation.total_score,
            price: recommendation.price,
            status: self.status.label(),
            reasons: self.explanation.reasons.clone(),
            reference_url: self.explanation.reference_url.clone(),
            validation_rationale: self.validation_rationale(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait RecommendationRepository: Send + Sync {
    fn insert(&self, record: RecommendationRecord)
        -> Result<RecommendationRecord, RepositoryError>;
    fn update(&self, record: RecommendationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &RecommendationId)
        -> Result<Option<RecommendationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired when a validation flags a misaligned recommendation.
pub trait EscalationPublisher: Send + Sync {
    fn publish(&self, notice: EscalationNotice) -> Result<(), EscalationError>;
}

/// Escalation payload handed to the services team integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationNotice {
    pub recommendation_id: RecommendationId,
    pub suggested_package: String,
    pub details: BTreeMap<String, String>,
}

/// Escalation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum EscalationError {
    #[error("escalation transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a stored recommendation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub recommendation_id: RecommendationId,
    pub package: String,
    pub family: &'static str,
    pub tier: &'static str,
    pub total_score: u16,
    pub price: u32,
    pub status: &'static str,
    pub reasons: Vec<String>,
    pub reference_url: String,
    pub validation_rationale: String,
}
