//! Engagement package scoring, explanation, and contract-value validation.
//!
//! The engine, explainer, and validator are pure functions over swappable
//! configuration tables. The service wires them to a repository (the caller's
//! session store) and an escalation hook for misaligned validations.

pub mod domain;
pub mod intake;
pub mod narrative;
pub mod repository;
pub mod roster;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BusinessLogicNeed, DataComplexity, DeploymentType, EmbeddedIntegration, GoLiveSupport,
    PackageFamily, PackageTier, PrimaryNeed, Recommendation, RecommendationId,
    RecommendationStatus, SecurityRequirement, SelectionSet, TeamSize, TrainingSeats,
    UseCaseCount,
};
pub use intake::{CompletedSelections, QuestionCategory, SelectionError};
pub use narrative::{explain, Explanation, NarrativeCatalog, TierNarrative};
pub use repository::{
    AcvReview, EscalationError, EscalationNotice, EscalationPublisher, RecommendationRecord,
    RecommendationRepository, RecommendationView, RepositoryError,
};
pub use roster::{contacts_from_reader, RosterError};
pub use router::advisor_router;
pub use scoring::{
    PriceTable, RecommendationOutcome, ScoreComponent, ScoringConfig, ScoringEngine, TierPrices,
    TierSchedule, WeightTable,
};
pub use service::{AdvisorConfig, AdvisoryServiceError, PackageAdvisoryService};
pub use validation::{AcvAssessment, AcvError, AcvPolicy, EscalationContact};
