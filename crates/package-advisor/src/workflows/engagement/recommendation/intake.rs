use serde::{Deserialize, Serialize};

use super::domain::{
    BusinessLogicNeed, DataComplexity, DeploymentType, EmbeddedIntegration, GoLiveSupport,
    PrimaryNeed, SecurityRequirement, SelectionSet, TeamSize, TrainingSeats, UseCaseCount,
};

/// Questionnaire categories, used to report gaps and to tag score components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    TeamSize,
    PrimaryNeed,
    DataComplexity,
    BusinessLogic,
    Security,
    TrainingSeats,
    UseCases,
    GoLiveSupport,
    Deployment,
    EmbeddedType,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionCategory::TeamSize => "team size",
            QuestionCategory::PrimaryNeed => "primary need",
            QuestionCategory::DataComplexity => "data complexity",
            QuestionCategory::BusinessLogic => "business logic needs",
            QuestionCategory::Security => "security requirements",
            QuestionCategory::TrainingSeats => "training seats",
            QuestionCategory::UseCases => "use-case count",
            QuestionCategory::GoLiveSupport => "go-live support",
            QuestionCategory::Deployment => "deployment type",
            QuestionCategory::EmbeddedType => "embedded integration type",
        }
    }
}

/// Rejection raised before any score arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection set incomplete, unanswered: {0:?}")]
    Incomplete(Vec<QuestionCategory>),
}

/// A selection set with every required answer present.
///
/// The embedded integration type stays optional: it only matters for embedded
/// deployments and the intake form leaves it unanswered otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSelections {
    pub team_size: TeamSize,
    pub primary_need: PrimaryNeed,
    pub data_complexity: DataComplexity,
    pub business_logic: BusinessLogicNeed,
    pub security: SecurityRequirement,
    pub training_seats: TrainingSeats,
    pub use_cases: UseCaseCount,
    pub go_live_support: GoLiveSupport,
    pub deployment: DeploymentType,
    pub embedded_type: Option<EmbeddedIntegration>,
    pub migration: bool,
}

impl CompletedSelections {
    /// Validate completeness and lift the answers out of their placeholders.
    pub fn from_set(set: &SelectionSet) -> Result<Self, SelectionError> {
        match (
            set.team_size,
            set.primary_need,
            set.data_complexity,
            set.business_logic,
            set.security,
            set.training_seats,
            set.use_cases,
            set.go_live_support,
            set.deployment,
        ) {
            (
                Some(team_size),
                Some(primary_need),
                Some(data_complexity),
                Some(business_logic),
                Some(security),
                Some(training_seats),
                Some(use_cases),
                Some(go_live_support),
                Some(deployment),
            ) => Ok(Self {
                team_size,
                primary_need,
                data_complexity,
                business_logic,
                security,
                training_seats,
                use_cases,
                go_live_support,
                deployment,
                embedded_type: set.embedded_type,
                migration: set.migration,
            }),
            _ => Err(SelectionError::Incomplete(unanswered_categories(set))),
        }
    }
}

fn unanswered_categories(set: &SelectionSet) -> Vec<QuestionCategory> {
    let mut unanswered = Vec::new();
    if set.team_size.is_none() {
        unanswered.push(QuestionCategory::TeamSize);
    }
    if set.primary_need.is_none() {
        unanswered.push(QuestionCategory::PrimaryNeed);
    }
    if set.data_complexity.is_none() {
        unanswered.push(QuestionCategory::DataComplexity);
    }
    if set.business_logic.is_none() {
        unanswered.push(QuestionCategory::BusinessLogic);
    }
    if set.security.is_none() {
        unanswered.push(QuestionCategory::Security);
    }
    if set.training_seats.is_none() {
        unanswered.push(QuestionCategory::TrainingSeats);
    }
    if set.use_cases.is_none() {
        unanswered.push(QuestionCategory::UseCases);
    }
    if set.go_live_support.is_none() {
        unanswered.push(QuestionCategory::GoLiveSupport);
    }
    if set.deployment.is_none() {
        unanswered.push(QuestionCategory::Deployment);
    }
    unanswered
}
