mod config;
mod policy;
mod rules;

pub use config::{
    BusinessLogicWeights, DataComplexityWeights, GoLiveWeights, PriceTable, PrimaryNeedWeights,
    ScoringConfig, SecurityWeights, TeamSizeWeights, TierPrices, TierSchedule,
    TrainingSeatWeights, UseCaseWeights, WeightTable,
};

use super::domain::{Recommendation, SelectionSet};
use super::intake::{CompletedSelections, QuestionCategory, SelectionError};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to a selection set.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Guard completeness, then score. Incomplete submissions are rejected
    /// before any arithmetic runs.
    pub fn recommend(&self, set: &SelectionSet) -> Result<RecommendationOutcome, SelectionError> {
        let selections = CompletedSelections::from_set(set)?;
        Ok(self.score(&selections))
    }

    /// Score an already validated selection set. Deterministic: identical
    /// selections always produce identical outcomes.
    pub fn score(&self, selections: &CompletedSelections) -> RecommendationOutcome {
        let (components, total_score) = rules::tally_selections(selections, &self.config.weights);
        let recommendation = policy::resolve_recommendation(selections, total_score, &self.config);

        RecommendationOutcome {
            recommendation,
            components,
        }
    }
}

/// Discrete contribution to a total score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: QuestionCategory,
    pub weight: u16,
    pub note: String,
}

/// Engine output pairing the resolved recommendation with its score trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub recommendation: Recommendation,
    pub components: Vec<ScoreComponent>,
}
