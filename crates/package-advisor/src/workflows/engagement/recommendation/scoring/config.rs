use serde::{Deserialize, Serialize};

use super::super::domain::{
    BusinessLogicNeed, DataComplexity, GoLiveSupport, PackageFamily, PackageTier, PrimaryNeed,
    SecurityRequirement, TeamSize, TrainingSeats, UseCaseCount,
};

/// Rubric configuration driving the recommendation engine.
///
/// Everything here is versioned data: tests swap alternate tables in without
/// touching the decision logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: WeightTable,
    pub tiers: TierSchedule,
    pub prices: PriceTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            tiers: TierSchedule::default(),
            prices: PriceTable::default(),
        }
    }
}

/// Static choice weights for the eight scored categories plus the embedding
/// bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    pub team_size: TeamSizeWeights,
    pub primary_need: PrimaryNeedWeights,
    pub data_complexity: DataComplexityWeights,
    pub business_logic: BusinessLogicWeights,
    pub security: SecurityWeights,
    pub training_seats: TrainingSeatWeights,
    pub use_cases: UseCaseWeights,
    pub go_live_support: GoLiveWeights,
    /// Added on top of the base sum for custom-action embedding only.
    pub embedded_custom_bonus: u16,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            team_size: TeamSizeWeights {
                up_to_ten: 1,
                ten_to_fifty: 2,
                fifty_to_hundred: 3,
                enterprise_wide: 4,
            },
            primary_need: PrimaryNeedWeights {
                proof_of_concept: 1,
                production_ready: 2,
            },
            data_complexity: DataComplexityWeights {
                single_source: 1,
                multiple_sources: 2,
                complex_integration: 3,
            },
            business_logic: BusinessLogicWeights {
                standard_aggregations: 1,
                advanced_formulas: 3,
            },
            security: SecurityWeights {
                basic_group_level: 1,
                advanced_compliance: 3,
            },
            training_seats: TrainingSeatWeights {
                two_seats: 1,
                five_seats: 2,
                fifteen_seats: 3,
                more_than_fifteen: 3,
            },
            use_cases: UseCaseWeights {
                single: 1,
                multiple: 3,
            },
            go_live_support: GoLiveWeights {
                guided: 1,
                hands_on_co_build: 3,
            },
            embedded_custom_bonus: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSizeWeights {
    pub up_to_ten: u16,
    pub ten_to_fifty: u16,
    pub fifty_to_hundred: u16,
    pub enterprise_wide: u16,
}

impl TeamSizeWeights {
    pub fn weight(&self, choice: TeamSize) -> u16 {
        match choice {
            TeamSize::UpToTen => self.up_to_ten,
            TeamSize::TenToFifty => self.ten_to_fifty,
            TeamSize::FiftyToHundred => self.fifty_to_hundred,
            TeamSize::EnterpriseWide => self.enterprise_wide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryNeedWeights {
    pub proof_of_concept: u16,
    pub production_ready: u16,
}

impl PrimaryNeedWeights {
    pub fn weight(&self, choice: PrimaryNeed) -> u16 {
        match choice {
            PrimaryNeed::ProofOfConcept => self.proof_of_concept,
            PrimaryNeed::ProductionReady => self.production_ready,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataComplexityWeights {
    pub single_source: u16,
    pub multiple_sources: u16,
    pub complex_integration: u16,
}

impl DataComplexityWeights {
    pub fn weight(&self, choice: DataComplexity) -> u16 {
        match choice {
            DataComplexity::SingleSource => self.single_source,
            DataComplexity::MultipleSources => self.multiple_sources,
            DataComplexity::ComplexIntegration => self.complex_integration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessLogicWeights {
    pub standard_aggregations: u16,
    pub advanced_formulas: u16,
}

impl BusinessLogicWeights {
    pub fn weight(&self, choice: BusinessLogicNeed) -> u16 {
        match choice {
            BusinessLogicNeed::StandardAggregations => self.standard_aggregations,
            BusinessLogicNeed::AdvancedFormulas => self.advanced_formulas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityWeights {
    pub basic_group_level: u16,
    pub advanced_compliance: u16,
}

impl SecurityWeights {
    pub fn weight(&self, choice: SecurityRequirement) -> u16 {
        match choice {
            SecurityRequirement::BasicGroupLevel => self.basic_group_level,
            SecurityRequirement::AdvancedCompliance => self.advanced_compliance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSeatWeights {
    pub two_seats: u16,
    pub five_seats: u16,
    pub fifteen_seats: u16,
    pub more_than_fifteen: u16,
}

impl TrainingSeatWeights {
    pub fn weight(&self, choice: TrainingSeats) -> u16 {
        match choice {
            TrainingSeats::TwoSeats => self.two_seats,
            TrainingSeats::FiveSeats => self.five_seats,
            TrainingSeats::FifteenSeats => self.fifteen_seats,
            TrainingSeats::MoreThanFifteen => self.more_than_fifteen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseWeights {
    pub single: u16,
    pub multiple: u16,
}

impl UseCaseWeights {
    pub fn weight(&self, choice: UseCaseCount) -> u16 {
        match choice {
            UseCaseCount::Single => self.single,
            UseCaseCount::Multiple => self.multiple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoLiveWeights {
    pub guided: u16,
    pub hands_on_co_build: u16,
}

impl GoLiveWeights {
    pub fn weight(&self, choice: GoLiveSupport) -> u16 {
        match choice {
            GoLiveSupport::Guided => self.guided,
            GoLiveSupport::HandsOnCoBuild => self.hands_on_co_build,
        }
    }
}

/// Tier thresholds, evaluated ascending with inclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSchedule {
    pub starter_ceiling: u16,
    pub advanced_ceiling: u16,
}

impl TierSchedule {
    pub fn classify(&self, total_score: u16) -> PackageTier {
        if total_score <= self.starter_ceiling {
            PackageTier::Starter
        } else if total_score <= self.advanced_ceiling {
            PackageTier::Advanced
        } else {
            PackageTier::Premium
        }
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            starter_ceiling: 12,
            advanced_ceiling: 20,
        }
    }
}

/// Fixed Family x Tier price table, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub jumpstart: TierPrices,
    pub modernization: TierPrices,
}

impl PriceTable {
    pub fn lookup(&self, family: PackageFamily, tier: PackageTier) -> u32 {
        match family {
            PackageFamily::Jumpstart => self.jumpstart.for_tier(tier),
            PackageFamily::Modernization => self.modernization.for_tier(tier),
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            jumpstart: TierPrices {
                starter: 5_000,
                advanced: 20_000,
                premium: 60_000,
            },
            modernization: TierPrices {
                starter: 20_000,
                advanced: 50_000,
                premium: 80_000,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrices {
    pub starter: u32,
    pub advanced: u32,
    pub premium: u32,
}

impl TierPrices {
    pub fn for_tier(&self, tier: PackageTier) -> u32 {
        match tier {
            PackageTier::Starter => self.starter,
            PackageTier::Advanced => self.advanced,
            PackageTier::Premium => self.premium,
        }
    }
}
