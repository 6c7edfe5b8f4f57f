use serde::{Deserialize, Serialize};

/// Identifier wrapper for issued recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationId(pub String);

/// Raw questionnaire answers as the intake surface collects them.
///
/// `None` stands for the placeholder a form renders before the user picks a
/// concrete option. Completeness is enforced by the intake guard, never by
/// giving placeholders a weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    #[serde(default)]
    pub team_size: Option<TeamSize>,
    #[serde(default)]
    pub primary_need: Option<PrimaryNeed>,
    #[serde(default)]
    pub data_complexity: Option<DataComplexity>,
    #[serde(default)]
    pub business_logic: Option<BusinessLogicNeed>,
    #[serde(default)]
    pub security: Option<SecurityRequirement>,
    #[serde(default)]
    pub training_seats: Option<TrainingSeats>,
    #[serde(default)]
    pub use_cases: Option<UseCaseCount>,
    #[serde(default)]
    pub go_live_support: Option<GoLiveSupport>,
    #[serde(default)]
    pub deployment: Option<DeploymentType>,
    #[serde(default)]
    pub embedded_type: Option<EmbeddedIntegration>,
    #[serde(default)]
    pub migration: bool,
}

/// Expected number of users at go-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSize {
    UpToTen,
    TenToFifty,
    FiftyToHundred,
    EnterpriseWide,
}

impl TeamSize {
    pub const fn label(self) -> &'static str {
        match self {
            TeamSize::UpToTen => "<10 users",
            TeamSize::TenToFifty => "10-50 users",
            TeamSize::FiftyToHundred => "50-100 users",
            TeamSize::EnterpriseWide => "hundreds of users (enterprise-wide)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryNeed {
    ProofOfConcept,
    ProductionReady,
}

impl PrimaryNeed {
    pub const fn label(self) -> &'static str {
        match self {
            PrimaryNeed::ProofOfConcept => "proof of concept",
            PrimaryNeed::ProductionReady => "production-ready use case",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataComplexity {
    SingleSource,
    MultipleSources,
    ComplexIntegration,
}

impl DataComplexity {
    pub const fn label(self) -> &'static str {
        match self {
            DataComplexity::SingleSource => "single data source",
            DataComplexity::MultipleSources => "multiple data sources",
            DataComplexity::ComplexIntegration => "complex multi-source integration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLogicNeed {
    StandardAggregations,
    AdvancedFormulas,
}

impl BusinessLogicNeed {
    pub const fn label(self) -> &'static str {
        match self {
            BusinessLogicNeed::StandardAggregations => "standard aggregations",
            BusinessLogicNeed::AdvancedFormulas => "advanced formulas and custom calendars",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRequirement {
    BasicGroupLevel,
    AdvancedCompliance,
}

impl SecurityRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            SecurityRequirement::BasicGroupLevel => "basic group row-level security",
            SecurityRequirement::AdvancedCompliance => "advanced user-level, compliance-heavy security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingSeats {
    TwoSeats,
    FiveSeats,
    FifteenSeats,
    MoreThanFifteen,
}

impl TrainingSeats {
    pub const fn label(self) -> &'static str {
        match self {
            TrainingSeats::TwoSeats => "2 seats",
            TrainingSeats::FiveSeats => "5 seats",
            TrainingSeats::FifteenSeats => "15 seats",
            TrainingSeats::MoreThanFifteen => "more than 15 seats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseCount {
    Single,
    Multiple,
}

impl UseCaseCount {
    pub const fn label(self) -> &'static str {
        match self {
            UseCaseCount::Single => "a single use case",
            UseCaseCount::Multiple => "multiple use cases",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoLiveSupport {
    Guided,
    HandsOnCoBuild,
}

impl GoLiveSupport {
    pub const fn label(self) -> &'static str {
        match self {
            GoLiveSupport::Guided => "guided/advisory support",
            GoLiveSupport::HandsOnCoBuild => "hands-on co-build support",
        }
    }
}

/// Where the analytics experience runs for end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentType {
    Cloud,
    Embedded,
}

impl DeploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            DeploymentType::Cloud => "cloud",
            DeploymentType::Embedded => "embedded",
        }
    }
}

/// Sub-classification used only for embedded deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddedIntegration {
    OutOfBox,
    CustomActions,
}

impl EmbeddedIntegration {
    pub const fn label(self) -> &'static str {
        match self {
            EmbeddedIntegration::OutOfBox => "out-of-box",
            EmbeddedIntegration::CustomActions => "custom actions",
        }
    }
}

/// Complexity/scale classification of a recommended package.
///
/// Variant order matches ascending complexity so the highest allowed tier can
/// be picked with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageTier {
    Starter,
    Advanced,
    Premium,
}

impl PackageTier {
    pub const fn label(self) -> &'static str {
        match self {
            PackageTier::Starter => "Starter",
            PackageTier::Advanced => "Advanced",
            PackageTier::Premium => "Premium",
        }
    }
}

/// Top-level package category, driven by the migration flag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageFamily {
    Jumpstart,
    Modernization,
}

impl PackageFamily {
    pub const fn label(self) -> &'static str {
        match self {
            PackageFamily::Jumpstart => "Jumpstart AI",
            PackageFamily::Modernization => "Modernization",
        }
    }
}

/// Resolved package recommendation for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub family: PackageFamily,
    pub tier: PackageTier,
    pub total_score: u16,
    pub price: u32,
}

impl Recommendation {
    pub fn package_name(&self) -> String {
        format!("{} {}", self.family.label(), self.tier.label())
    }
}

/// High level status tracked for a stored recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Issued,
    Confirmed,
    Escalated,
}

impl RecommendationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationStatus::Issued => "issued",
            RecommendationStatus::Confirmed => "confirmed",
            RecommendationStatus::Escalated => "escalated",
        }
    }
}
