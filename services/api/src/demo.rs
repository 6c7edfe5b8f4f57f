use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::{
    default_advisor_config, load_contacts, InMemoryEscalationPublisher,
    InMemoryRecommendationStore,
};
use package_advisor::error::AppError;
use package_advisor::workflows::engagement::recommendation::{
    AcvAssessment, AcvReview, BusinessLogicNeed, DataComplexity, DeploymentType,
    EmbeddedIntegration, GoLiveSupport, PackageAdvisoryService, PrimaryNeed,
    RecommendationRecord, SecurityRequirement, SelectionSet, TeamSize, TrainingSeats,
    UseCaseCount,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Number of users expected at go-live
    #[arg(long, value_enum)]
    pub(crate) team_size: Option<TeamSizeArg>,
    /// Primary need for the engagement
    #[arg(long, value_enum)]
    pub(crate) primary_need: Option<PrimaryNeedArg>,
    /// Data composition feeding the platform
    #[arg(long, value_enum)]
    pub(crate) data_complexity: Option<DataComplexityArg>,
    /// Business logic requirements
    #[arg(long, value_enum)]
    pub(crate) business_logic: Option<BusinessLogicArg>,
    /// Security requirements
    #[arg(long, value_enum)]
    pub(crate) security: Option<SecurityArg>,
    /// Training seats required
    #[arg(long, value_enum)]
    pub(crate) training_seats: Option<TrainingSeatsArg>,
    /// Number of use cases in scope
    #[arg(long, value_enum)]
    pub(crate) use_cases: Option<UseCasesArg>,
    /// Level of go-live implementation support
    #[arg(long, value_enum)]
    pub(crate) go_live_support: Option<GoLiveArg>,
    /// Deployment type
    #[arg(long, value_enum)]
    pub(crate) deployment: Option<DeploymentArg>,
    /// Embedded integration type (embedded deployments only)
    #[arg(long, value_enum)]
    pub(crate) embedded_type: Option<EmbeddedTypeArg>,
    /// Treat the engagement as a migration for an existing customer
    #[arg(long)]
    pub(crate) migration: bool,
    /// Validate the recommendation against this annual contract value
    #[arg(long)]
    pub(crate) acv: Option<f64>,
    /// Optional Region,Name CSV overriding the escalation roster
    #[arg(long)]
    pub(crate) contacts_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Contract value used for the first validation pass
    #[arg(long)]
    pub(crate) acv: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum TeamSizeArg {
    UpToTen,
    TenToFifty,
    FiftyToHundred,
    EnterpriseWide,
}

impl From<TeamSizeArg> for TeamSize {
    fn from(value: TeamSizeArg) -> Self {
        match value {
            TeamSizeArg::UpToTen => TeamSize::UpToTen,
            TeamSizeArg::TenToFifty => TeamSize::TenToFifty,
            TeamSizeArg::FiftyToHundred => TeamSize::FiftyToHundred,
            TeamSizeArg::EnterpriseWide => TeamSize::EnterpriseWide,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum PrimaryNeedArg {
    ProofOfConcept,
    ProductionReady,
}

impl From<PrimaryNeedArg> for PrimaryNeed {
    fn from(value: PrimaryNeedArg) -> Self {
        match value {
            PrimaryNeedArg::ProofOfConcept => PrimaryNeed::ProofOfConcept,
            PrimaryNeedArg::ProductionReady => PrimaryNeed::ProductionReady,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum DataComplexityArg {
    SingleSource,
    MultipleSources,
    ComplexIntegration,
}

impl From<DataComplexityArg> for DataComplexity {
    fn from(value: DataComplexityArg) -> Self {
        match value {
            DataComplexityArg::SingleSource => DataComplexity::SingleSource,
            DataComplexityArg::MultipleSources => DataComplexity::MultipleSources,
            DataComplexityArg::ComplexIntegration => DataComplexity::ComplexIntegration,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum BusinessLogicArg {
    Standard,
    Advanced,
}

impl From<BusinessLogicArg> for BusinessLogicNeed {
    fn from(value: BusinessLogicArg) -> Self {
        match value {
            BusinessLogicArg::Standard => BusinessLogicNeed::StandardAggregations,
            BusinessLogicArg::Advanced => BusinessLogicNeed::AdvancedFormulas,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum SecurityArg {
    Basic,
    Advanced,
}

impl From<SecurityArg> for SecurityRequirement {
    fn from(value: SecurityArg) -> Self {
        match value {
            SecurityArg::Basic => SecurityRequirement::BasicGroupLevel,
            SecurityArg::Advanced => SecurityRequirement::AdvancedCompliance,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum TrainingSeatsArg {
    Two,
    Five,
    Fifteen,
    MoreThanFifteen,
}

impl From<TrainingSeatsArg> for TrainingSeats {
    fn from(value: TrainingSeatsArg) -> Self {
        match value {
            TrainingSeatsArg::Two => TrainingSeats::TwoSeats,
            TrainingSeatsArg::Five => TrainingSeats::FiveSeats,
            TrainingSeatsArg::Fifteen => TrainingSeats::FifteenSeats,
            TrainingSeatsArg::MoreThanFifteen => TrainingSeats::MoreThanFifteen,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum UseCasesArg {
    Single,
    Multiple,
}

impl From<UseCasesArg> for UseCaseCount {
    fn from(value: UseCasesArg) -> Self {
        match value {
            UseCasesArg::Single => UseCaseCount::Single,
            UseCasesArg::Multiple => UseCaseCount::Multiple,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum GoLiveArg {
    Guided,
    HandsOn,
}

impl From<GoLiveArg> for GoLiveSupport {
    fn from(value: GoLiveArg) -> Self {
        match value {
            GoLiveArg::Guided => GoLiveSupport::Guided,
            GoLiveArg::HandsOn => GoLiveSupport::HandsOnCoBuild,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum DeploymentArg {
    Cloud,
    Embedded,
}

impl From<DeploymentArg> for DeploymentType {
    fn from(value: DeploymentArg) -> Self {
        match value {
            DeploymentArg::Cloud => DeploymentType::Cloud,
            DeploymentArg::Embedded => DeploymentType::Embedded,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum EmbeddedTypeArg {
    OutOfBox,
    CustomActions,
}

impl From<EmbeddedTypeArg> for EmbeddedIntegration {
    fn from(value: EmbeddedTypeArg) -> Self {
        match value {
            EmbeddedTypeArg::OutOfBox => EmbeddedIntegration::OutOfBox,
            EmbeddedTypeArg::CustomActions => EmbeddedIntegration::CustomActions,
        }
    }
}

fn selection_set_from_args(args: &RecommendArgs) -> SelectionSet {
    SelectionSet {
        team_size: args.team_size.map(TeamSize::from),
        primary_need: args.primary_need.map(PrimaryNeed::from),
        data_complexity: args.data_complexity.map(DataComplexity::from),
        business_logic: args.business_logic.map(BusinessLogicNeed::from),
        security: args.security.map(SecurityRequirement::from),
        training_seats: args.training_seats.map(TrainingSeats::from),
        use_cases: args.use_cases.map(UseCaseCount::from),
        go_live_support: args.go_live_support.map(GoLiveSupport::from),
        deployment: args.deployment.map(DeploymentType::from),
        embedded_type: args.embedded_type.map(EmbeddedIntegration::from),
        migration: args.migration,
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let mut advisor_config = default_advisor_config();
    if let Some(path) = &args.contacts_csv {
        advisor_config.acv.contacts = load_contacts(path)?;
    }

    let repository = Arc::new(InMemoryRecommendationStore::default());
    let escalations = Arc::new(InMemoryEscalationPublisher::default());
    let service = PackageAdvisoryService::new(repository, escalations, advisor_config);

    let selections = selection_set_from_args(&args);
    let record = service.recommend(selections)?;
    print_record(&record);

    if let Some(acv) = args.acv {
        let review = service.validate(&record.recommendation_id, acv)?;
        print_review(&review);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Engagement package advisor demo");

    let repository = Arc::new(InMemoryRecommendationStore::default());
    let escalations = Arc::new(InMemoryEscalationPublisher::default());
    let service = PackageAdvisoryService::new(
        repository,
        escalations.clone(),
        default_advisor_config(),
    );

    println!("\nScenario 1: production-ready cloud rollout");
    let record = service.recommend(sample_cloud_selections())?;
    print_record(&record);
    let acv = args.acv.unwrap_or(120_000.0);
    let review = service.validate(&record.recommendation_id, acv)?;
    print_review(&review);

    println!("\nScenario 2: enterprise-wide embedded build on a small contract");
    let record = service.recommend(sample_enterprise_selections())?;
    print_record(&record);
    let review = service.validate(&record.recommendation_id, 50_000.0)?;
    print_review(&review);

    println!(
        "\n{} escalation notice(s) published during the demo",
        escalations.events().len()
    );
    Ok(())
}

fn sample_cloud_selections() -> SelectionSet {
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

fn sample_enterprise_selections() -> SelectionSet {
    SelectionSet {
        team_size: Some(TeamSize::EnterpriseWide),
        primary_need: Some(PrimaryNeed::ProductionReady),
        data_complexity: Some(DataComplexity::ComplexIntegration),
        business_logic: Some(BusinessLogicNeed::AdvancedFormulas),
        security: Some(SecurityRequirement::AdvancedCompliance),
        training_seats: Some(TrainingSeats::MoreThanFifteen),
        use_cases: Some(UseCaseCount::Multiple),
        go_live_support: Some(GoLiveSupport::HandsOnCoBuild),
        deployment: Some(DeploymentType::Embedded),
        embedded_type: Some(EmbeddedIntegration::CustomActions),
        migration: false,
    }
}

fn print_record(record: &RecommendationRecord) {
    let recommendation = &record.outcome.recommendation;
    println!(
        "Recommended package: {} (score {}, approx. {})",
        recommendation.package_name(),
        recommendation.total_score,
        format_usd(recommendation.price)
    );
    println!("Score breakdown:");
    for component in &record.outcome.components {
        println!(
            "  - {}: {}",
            component.category.label(),
            component.note
        );
    }
    println!("Reasoning:");
    for reason in &record.explanation.reasons {
        println!("  - {reason}");
    }
    println!("Reference material: {}", record.explanation.reference_url);
}

fn print_review(review: &AcvReview) {
    match &review.assessment {
        AcvAssessment::Aligned => {
            println!(
                "ACV {} confirms the recommendation. Proceed confidently.",
                format_usd(review.acv as u32)
            );
        }
        AcvAssessment::Misaligned { contacts, .. } => {
            println!(
                "Rethink for ACV {}: {}.",
                format_usd(review.acv as u32),
                review.assessment.summary()
            );
            println!("Escalation contacts:");
            for contact in contacts {
                println!("  - {} ({})", contact.name, contact.region);
            }
        }
    }
}

fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    format!("${formatted}")
}
