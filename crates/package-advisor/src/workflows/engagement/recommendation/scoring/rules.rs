use super::super::domain::{DeploymentType, EmbeddedIntegration};
use super::super::intake::{CompletedSelections, QuestionCategory};
use super::config::WeightTable;
use super::ScoreComponent;

/// Turn a completed selection set into weighted components and their sum.
///
/// The embedded integration type never joins the base sum; it can only add
/// the configured bonus when the deployment itself is embedded.
pub(crate) fn tally_selections(
    selections: &CompletedSelections,
    weights: &WeightTable,
) -> (Vec<ScoreComponent>, u16) {
    let mut components = Vec::new();
    let mut total_score: u16 = 0;

    let mut record = |category: QuestionCategory, weight: u16, answer: &str| {
        components.push(ScoreComponent {
            category,
            weight,
            note: format!("'{answer}' carries weight {weight}"),
        });
        total_score += weight;
    };

    record(
        QuestionCategory::TeamSize,
        weights.team_size.weight(selections.team_size),
        selections.team_size.label(),
    );
    record(
        QuestionCategory::PrimaryNeed,
        weights.primary_need.weight(selections.primary_need),
        selections.primary_need.label(),
    );
    record(
        QuestionCategory::DataComplexity,
        weights.data_complexity.weight(selections.data_complexity),
        selections.data_complexity.label(),
    );
    record(
        QuestionCategory::BusinessLogic,
        weights.business_logic.weight(selections.business_logic),
        selections.business_logic.label(),
    );
    record(
        QuestionCategory::Security,
        weights.security.weight(selections.security),
        selections.security.label(),
    );
    record(
        QuestionCategory::TrainingSeats,
        weights.training_seats.weight(selections.training_seats),
        selections.training_seats.label(),
    );
    record(
        QuestionCategory::UseCases,
        weights.use_cases.weight(selections.use_cases),
        selections.use_cases.label(),
    );
    record(
        QuestionCategory::GoLiveSupport,
        weights.go_live_support.weight(selections.go_live_support),
        selections.go_live_support.label(),
    );

    if selections.deployment == DeploymentType::Embedded
        && selections.embedded_type == Some(EmbeddedIntegration::CustomActions)
    {
        components.push(ScoreComponent {
            category: QuestionCategory::EmbeddedType,
            weight: weights.embedded_custom_bonus,
            note: format!(
                "custom-action embedding adds {}",
                weights.embedded_custom_bonus
            ),
        });
        total_score += weights.embedded_custom_bonus;
    }

    (components, total_score)
}
