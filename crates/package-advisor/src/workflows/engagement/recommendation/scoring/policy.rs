use super::super::domain::{PackageFamily, Recommendation};
use super::super::intake::CompletedSelections;
use super::config::ScoringConfig;

/// Resolve the tallied score into a concrete package recommendation.
pub(crate) fn resolve_recommendation(
    selections: &CompletedSelections,
    total_score: u16,
    config: &ScoringConfig,
) -> Recommendation {
    let tier = config.tiers.classify(total_score);
    let family = if selections.migration {
        PackageFamily::Modernization
    } else {
        PackageFamily::Jumpstart
    };
    let price = config.prices.lookup(family, tier);

    Recommendation {
        family,
        tier,
        total_score,
        price,
    }
}
