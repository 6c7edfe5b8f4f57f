use serde::{Deserialize, Serialize};

use super::domain::{DeploymentType, PackageTier, Recommendation};
use super::intake::CompletedSelections;

/// Every tier currently points at the same deck; the catalog still carries one
/// URL per tier so the links can diverge without code changes.
const REFERENCE_URL: &str = "https://docs.google.com/presentation/d/1pM38OTjtXXOGec_amVXO_dqnvfk2R24uGgjfPyE8UPI/edit#slide=id.g31b73a28df8_1_1472";

/// Canned narrative for one package tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierNarrative {
    pub complexity_label: String,
    pub feature_summary: String,
    pub reference_url: String,
}

/// Fixed narrative strings keyed by tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeCatalog {
    pub starter: TierNarrative,
    pub advanced: TierNarrative,
    pub premium: TierNarrative,
}

impl NarrativeCatalog {
    pub fn for_tier(&self, tier: PackageTier) -> &TierNarrative {
        match tier {
            PackageTier::Starter => &self.starter,
            PackageTier::Advanced => &self.advanced,
            PackageTier::Premium => &self.premium,
        }
    }
}

impl Default for NarrativeCatalog {
    fn default() -> Self {
        Self {
            starter: TierNarrative {
                complexity_label: "low complexity/scale".to_string(),
                feature_summary: "light onboarding, core platform setup, basic training (2 users), \
                                  1 starter dashboard, and best practices enablement."
                    .to_string(),
                reference_url: REFERENCE_URL.to_string(),
            },
            advanced: TierNarrative {
                complexity_label: "medium complexity/scale".to_string(),
                feature_summary: "polished use case deployment, guided implementation, training \
                                  for 5 users, rollout planning, and embedding best practices."
                    .to_string(),
                reference_url: REFERENCE_URL.to_string(),
            },
            premium: TierNarrative {
                complexity_label: "high complexity/scale".to_string(),
                feature_summary: "advanced deployment, co-development, training for 15+ users, \
                                  complex integrations, iterative rollout, and strategic \
                                  partnership."
                    .to_string(),
                reference_url: REFERENCE_URL.to_string(),
            },
        }
    }
}

/// Ordered justification sentences plus the reference material link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub reasons: Vec<String>,
    pub reference_url: String,
}

/// Render the justification for a recommendation.
///
/// Sentence order is fixed: tier narrative, matching features, deployment
/// branch, migration branch.
pub fn explain(
    recommendation: &Recommendation,
    selections: &CompletedSelections,
    catalog: &NarrativeCatalog,
) -> Explanation {
    let narrative = catalog.for_tier(recommendation.tier);
    let mut reasons = Vec::with_capacity(4);

    reasons.push(format!(
        "This recommendation is based on your selections indicating {}, which aligns with the {} package.",
        narrative.complexity_label,
        recommendation.package_name()
    ));
    reasons.push(format!(
        "Key matching features: {}",
        narrative.feature_summary
    ));

    reasons.push(match selections.deployment {
        DeploymentType::Embedded => match selections.embedded_type {
            Some(kind) => format!(
                "Deployment type is embedded analytics with the {} configuration, extending in-product embedding capabilities.",
                kind.label()
            ),
            None => "Deployment type is embedded analytics.".to_string(),
        },
        DeploymentType::Cloud => {
            "Deployment type is cloud, focusing on hosted analytics platform functionality."
                .to_string()
        }
    });

    reasons.push(if selections.migration {
        "As a migration project, this includes use case modernization workshops, dashboard \
         migration support, and change management."
            .to_string()
    } else {
        "This engagement focuses on new onboarding with platform configuration and guided \
         assistant rollout."
            .to_string()
    });

    Explanation {
        reasons,
        reference_url: narrative.reference_url.clone(),
    }
}
