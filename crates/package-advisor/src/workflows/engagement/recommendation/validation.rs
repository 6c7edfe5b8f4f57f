use serde::{Deserialize, Serialize};

use super::domain::{PackageTier, Recommendation};

/// Escalation contact for manual follow-up, by sales region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationContact {
    pub region: String,
    pub name: String,
}

/// Contract-value rejection, raised before any assessment is produced.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AcvError {
    #[error("annual contract value must be greater than zero, got {0}")]
    NonPositive(f64),
}

/// Budget bands mapping an ACV to the tiers it supports, plus the roster
/// attached to misaligned outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcvPolicy {
    pub advanced_floor: f64,
    pub premium_floor: f64,
    pub contacts: Vec<EscalationContact>,
}

impl Default for AcvPolicy {
    fn default() -> Self {
        Self {
            advanced_floor: 100_000.0,
            premium_floor: 150_000.0,
            contacts: default_contacts(),
        }
    }
}

fn default_contacts() -> Vec<EscalationContact> {
    [
        ("NA", "MJ Densmore"),
        ("NA", "Carolyn Chupa"),
        ("EMEA", "Camilla Tanzi"),
        ("EMEA", "Hetarth Chokshi"),
        ("Scale", "Arjun Krishnan"),
    ]
    .into_iter()
    .map(|(region, name)| EscalationContact {
        region: region.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Consistency check of a recommendation against the contract value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcvAssessment {
    Aligned,
    Misaligned {
        allowed: Vec<PackageTier>,
        suggested: PackageTier,
        suggested_package: String,
        contacts: Vec<EscalationContact>,
    },
}

impl AcvAssessment {
    pub fn is_aligned(&self) -> bool {
        matches!(self, AcvAssessment::Aligned)
    }

    pub fn summary(&self) -> String {
        match self {
            AcvAssessment::Aligned => {
                "the recommendation aligns with the contract value".to_string()
            }
            AcvAssessment::Misaligned {
                allowed,
                suggested_package,
                ..
            } => {
                let supported = allowed
                    .iter()
                    .map(|tier| tier.label())
                    .collect::<Vec<_>>()
                    .join(" or ");
                format!(
                    "the contract value supports the {supported} tier; suggest {suggested_package} instead, or reach out to the services team for guidance"
                )
            }
        }
    }
}

impl AcvPolicy {
    /// Tiers a contract value can fund, per the fixed half-open bands.
    pub fn allowed_tiers(&self, acv: f64) -> Vec<PackageTier> {
        if acv < self.advanced_floor {
            vec![PackageTier::Starter, PackageTier::Advanced]
        } else if acv < self.premium_floor {
            vec![PackageTier::Advanced]
        } else {
            vec![PackageTier::Premium]
        }
    }

    /// Judge a recommendation against the contract value.
    ///
    /// A misaligned outcome suggests the highest-complexity allowed tier in
    /// the recommendation's own family and attaches the escalation roster.
    pub fn assess(
        &self,
        recommendation: &Recommendation,
        acv: f64,
    ) -> Result<AcvAssessment, AcvError> {
        if acv <= 0.0 {
            return Err(AcvError::NonPositive(acv));
        }

        let allowed = self.allowed_tiers(acv);
        if allowed.contains(&recommendation.tier) {
            return Ok(AcvAssessment::Aligned);
        }

        let suggested = allowed
            .iter()
            .copied()
            .max()
            .unwrap_or(PackageTier::Starter);
        let suggested_package = format!(
            "{} {}",
            recommendation.family.label(),
            suggested.label()
        );

        Ok(AcvAssessment::Misaligned {
            allowed,
            suggested,
            suggested_package,
            contacts: self.contacts.clone(),
        })
    }
}
