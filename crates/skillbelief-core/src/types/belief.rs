//! The calibrated belief returned by every inference call.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EvidenceSignal, SkillId};

/// Trajectory of the evidence relative to the overall estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    /// Recent evidence scores above the overall estimate.
    Rising,
    /// Recent evidence agrees with the overall estimate.
    Stable,
    /// Recent evidence scores below the estimate, or the evidence is stale.
    Decaying,
}

impl Trend {
    pub const ALL: &'static [Trend] = &[Self::Rising, Self::Stable, Self::Decaying];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rising => "RISING",
            Self::Stable => "STABLE",
            Self::Decaying => "DECAYING",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable belief about one person's proficiency in one skill.
///
/// Built fresh on every inference call from the full evidence history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBelief {
    pub skill_id: SkillId,
    /// Rounded posterior mean on a 0–100 scale.
    pub proficiency_mean: u8,
    /// Half-width (percentage points) of the 95% credible interval.
    pub confidence_interval: u8,
    /// When the belief was computed (the as-of instant of the call).
    pub last_updated: DateTime<Utc>,
    /// The input signals, most recent first.
    pub evidence_chain: Vec<EvidenceSignal>,
    pub trend: Trend,
}

impl SkillBelief {
    /// Lower edge of the credible interval, 0–100.
    pub fn lower_bound(&self) -> u8 {
        self.proficiency_mean.saturating_sub(self.confidence_interval)
    }

    /// Upper edge of the credible interval, 0–100.
    pub fn upper_bound(&self) -> u8 {
        self.proficiency_mean
            .saturating_add(self.confidence_interval)
            .min(100)
    }

    /// True when no evidence backs the belief.
    pub fn is_uninformed(&self) -> bool {
        self.evidence_chain.is_empty()
    }

    /// The most recent signal, if any.
    pub fn latest_evidence(&self) -> Option<&EvidenceSignal> {
        self.evidence_chain.first()
    }
}
