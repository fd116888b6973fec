//! Evidence signals and their source categories.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SkillId;
use crate::constants::UNKNOWN_SOURCE_RELIABILITY;

/// Category of an evidence source.
///
/// The set is closed. Category names the engine does not recognise are
/// absorbed by `Unknown` at the parse boundary rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// The person's own claim of proficiency.
    SelfReported,
    /// Automated analysis of the person's code repositories.
    CodeRepository,
    /// Review by a colleague or peer.
    PeerReview,
    /// Supervised, identity-checked examination.
    ProctoredExam,
    /// Completion of a learning module or course.
    LearningModule,
    /// Any category outside the known table.
    #[serde(other)]
    Unknown,
}

impl SourceType {
    /// Every known category, excluding `Unknown`.
    pub const ALL: &'static [SourceType] = &[
        Self::SelfReported,
        Self::CodeRepository,
        Self::PeerReview,
        Self::ProctoredExam,
        Self::LearningModule,
    ];

    /// Default reliability weight in [0.0, 1.0].
    ///
    /// Total over the enum; `Unknown` maps to the documented 0.5 fallback.
    pub fn default_reliability(self) -> f64 {
        match self {
            Self::SelfReported => 0.10,
            Self::CodeRepository => 0.75,
            Self::PeerReview => 0.60,
            Self::ProctoredExam => 0.95,
            Self::LearningModule => 0.40,
            Self::Unknown => UNKNOWN_SOURCE_RELIABILITY,
        }
    }

    /// Category name as used in serialized evidence and config keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::SelfReported => "self_reported",
            Self::CodeRepository => "code_repository",
            Self::PeerReview => "peer_review",
            Self::ProctoredExam => "proctored_exam",
            Self::LearningModule => "learning_module",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceType {
    type Err = Infallible;

    /// Accepts snake_case, kebab-case, and any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Ok(Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == key)
            .unwrap_or(Self::Unknown))
    }
}

/// One piece of evidence about a person's proficiency in a skill.
///
/// Produced by the ingestion layer; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceSignal {
    pub skill_id: SkillId,
    pub source_type: SourceType,
    /// The source's own assessment, nominally in [0, 100].
    pub raw_score: f64,
    /// Per-signal override of the source-type reliability, nominally in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
    /// When the evidence was produced (not when it was ingested).
    pub timestamp: DateTime<Utc>,
    /// Provenance note, carried through for display only.
    #[serde(default)]
    pub description: String,
}

impl EvidenceSignal {
    pub fn new(
        skill_id: impl Into<SkillId>,
        source_type: SourceType,
        raw_score: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            skill_id: skill_id.into(),
            source_type,
            raw_score,
            reliability: None,
            timestamp,
            description: String::new(),
        }
    }

    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = Some(reliability);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Raw score clamped to [0, 100]. `None` when the score is NaN.
    pub fn clamped_score(&self) -> Option<f64> {
        if self.raw_score.is_nan() {
            None
        } else {
            Some(self.raw_score.clamp(0.0, 100.0))
        }
    }

    /// Raw score mapped onto [0.0, 1.0]. `None` when the score is NaN.
    pub fn normalized_score(&self) -> Option<f64> {
        self.clamped_score().map(|s| s / 100.0)
    }

    /// The per-signal reliability override, clamped to [0.0, 1.0].
    ///
    /// Non-finite overrides are treated as absent.
    pub fn explicit_reliability(&self) -> Option<f64> {
        self.reliability
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, 1.0))
    }
}
