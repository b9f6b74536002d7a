mod rules;
mod tables;

use serde::{Deserialize, Serialize};

use super::domain::QuizAnswers;

/// Stateless calculator applying the per-industry savings model to answers.
///
/// `compute` is total: it never fails, regardless of how incomplete or
/// malformed the answers are, so it can run on every render.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateEngine;

impl EstimateEngine {
    pub fn compute(&self, answers: &QuizAnswers) -> RoiEstimate {
        rules::estimate_for(answers)
    }
}

/// Verb used when presenting the annual dollar figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsVerb {
    Save,
    Reclaim,
}

impl SavingsVerb {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Reclaim => "Reclaim",
        }
    }
}

/// Derived figures recomputed from the answers on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub admin_hours_per_week: u32,
    pub reviewer_hours_per_week: u32,
    pub saved_per_year: u64,
    pub savings_verb: SavingsVerb,
    pub launch_weeks_faster: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_per_year: Option<u64>,
}
