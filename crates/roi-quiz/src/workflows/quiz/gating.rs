use serde::{Deserialize, Serialize};

use super::domain::{Industry, QuizAnswers};

/// One requirement that must hold before a submission is accepted.
///
/// Incomplete answers are a normal interactive state, so unmet requirements
/// are reported as data for the host to render (a disabled submit control,
/// inline hints), never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatingRequirement {
    IndustrySelected,
    TeamSizeProvided,
    FirstNameProvided,
    LastNameProvided,
    WorkEmailProvided,
    CompanyNameProvided,
    TotalEmployeesNumeric,
}

impl GatingRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::IndustrySelected => "Choose your industry",
            Self::TeamSizeProvided => "Add at least one administrator or reviewer",
            Self::FirstNameProvided => "Enter your first name",
            Self::LastNameProvided => "Enter your last name",
            Self::WorkEmailProvided => "Enter your work email",
            Self::CompanyNameProvided => "Enter your company name",
            Self::TotalEmployeesNumeric => "Enter your total number of employees",
        }
    }
}

/// Snapshot of the gating predicate for the current answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatingReport {
    pub satisfied: bool,
    pub missing: Vec<GatingRequirement>,
}

/// Evaluate the submit gate against the current answers.
///
/// The predicate holds when an industry is selected, the team has at least
/// one administrator or reviewer, the four required contact fields are
/// non-blank, and, for the private tier, the employee headcount parses.
pub fn evaluate(answers: &QuizAnswers) -> GatingReport {
    let mut missing = Vec::new();

    if answers.industry.is_none() {
        missing.push(GatingRequirement::IndustrySelected);
    }
    if answers.administrators == 0 && answers.reviewers == 0 {
        missing.push(GatingRequirement::TeamSizeProvided);
    }
    if answers.first_name.trim().is_empty() {
        missing.push(GatingRequirement::FirstNameProvided);
    }
    if answers.last_name.trim().is_empty() {
        missing.push(GatingRequirement::LastNameProvided);
    }
    if answers.work_email.trim().is_empty() {
        missing.push(GatingRequirement::WorkEmailProvided);
    }
    if answers.company_name.trim().is_empty() {
        missing.push(GatingRequirement::CompanyNameProvided);
    }
    if answers.industry == Some(Industry::Private) && answers.parsed_total_employees().is_none() {
        missing.push(GatingRequirement::TotalEmployeesNumeric);
    }

    GatingReport {
        satisfied: missing.is_empty(),
        missing,
    }
}
