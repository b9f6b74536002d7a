use serde::{Deserialize, Serialize};

/// Industry tier selected in the first questionnaire step.
///
/// Every formula site matches exhaustively on this enum, so adding a tier
/// forces each arm to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Nonprofit,
    Public,
    Private,
}

impl Industry {
    pub const fn ordered() -> [Self; 3] {
        [Self::Nonprofit, Self::Public, Self::Private]
    }

    /// Stable identifier used on the submission wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nonprofit => "nonprofit",
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    /// Display label shown to the visitor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nonprofit => "Nonprofit Sector",
            Self::Public => "Public Sector",
            Self::Private => "Private Sector",
        }
    }
}

/// Lifecycle of a quiz session's submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Revealed,
}

impl SubmissionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Revealed => "revealed",
        }
    }
}

pub const ADMINISTRATORS_MAX: u32 = 25;
pub const REVIEWERS_MAX: u32 = 100;
pub const AVERAGE_SALARY_MIN: u32 = 10_000;
pub const AVERAGE_SALARY_MAX: u32 = 250_000;
pub const AVERAGE_SALARY_STEP: u32 = 1_000;
pub const LAUNCH_POSITION_MIN: u32 = 1;
pub const LAUNCH_POSITION_MAX: u32 = 7;

/// Flat record of everything the visitor has answered so far.
///
/// The record holds raw values and performs no validation; completeness is
/// judged by the gating module and derived figures by the estimate engine.
/// `launch_time_months` is a slider position in
/// [`LAUNCH_POSITION_MIN`]..=[`LAUNCH_POSITION_MAX`] naming a qualitative
/// time-to-launch bucket, not a literal month count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub industry: Option<Industry>,
    pub administrators: u32,
    pub reviewers: u32,
    pub average_salary: u32,
    pub launch_time_months: u32,
    pub total_employees: String,
    pub first_name: String,
    pub last_name: String,
    pub work_email: String,
    pub company_name: String,
    pub phone: String,
}

impl Default for QuizAnswers {
    fn default() -> Self {
        Self {
            industry: None,
            administrators: 0,
            reviewers: 0,
            average_salary: AVERAGE_SALARY_MIN,
            launch_time_months: LAUNCH_POSITION_MIN,
            total_employees: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            work_email: String::new(),
            company_name: String::new(),
            phone: String::new(),
        }
    }
}

impl QuizAnswers {
    /// Replace exactly one field with the supplied value.
    pub fn apply(&mut self, update: AnswerUpdate) {
        match update {
            AnswerUpdate::Industry(industry) => self.industry = Some(industry),
            AnswerUpdate::Administrators(count) => self.administrators = count,
            AnswerUpdate::Reviewers(count) => self.reviewers = count,
            AnswerUpdate::AverageSalary(salary) => self.average_salary = salary,
            AnswerUpdate::LaunchTimeMonths(position) => self.launch_time_months = position,
            AnswerUpdate::TotalEmployees(raw) => self.total_employees = raw,
            AnswerUpdate::FirstName(value) => self.first_name = value,
            AnswerUpdate::LastName(value) => self.last_name = value,
            AnswerUpdate::WorkEmail(value) => self.work_email = value,
            AnswerUpdate::CompanyName(value) => self.company_name = value,
            AnswerUpdate::Phone(value) => self.phone = value,
        }
    }

    /// Employee headcount parsed from the free-text field, `None` when blank
    /// or not a non-negative integer.
    pub fn parsed_total_employees(&self) -> Option<u64> {
        let trimmed = self.total_employees.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<u64>().ok()
    }
}

/// Keyed single-field update, one variant per answer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AnswerUpdate {
    Industry(Industry),
    Administrators(u32),
    Reviewers(u32),
    AverageSalary(u32),
    LaunchTimeMonths(u32),
    TotalEmployees(String),
    FirstName(String),
    LastName(String),
    WorkEmail(String),
    CompanyName(String),
    Phone(String),
}
