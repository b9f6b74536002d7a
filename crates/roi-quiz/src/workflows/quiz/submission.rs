use serde::{Deserialize, Serialize};

use super::domain::{Industry, QuizAnswers};
use super::estimate::RoiEstimate;
use crate::config::CalculatorConfig;

/// Single name/value pair in the order-sensitive submission field list.
/// Every value crosses the wire as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Page and tracking context reported alongside the field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContext {
    pub page_uri: String,
    pub page_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hutk: Option<String>,
}

impl SubmissionContext {
    /// Layer request-scoped values over the captured base context.
    pub fn with_overrides(mut self, overrides: ContextOverrides) -> Self {
        if let Some(page_uri) = overrides.page_uri {
            self.page_uri = page_uri;
        }
        if let Some(page_name) = overrides.page_name {
            self.page_name = page_name;
        }
        if overrides.hutk.is_some() {
            self.hutk = overrides.hutk;
        }
        self
    }
}

/// Per-request context adjustments supplied by the hosting adapter, e.g. the
/// actual page the visitor is on or a tracking cookie read from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextOverrides {
    pub page_uri: Option<String>,
    pub page_name: Option<String>,
    pub hutk: Option<String>,
}

/// Complete submission payload; serializing it yields the wire body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub fields: Vec<FormField>,
    pub context: SubmissionContext,
}

impl FormSubmission {
    /// Assemble the ordered field list from answers and derived figures.
    ///
    /// Order is contact details, then raw questionnaire answers, then the
    /// computed results. The employee headcount travels only for the private
    /// tier, the retention figure only when present, and the savings verb is
    /// display-only and never submitted.
    pub fn assemble(
        answers: &QuizAnswers,
        estimate: &RoiEstimate,
        context: SubmissionContext,
    ) -> Self {
        let mut fields = vec![
            FormField::new("firstname", answers.first_name.clone()),
            FormField::new("lastname", answers.last_name.clone()),
            FormField::new("email", answers.work_email.clone()),
            FormField::new("company", answers.company_name.clone()),
            FormField::new("phone", answers.phone.clone()),
            FormField::new(
                "industry",
                answers.industry.map(Industry::as_str).unwrap_or_default(),
            ),
            FormField::new("administrators", answers.administrators.to_string()),
            FormField::new("reviewers", answers.reviewers.to_string()),
            FormField::new("average_salary", answers.average_salary.to_string()),
            FormField::new("launch_time_months", answers.launch_time_months.to_string()),
        ];

        if answers.industry == Some(Industry::Private) {
            fields.push(FormField::new(
                "total_employees",
                answers.total_employees.trim(),
            ));
        }

        fields.push(FormField::new(
            "admin_hours_per_week",
            estimate.admin_hours_per_week.to_string(),
        ));
        fields.push(FormField::new(
            "reviewer_hours_per_week",
            estimate.reviewer_hours_per_week.to_string(),
        ));
        fields.push(FormField::new(
            "saved_per_year",
            estimate.saved_per_year.to_string(),
        ));
        fields.push(FormField::new(
            "launch_weeks_faster",
            estimate.launch_weeks_faster.to_string(),
        ));
        if let Some(retention) = estimate.retention_per_year {
            fields.push(FormField::new("retention_per_year", retention.to_string()));
        }

        Self { fields, context }
    }
}

/// Error enumeration for submission dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("form endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("form transport failed: {0}")]
    Transport(String),
    #[error("form endpoint url '{url}' is invalid: {reason}")]
    Endpoint { url: String, reason: String },
}

/// Outbound seam to the CRM form endpoint so flow logic can be exercised
/// without a network.
pub trait FormsGateway: Send + Sync {
    fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError>;
}

/// Source of the ambient page/tracking context attached to submissions.
pub trait ContextProvider: Send + Sync {
    fn capture(&self) -> SubmissionContext;
}

/// Context provider backed by static calculator configuration; the hosting
/// adapter layers request-scoped overrides on top of what it captures.
#[derive(Debug, Clone)]
pub struct ConfiguredPageContext {
    context: SubmissionContext,
}

impl ConfiguredPageContext {
    pub fn new(calculator: &CalculatorConfig) -> Self {
        Self {
            context: SubmissionContext {
                page_uri: calculator.page_uri.clone(),
                page_name: calculator.page_name.clone(),
                hutk: None,
            },
        }
    }
}

impl ContextProvider for ConfiguredPageContext {
    fn capture(&self) -> SubmissionContext {
        self.context.clone()
    }
}
