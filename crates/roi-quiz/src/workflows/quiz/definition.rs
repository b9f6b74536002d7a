use serde::Serialize;

use super::domain::{
    Industry, ADMINISTRATORS_MAX, AVERAGE_SALARY_MAX, AVERAGE_SALARY_MIN, AVERAGE_SALARY_STEP,
    LAUNCH_POSITION_MAX, LAUNCH_POSITION_MIN, REVIEWERS_MAX,
};
use crate::config::CalculatorConfig;

/// Labels for the seven launch-time slider positions, in position order.
pub const LAUNCH_BUCKET_LABELS: [&str; 7] = [
    "Less than 1 month",
    "1 month",
    "2 months",
    "3 months",
    "4 months",
    "5 months",
    "6 months or more",
];

/// Host-renderable description of the questionnaire: configured copy plus
/// the static prompts, options, ranges, and field lists a front end needs to
/// draw the form. Behavior lives in the flow service; this is data only.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDefinition {
    pub title: String,
    pub subtitle: String,
    /// Styling hook passed through to the host, no behavior attached.
    pub class_name: String,
    pub industry_prompt: &'static str,
    pub industries: Vec<IndustryOption>,
    pub sliders: Vec<SliderSpec>,
    pub launch_buckets: [&'static str; 7],
    pub employees_field: TextFieldSpec,
    pub contact_prompt: &'static str,
    pub contact_fields: Vec<TextFieldSpec>,
    pub submit_label: &'static str,
    pub results_intro: &'static str,
}

/// One selectable industry with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryOption {
    pub value: Industry,
    pub label: &'static str,
}

/// Range-input description; `field` names the answer-update key it drives.
#[derive(Debug, Clone, Serialize)]
pub struct SliderSpec {
    pub field: &'static str,
    pub prompt: &'static str,
    pub hint: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

/// Free-text input description with its requiredness rules.
#[derive(Debug, Clone, Serialize)]
pub struct TextFieldSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Required only when this industry is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_for: Option<Industry>,
}

impl QuizDefinition {
    pub fn from_config(calculator: &CalculatorConfig) -> Self {
        Self {
            title: calculator.title.clone(),
            subtitle: calculator.subtitle.clone(),
            class_name: calculator.class_name.clone(),
            industry_prompt: "Choose your industry",
            industries: Industry::ordered()
                .into_iter()
                .map(|industry| IndustryOption {
                    value: industry,
                    label: industry.label(),
                })
                .collect(),
            sliders: vec![
                SliderSpec {
                    field: "administrators",
                    prompt: "How many team members do you work with?",
                    hint: "Administrators are team members that manage program(s).",
                    min: 0,
                    max: ADMINISTRATORS_MAX,
                    step: 1,
                    min_label: "0",
                    max_label: "25+",
                },
                SliderSpec {
                    field: "reviewers",
                    prompt: "How many team members do you work with?",
                    hint: "Reviewers are internal or external individuals that review applications.",
                    min: 0,
                    max: REVIEWERS_MAX,
                    step: 1,
                    min_label: "0",
                    max_label: "100+",
                },
                SliderSpec {
                    field: "average_salary",
                    prompt: "What is the average salary for an employee?",
                    hint: "",
                    min: AVERAGE_SALARY_MIN,
                    max: AVERAGE_SALARY_MAX,
                    step: AVERAGE_SALARY_STEP,
                    min_label: "$10,000",
                    max_label: "$250,000",
                },
                SliderSpec {
                    field: "launch_time_months",
                    prompt: "Currently, how long does it typically take you to launch a new program?",
                    hint: "",
                    min: LAUNCH_POSITION_MIN,
                    max: LAUNCH_POSITION_MAX,
                    step: 1,
                    min_label: "Less than 1 month",
                    max_label: "6 months or more",
                },
            ],
            launch_buckets: LAUNCH_BUCKET_LABELS,
            employees_field: TextFieldSpec {
                field: "total_employees",
                label: "Total number of employees",
                required: false,
                required_for: Some(Industry::Private),
            },
            contact_prompt: "Fill out the form to see your results",
            contact_fields: vec![
                TextFieldSpec {
                    field: "first_name",
                    label: "First Name",
                    required: true,
                    required_for: None,
                },
                TextFieldSpec {
                    field: "last_name",
                    label: "Last Name",
                    required: true,
                    required_for: None,
                },
                TextFieldSpec {
                    field: "work_email",
                    label: "Work Email",
                    required: true,
                    required_for: None,
                },
                TextFieldSpec {
                    field: "company_name",
                    label: "Company Name",
                    required: true,
                    required_for: None,
                },
                TextFieldSpec {
                    field: "phone",
                    label: "Phone number",
                    required: false,
                    required_for: None,
                },
            ],
            submit_label: "Calculate My ROI",
            results_intro: "By combining your responses with our current customer averages in \
                            your industry, we estimate that you could:",
        }
    }
}
