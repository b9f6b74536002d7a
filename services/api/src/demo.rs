use crate::infra::InMemorySessionStore;
use clap::Args;
use roi_quiz::config::CalculatorConfig;
use roi_quiz::error::AppError;
use roi_quiz::workflows::quiz::{
    AnswerUpdate, ConfiguredPageContext, ContextOverrides, EstimateEngine, FormSubmission,
    FormsGateway, Industry, QuizAnswers, QuizDefinition, QuizFlowService, RoiEstimate,
    SubmissionError,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Industry tier: nonprofit, public, or private
    #[arg(long, value_parser = crate::infra::parse_industry)]
    pub(crate) industry: Industry,
    /// Number of administrators managing programs
    #[arg(long, default_value_t = 1)]
    pub(crate) administrators: u32,
    /// Number of reviewers evaluating applications
    #[arg(long, default_value_t = 0)]
    pub(crate) reviewers: u32,
    /// Average employee salary in dollars
    #[arg(long, default_value_t = 50_000)]
    pub(crate) average_salary: u32,
    /// Launch-time slider position, 1 (under a month) through 7 (six months or more)
    #[arg(long, default_value_t = 4)]
    pub(crate) launch_time_months: u32,
    /// Total employees, used for the private-tier retention figure
    #[arg(long)]
    pub(crate) total_employees: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Industry tier for the scripted walkthrough (defaults to private)
    #[arg(long, value_parser = crate::infra::parse_industry)]
    pub(crate) industry: Option<Industry>,
    /// Stop after the estimate without dispatching a submission
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        industry,
        administrators,
        reviewers,
        average_salary,
        launch_time_months,
        total_employees,
    } = args;

    let answers = QuizAnswers {
        industry: Some(industry),
        administrators,
        reviewers,
        average_salary,
        launch_time_months,
        total_employees: total_employees
            .map(|count| count.to_string())
            .unwrap_or_default(),
        ..QuizAnswers::default()
    };

    let estimate = EstimateEngine::default().compute(&answers);
    render_estimate(industry, &estimate);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        industry,
        skip_submission,
    } = args;

    let industry = industry.unwrap_or(Industry::Private);
    let config = CalculatorConfig::from_env();
    let definition = QuizDefinition::from_config(&config);

    println!("ROI calculator demo");
    println!("{}", definition.title);
    println!("{}", definition.subtitle);

    let service = QuizFlowService::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(ConsoleFormsGateway),
        Arc::new(ConfiguredPageContext::new(&config)),
    );

    let opened = service.open()?;
    println!(
        "\nOpened session {} (phase {})",
        opened.session_id, opened.phase
    );

    let updates = scripted_answers(industry);
    println!("Applying {} scripted answers", updates.len());
    let mut view = opened;
    for update in updates {
        view = service.answer(&view.session_id, update)?;
    }

    if view.gating.satisfied {
        println!("Submission gate: satisfied");
    } else {
        println!("Submission gate: blocked");
        for requirement in &view.gating.missing {
            println!("  - {}", requirement.label());
        }
    }

    match view.estimate.as_ref() {
        Some(estimate) => render_estimate(industry, estimate),
        None => println!("No estimate available yet"),
    }

    if skip_submission {
        return Ok(());
    }

    println!("\nSubmitting to the forms gateway");
    let revealed = service.submit(&view.session_id, ContextOverrides::default())?;
    println!("Phase: {}", revealed.phase);
    if let Some(confirmation) = revealed.confirmation {
        println!("{confirmation}");
    }

    Ok(())
}

/// Prints each outbound field instead of calling the CRM endpoint.
struct ConsoleFormsGateway;

impl FormsGateway for ConsoleFormsGateway {
    fn submit(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        println!("  Dispatching {} form fields:", submission.fields.len());
        for field in &submission.fields {
            println!("    - {} = {}", field.name, field.value);
        }
        println!(
            "  Page context: {} ({})",
            submission.context.page_name, submission.context.page_uri
        );
        Ok(())
    }
}

fn scripted_answers(industry: Industry) -> Vec<AnswerUpdate> {
    let mut updates = vec![
        AnswerUpdate::Industry(industry),
        AnswerUpdate::Administrators(10),
        AnswerUpdate::Reviewers(20),
        AnswerUpdate::AverageSalary(50_000),
        AnswerUpdate::LaunchTimeMonths(4),
        AnswerUpdate::FirstName("Dana".to_string()),
        AnswerUpdate::LastName("Whitley".to_string()),
        AnswerUpdate::WorkEmail("dana.whitley@acmegrants.org".to_string()),
        AnswerUpdate::CompanyName("Acme Grants".to_string()),
        AnswerUpdate::Phone("555-0100".to_string()),
    ];

    if industry == Industry::Private {
        updates.push(AnswerUpdate::TotalEmployees("100".to_string()));
    }

    updates
}

fn render_estimate(industry: Industry, estimate: &RoiEstimate) {
    println!("\nEstimated impact ({})", industry.label());
    println!(
        "- Administrator hours saved per week: {}",
        estimate.admin_hours_per_week
    );
    println!(
        "- Reviewer hours saved per week: {}",
        estimate.reviewer_hours_per_week
    );
    println!(
        "- {} ${} per year",
        estimate.savings_verb.label(),
        estimate.saved_per_year
    );
    println!(
        "- Launch programs {} weeks faster",
        estimate.launch_weeks_faster
    );
    if let Some(retention) = estimate.retention_per_year {
        println!("- Retain ${retention} per year by reducing employee turnover");
    }
}
