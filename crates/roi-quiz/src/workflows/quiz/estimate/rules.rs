use super::super::domain::{Industry, QuizAnswers};
use super::tables;
use super::{RoiEstimate, SavingsVerb};

/// Build the full estimate for the current answers.
///
/// An unselected industry falls back to the nonprofit model so the figures
/// stay renderable; the gating module still requires an explicit selection
/// before anything is submitted or revealed.
pub(crate) fn estimate_for(answers: &QuizAnswers) -> RoiEstimate {
    let industry = answers.industry.unwrap_or(Industry::Nonprofit);
    let admins = f64::from(answers.administrators);
    let reviewers = f64::from(answers.reviewers);
    let salary = f64::from(answers.average_salary);
    let launch_weeks_faster = tables::launch_weeks_faster(industry, answers.launch_time_months);

    match industry {
        Industry::Nonprofit => RoiEstimate {
            admin_hours_per_week: hours(admins * 3.46),
            reviewer_hours_per_week: hours(reviewers * 2.4),
            saved_per_year: (salary * 0.2645).round() as u64,
            savings_verb: SavingsVerb::Save,
            launch_weeks_faster,
            retention_per_year: None,
        },
        Industry::Public => RoiEstimate {
            admin_hours_per_week: hours(admins * 3.56),
            reviewer_hours_per_week: hours(reviewers * 3.71),
            saved_per_year: round_to_nearest_five(salary * 1.98163),
            savings_verb: SavingsVerb::Save,
            launch_weeks_faster,
            retention_per_year: None,
        },
        Industry::Private => {
            // Headcount drives the retention figure; non-numeric input counts as zero.
            let employees = answers.parsed_total_employees().unwrap_or(0) as f64;
            let retention = (employees * salary * 0.001).round() as u64;

            RoiEstimate {
                admin_hours_per_week: hours(admins * 3.2),
                reviewer_hours_per_week: hours(reviewers * 3.71),
                saved_per_year: round_to_nearest_five(admins * salary * 0.1717286858),
                savings_verb: SavingsVerb::Reclaim,
                launch_weeks_faster,
                retention_per_year: (retention > 0).then_some(retention),
            }
        }
    }
}

/// Weekly hour figures are truncated, never rounded up.
fn hours(value: f64) -> u32 {
    value.floor() as u32
}

/// Dollar figures for the public and private models snap to $5 increments.
fn round_to_nearest_five(amount: f64) -> u64 {
    ((amount / 5.0).round() * 5.0) as u64
}
