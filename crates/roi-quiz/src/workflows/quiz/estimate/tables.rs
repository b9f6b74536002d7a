use super::super::domain::{Industry, LAUNCH_POSITION_MAX, LAUNCH_POSITION_MIN};

// Weeks-saved lookup per launch slider position, one table per industry.
// Entries are non-negative and non-decreasing; position 1 means the program
// already launches in under a month, so there is nothing to save.
const NONPROFIT_WEEKS: [f64; 7] = [0.0, 1.0, 4.0, 8.0, 12.0, 16.0, 20.0];
const PUBLIC_WEEKS: [f64; 7] = [0.0, 0.4, 4.0, 8.0, 12.0, 16.0, 20.0];
const PRIVATE_WEEKS: [f64; 7] = [0.0, 1.0, 5.0, 9.0, 13.0, 17.0, 21.0];

/// Weeks of launch time saved for the given slider position.
///
/// Out-of-range positions clamp to the table bounds rather than erroring.
pub(crate) fn launch_weeks_faster(industry: Industry, position: u32) -> f64 {
    let clamped = position.clamp(LAUNCH_POSITION_MIN, LAUNCH_POSITION_MAX);
    let index = (clamped - LAUNCH_POSITION_MIN) as usize;

    match industry {
        Industry::Nonprofit => NONPROFIT_WEEKS[index],
        Industry::Public => PUBLIC_WEEKS[index],
        Industry::Private => PRIVATE_WEEKS[index],
    }
}
