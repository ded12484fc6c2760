//! Gross income projection by age

use crate::plan::{PlanParams, SpouseIncome};

/// Primary earner's gross income at `age`
///
/// Flat at `income_now` until the step raise takes effect, then
/// `income_after` compounded at the growth rate. Compounding is back-dated
/// to the step year and the number of periods is capped by the growth
/// ceiling age, so income holds flat once `age` passes `raise_until_age`.
pub fn primary_income_at(params: &PlanParams, age: u32) -> f64 {
    let years_from_start = age.saturating_sub(params.current_age);
    if years_from_start < params.years_to_raise {
        return params.income_now;
    }

    let step_age = params.current_age + params.years_to_raise;
    let capped_age = age.min(params.raise_until_age);
    let periods = capped_age.saturating_sub(step_age);
    params.income_after * (1.0 + params.raise_rate_pct / 100.0).powi(periods as i32)
}

/// Spouse's gross income at `age`: zero before the start age, then the base
/// income compounded annually from the start age
pub fn spouse_income_at(spouse: &SpouseIncome, age: u32) -> f64 {
    if age < spouse.start_age {
        return 0.0;
    }
    let periods = age - spouse.start_age;
    spouse.annual_income * (1.0 + spouse.growth_pct / 100.0).powi(periods as i32)
}
