//! Savings contribution policy

use crate::plan::{PlanParams, SavingsPolicy};

/// Savings regime in effect for one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsRegime {
    /// Before the house purchase age
    PrePurchase,
    /// From the purchase age onward, education cost below the peak threshold
    PostPurchase,
    /// From the purchase age onward, education cost at or above the threshold
    EducationPeak,
}

/// Select the regime for a year
///
/// Before the purchase age the pre regime applies unconditionally, even in a
/// year whose education cost would otherwise qualify as peak. The peak
/// boundary is inclusive.
pub fn select_regime(params: &PlanParams, age: u32, education_total: f64) -> SavingsRegime {
    if age < params.housing.purchase_age {
        SavingsRegime::PrePurchase
    } else if education_total >= params.peak_threshold {
        SavingsRegime::EducationPeak
    } else {
        SavingsRegime::PostPurchase
    }
}

/// Annual contribution for a year, given household gross income and total
/// education cost
pub fn contribution(params: &PlanParams, age: u32, household_gross: f64, education_total: f64) -> f64 {
    let regime = select_regime(params, age, education_total);
    match params.savings {
        SavingsPolicy::Percentage {
            pre_pct,
            post_pct,
            peak_pct,
        } => {
            let pct = match regime {
                SavingsRegime::PrePurchase => pre_pct,
                SavingsRegime::PostPurchase => post_pct,
                SavingsRegime::EducationPeak => peak_pct,
            };
            household_gross * pct / 100.0
        }
        SavingsPolicy::Fixed { pre, post, peak } => match regime {
            SavingsRegime::PrePurchase => pre,
            SavingsRegime::PostPurchase => post,
            SavingsRegime::EducationPeak => peak,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with(savings: SavingsPolicy) -> PlanParams {
        let mut params = PlanParams::default_scenario();
        params.housing.purchase_age = 37;
        params.peak_threshold = 300.0;
        params.savings = savings;
        params
    }

    #[test]
    fn test_pre_regime_wins_before_purchase_even_at_peak_cost() {
        let params = params_with(SavingsPolicy::Percentage {
            pre_pct: 25.0,
            post_pct: 20.0,
            peak_pct: 15.0,
        });
        assert_eq!(
            select_regime(&params, 36, 500.0),
            SavingsRegime::PrePurchase
        );
        assert_eq!(contribution(&params, 36, 1000.0, 500.0), 250.0);
    }

    #[test]
    fn test_peak_threshold_is_inclusive() {
        let params = params_with(SavingsPolicy::Percentage {
            pre_pct: 25.0,
            post_pct: 20.0,
            peak_pct: 15.0,
        });
        assert_eq!(
            select_regime(&params, 45, 300.0),
            SavingsRegime::EducationPeak
        );
        assert_eq!(
            select_regime(&params, 45, 299.9),
            SavingsRegime::PostPurchase
        );
        assert_eq!(contribution(&params, 45, 1000.0, 300.0), 150.0);
        assert_eq!(contribution(&params, 45, 1000.0, 299.9), 200.0);
    }

    #[test]
    fn test_fixed_mode_ignores_income() {
        let params = params_with(SavingsPolicy::Fixed {
            pre: 200.0,
            post: 150.0,
            peak: 100.0,
        });
        assert_eq!(contribution(&params, 30, 800.0, 0.0), 200.0);
        assert_eq!(contribution(&params, 30, 8000.0, 0.0), 200.0);
        assert_eq!(contribution(&params, 40, 800.0, 0.0), 150.0);
        assert_eq!(contribution(&params, 40, 800.0, 300.0), 100.0);
    }

    #[test]
    fn test_purchase_age_boundary_switches_to_post() {
        let params = params_with(SavingsPolicy::Fixed {
            pre: 200.0,
            post: 150.0,
            peak: 100.0,
        });
        assert_eq!(
            select_regime(&params, 36, 0.0),
            SavingsRegime::PrePurchase
        );
        assert_eq!(
            select_regime(&params, 37, 0.0),
            SavingsRegime::PostPurchase
        );
    }
}
