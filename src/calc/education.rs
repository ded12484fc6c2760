//! Education cost lookup by child age

use crate::plan::{EducationCosts, PlanParams};

/// Annual cost for one child of the given age
///
/// Brackets are closed, non-overlapping, and exhaustive: below 3 and above
/// 22 cost nothing, and a negative age (child not yet born) costs nothing.
pub fn child_cost_by_age(child_age: i64, costs: &EducationCosts) -> f64 {
    match child_age {
        i64::MIN..=2 => 0.0,
        3..=6 => costs.preschool,
        7..=12 => costs.elementary,
        13..=15 => costs.junior_high,
        16..=18 => costs.high_school,
        19..=22 => costs.university + costs.living_allowance,
        _ => 0.0,
    }
}

/// Total education cost across all children for the parent's `age`
pub fn total_education_cost(params: &PlanParams, age: u32) -> f64 {
    params
        .child_birth_ages
        .iter()
        .map(|&birth_age| child_cost_by_age(age as i64 - birth_age as i64, &params.education))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> EducationCosts {
        EducationCosts {
            preschool: 70.0,
            elementary: 60.0,
            junior_high: 150.0,
            high_school: 150.0,
            university: 250.0,
            living_allowance: 50.0,
        }
    }

    #[test]
    fn test_bracket_boundaries() {
        let c = costs();
        assert_eq!(child_cost_by_age(-3, &c), 0.0);
        assert_eq!(child_cost_by_age(0, &c), 0.0);
        assert_eq!(child_cost_by_age(2, &c), 0.0);
        assert_eq!(child_cost_by_age(3, &c), 70.0);
        assert_eq!(child_cost_by_age(6, &c), 70.0);
        assert_eq!(child_cost_by_age(7, &c), 60.0);
        assert_eq!(child_cost_by_age(12, &c), 60.0);
        assert_eq!(child_cost_by_age(13, &c), 150.0);
        assert_eq!(child_cost_by_age(15, &c), 150.0);
        assert_eq!(child_cost_by_age(16, &c), 150.0);
        assert_eq!(child_cost_by_age(18, &c), 150.0);
        assert_eq!(child_cost_by_age(19, &c), 300.0);
        assert_eq!(child_cost_by_age(22, &c), 300.0);
        assert_eq!(child_cost_by_age(23, &c), 0.0);
    }

    #[test]
    fn test_cost_non_negative_over_full_range() {
        let c = costs();
        for age in -10..60 {
            assert!(child_cost_by_age(age, &c) >= 0.0);
        }
    }

    #[test]
    fn test_household_total_sums_children() {
        let mut params = PlanParams::default_scenario();
        params.education = costs();
        params.child_birth_ages = vec![30, 33];
        // Parent 49: children aged 19 (university, 300) and 16 (high school, 150).
        assert_eq!(total_education_cost(&params, 49), 450.0);
        // Parent 30: first child aged 0, second not born.
        assert_eq!(total_education_cost(&params, 30), 0.0);
    }

    #[test]
    fn test_no_children_costs_nothing() {
        let mut params = PlanParams::default_scenario();
        params.child_birth_ages.clear();
        assert_eq!(total_education_cost(&params, 45), 0.0);
    }
}
