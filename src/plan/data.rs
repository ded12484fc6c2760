//! Parameter set for a projection run
//!
//! All rate fields are plain percentages (`4.0` = 4% per year) and all money
//! fields share one currency unit, matching the scenario-file format. A
//! `PlanParams` is built once from user input and is read-only for the life
//! of a run.

use serde::{Deserialize, Serialize};

/// Savings contribution policy, fixed for the whole run
///
/// Both modes carry three regimes: before the house purchase age, after it,
/// and in years where total education cost reaches the peak threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SavingsPolicy {
    /// Contribution is a percentage of household gross income
    Percentage {
        pre_pct: f64,
        post_pct: f64,
        peak_pct: f64,
    },
    /// Contribution is an absolute annual amount
    Fixed { pre: f64, post: f64, peak: f64 },
}

/// Secondary earner's income parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpouseIncome {
    /// Age (of the primary earner's timeline) at which the spouse starts working
    pub start_age: u32,

    /// Annual gross income at the start age
    pub annual_income: f64,

    /// Annual growth percentage, compounded from the start age
    #[serde(default)]
    pub growth_pct: f64,
}

/// Flat-rate tax and social-insurance approximation, applied per earner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxParams {
    /// Salary deduction as a percentage of gross
    pub salary_deduction_pct: f64,

    /// Floor on the salary deduction, in currency units
    pub salary_deduction_min: f64,

    /// Flat basic deduction
    pub basic_deduction: f64,

    /// Resident tax percentage
    pub resident_tax_pct: f64,

    /// Effective income tax percentage
    pub income_tax_pct: f64,

    /// Social insurance percentage of gross
    pub social_insurance_pct: f64,
}

/// Housing purchase, mortgage, and upkeep parameters
///
/// If `price` is zero, or `purchase_age` falls outside the simulated span,
/// the purchase never fires and the whole subsystem stays at zero. That is
/// intended behavior, not an input error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousingParams {
    /// Age at which the house is bought
    pub purchase_age: u32,

    /// Purchase price
    pub price: f64,

    /// Down payment, deducted from financial assets at purchase
    pub down_payment: f64,

    /// Mortgage annual interest percentage
    pub mortgage_rate_pct: f64,

    /// Mortgage term in years; independent of the simulation span
    pub mortgage_years: u32,

    /// Flat annual property tax and base maintenance
    pub property_tax_annual: f64,

    /// Land share of the purchase price, as a percentage
    pub land_ratio_pct: f64,

    /// Land value annual change percentage (may be negative)
    pub land_appreciation_pct: f64,

    /// Building value annual change percentage (typically negative)
    pub building_change_pct: f64,

    /// Optional lump-sum maintenance total, amortized linearly over 30 years
    /// and charged to housing cost every year from the purchase age onward
    #[serde(default)]
    pub upkeep_30yr_total: f64,
}

impl HousingParams {
    /// Amortized per-year share of the 30-year maintenance total
    pub fn upkeep_per_year(&self) -> f64 {
        if self.upkeep_30yr_total > 0.0 {
            self.upkeep_30yr_total / 30.0
        } else {
            0.0
        }
    }
}

/// Per-year education cost table, shared by all children
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationCosts {
    /// Ages 3-6
    pub preschool: f64,
    /// Ages 7-12
    pub elementary: f64,
    /// Ages 13-15
    pub junior_high: f64,
    /// Ages 16-18
    pub high_school: f64,
    /// Ages 19-22
    pub university: f64,
    /// Added on top of `university` for ages 19-22
    pub living_allowance: f64,
}

/// A one-off large purchase (vehicle etc.) at a specific age
///
/// Deducted from financial assets as a lump sum in that year; nothing is
/// capitalized as an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneOffPurchase {
    pub age: u32,
    pub amount: f64,
    #[serde(default)]
    pub label: String,
}

/// Immutable bundle of all simulation inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParams {
    /// First simulated age
    pub current_age: u32,

    /// Last simulated age, inclusive
    pub target_age: u32,

    /// Financial assets at the start of the run
    pub initial_assets: f64,

    /// Primary earner's current gross income
    pub income_now: f64,

    /// Gross income once the step raise applies
    pub income_after: f64,

    /// Years from `current_age` until the step raise applies
    pub years_to_raise: u32,

    /// Age ceiling beyond which annual growth stops compounding
    pub raise_until_age: u32,

    /// Annual growth percentage applied after the step raise
    pub raise_rate_pct: f64,

    /// Optional secondary earner
    #[serde(default)]
    pub spouse: Option<SpouseIncome>,

    pub tax: TaxParams,

    pub housing: HousingParams,

    /// Parent's age at each child's birth (any number of children)
    #[serde(default)]
    pub child_birth_ages: Vec<u32>,

    pub education: EducationCosts,

    /// Total annual education cost at or above which the peak savings regime applies
    pub peak_threshold: f64,

    pub savings: SavingsPolicy,

    /// Net-of-tax annual investment return percentage on financial assets
    pub invest_return_pct: f64,

    /// One-off purchases by age
    #[serde(default)]
    pub purchases: Vec<OneOffPurchase>,
}

impl PlanParams {
    /// Iterator over the simulated ages, `current_age..=target_age`
    pub fn ages(&self) -> std::ops::RangeInclusive<u32> {
        self.current_age..=self.target_age
    }

    /// Number of rows a run will emit
    pub fn span_years(&self) -> usize {
        (self.target_age.saturating_sub(self.current_age) as usize) + 1
    }

    /// Total of one-off purchases scheduled for `age`
    pub fn purchases_at(&self, age: u32) -> f64 {
        self.purchases
            .iter()
            .filter(|p| p.age == age)
            .map(|p| p.amount)
            .sum()
    }

    /// Built-in default scenario: dual-income household, two children,
    /// house purchase at 37 with a 35-year mortgage
    pub fn default_scenario() -> Self {
        Self {
            current_age: 30,
            target_age: 60,
            initial_assets: 100.0,
            income_now: 800.0,
            income_after: 1000.0,
            years_to_raise: 3,
            raise_until_age: 40,
            raise_rate_pct: 1.0,
            spouse: Some(SpouseIncome {
                start_age: 32,
                annual_income: 300.0,
                growth_pct: 0.0,
            }),
            tax: TaxParams {
                salary_deduction_pct: 20.0,
                salary_deduction_min: 55.0,
                basic_deduction: 48.0,
                resident_tax_pct: 10.0,
                income_tax_pct: 8.0,
                social_insurance_pct: 15.0,
            },
            housing: HousingParams {
                purchase_age: 37,
                price: 5000.0,
                down_payment: 500.0,
                mortgage_rate_pct: 1.0,
                mortgage_years: 35,
                property_tax_annual: 30.0,
                land_ratio_pct: 40.0,
                land_appreciation_pct: 0.0,
                building_change_pct: -1.0,
                upkeep_30yr_total: 800.0,
            },
            child_birth_ages: vec![30, 33],
            education: EducationCosts {
                preschool: 70.0,
                elementary: 60.0,
                junior_high: 150.0,
                high_school: 150.0,
                university: 250.0,
                living_allowance: 50.0,
            },
            peak_threshold: 300.0,
            savings: SavingsPolicy::Percentage {
                pre_pct: 25.0,
                post_pct: 20.0,
                peak_pct: 15.0,
            },
            invest_return_pct: 4.0,
            purchases: vec![OneOffPurchase {
                age: 38,
                amount: 400.0,
                label: "car".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_covers_both_endpoints() {
        let params = PlanParams::default_scenario();
        assert_eq!(params.span_years(), 31);
        assert_eq!(params.ages().next(), Some(30));
        assert_eq!(params.ages().last(), Some(60));
    }

    #[test]
    fn test_purchases_at_sums_same_age() {
        let mut params = PlanParams::default_scenario();
        params.purchases = vec![
            OneOffPurchase {
                age: 40,
                amount: 400.0,
                label: String::new(),
            },
            OneOffPurchase {
                age: 40,
                amount: 100.0,
                label: String::new(),
            },
            OneOffPurchase {
                age: 50,
                amount: 250.0,
                label: String::new(),
            },
        ];
        assert_eq!(params.purchases_at(40), 500.0);
        assert_eq!(params.purchases_at(50), 250.0);
        assert_eq!(params.purchases_at(41), 0.0);
    }

    #[test]
    fn test_upkeep_amortized_over_30_years() {
        let params = PlanParams::default_scenario();
        assert!((params.housing.upkeep_per_year() - 800.0 / 30.0).abs() < 1e-12);

        let mut no_upkeep = params.housing;
        no_upkeep.upkeep_30yr_total = 0.0;
        assert_eq!(no_upkeep.upkeep_per_year(), 0.0);
    }
}
