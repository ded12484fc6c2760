//! Core projection engine: the year-by-year simulation loop

use crate::calc;
use crate::plan::PlanParams;
use super::series::{ProjectionResult, YearRow};
use super::state::RunningState;

/// Main projection engine
///
/// Owns an immutable parameter set; every call to [`run`](Self::run) is a
/// fresh, side-effect-free pass over the age range with its own
/// `RunningState`. Identical parameters always produce bit-identical output.
pub struct ProjectionEngine {
    params: PlanParams,
}

impl ProjectionEngine {
    pub fn new(params: PlanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    /// Run the projection over `current_age..=target_age`
    pub fn run(&self) -> ProjectionResult {
        let mut result = ProjectionResult::with_capacity(self.params.span_years());
        let mut state = RunningState::from_params(&self.params);

        for age in self.params.ages() {
            let row = self.simulate_year(age, &mut state);
            result.add_row(row);
        }

        result
    }

    /// One age transition; the step order is load-bearing because later
    /// steps read values fixed by earlier ones
    fn simulate_year(&self, age: u32, state: &mut RunningState) -> YearRow {
        let params = &self.params;
        let housing = &params.housing;

        // Gross incomes, then taxes per earner, summed to household totals.
        let gross_primary = calc::primary_income_at(params, age);
        let gross_spouse = params
            .spouse
            .as_ref()
            .map(|s| calc::spouse_income_at(s, age))
            .unwrap_or(0.0);
        let gross_household = gross_primary + gross_spouse;

        let mut taxes = calc::taxes_and_net(gross_primary, &params.tax);
        if params.spouse.is_some() {
            taxes = taxes.combine(calc::taxes_and_net(gross_spouse, &params.tax));
        }

        let education_cost = calc::total_education_cost(params, age);

        // House purchase: fires on age equality, so at most once per run.
        if age == housing.purchase_age && housing.price > 0.0 {
            state.financial_assets -= housing.down_payment;
            state.loan_balance = (housing.price - housing.down_payment).max(0.0);
            state.annual_mortgage_payment = calc::annuity_payment(
                state.loan_balance,
                housing.mortgage_rate_pct,
                housing.mortgage_years,
            );
            let (land, building) = calc::seed_values(housing);
            state.land_value = land;
            state.building_value = building;
        }

        // Mortgage amortization within the active window.
        let mut housing_cost = 0.0;
        let loan_active = age >= housing.purchase_age
            && age < housing.purchase_age + housing.mortgage_years
            && state.loan_balance > 0.0;
        if loan_active {
            let year = calc::amortize_year(
                state.loan_balance,
                housing.mortgage_rate_pct,
                state.annual_mortgage_payment,
            );
            state.loan_balance = year.balance_after;
            housing_cost += state.annual_mortgage_payment;
        }

        // Upkeep and valuation drift, every year from the purchase age on.
        if age >= housing.purchase_age && housing.price > 0.0 {
            housing_cost += housing.property_tax_annual + housing.upkeep_per_year();
            state.land_value = calc::appreciate(state.land_value, housing.land_appreciation_pct);
            state.building_value =
                calc::appreciate(state.building_value, housing.building_change_pct);
        }

        // One-off purchases are straight expenses, nothing is capitalized.
        let one_off = params.purchases_at(age);
        if one_off > 0.0 {
            state.financial_assets -= one_off;
        }

        let contribution = calc::contribution(params, age, gross_household, education_cost);

        // Existing assets compound first; this year's contribution earns
        // nothing until next year.
        let r = params.invest_return_pct / 100.0;
        state.financial_assets = state.financial_assets * (1.0 + r) + contribution;

        let free_cash =
            taxes.net_income - education_cost - housing_cost - contribution - one_off;

        YearRow {
            age,
            gross_income: gross_household,
            spouse_income: gross_spouse,
            income_tax: taxes.income_tax,
            resident_tax: taxes.resident_tax,
            social_insurance: taxes.social_insurance,
            net_income: taxes.net_income,
            education_cost,
            housing_cost,
            one_off_purchases: one_off,
            savings_contribution: contribution,
            free_cash,
            financial_assets: state.financial_assets,
            land_value: state.land_value,
            building_value: state.building_value,
            loan_balance: state.loan_balance,
            net_worth: state.net_worth(),
        }
    }
}

/// Convenience wrapper: one projection from one parameter set
pub fn simulate(params: &PlanParams) -> ProjectionResult {
    ProjectionEngine::new(params.clone()).run()
}
