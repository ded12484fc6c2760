//! Running state threaded through a projection run

use crate::plan::PlanParams;

/// Mutable per-run accumulator, owned exclusively by one simulation loop
///
/// Initialized once per run and discarded afterwards; nothing here persists
/// between runs or is shared across concurrent runs.
#[derive(Debug, Clone)]
pub struct RunningState {
    /// Financial assets; may go negative under heavy outflows
    pub financial_assets: f64,

    /// Outstanding mortgage balance, exactly zero at and after payoff
    pub loan_balance: f64,

    /// Land value, zero until the purchase year
    pub land_value: f64,

    /// Building value, zero until the purchase year
    pub building_value: f64,

    /// Fixed annual mortgage payment, set once at purchase
    pub annual_mortgage_payment: f64,
}

impl RunningState {
    /// Initial state at `current_age`
    pub fn from_params(params: &PlanParams) -> Self {
        Self {
            financial_assets: params.initial_assets,
            loan_balance: 0.0,
            land_value: 0.0,
            building_value: 0.0,
            annual_mortgage_payment: 0.0,
        }
    }

    /// Net worth under the current state
    pub fn net_worth(&self) -> f64 {
        self.financial_assets + self.land_value + self.building_value - self.loan_balance
    }
}
