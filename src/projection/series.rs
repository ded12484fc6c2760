//! Result series: one immutable row per simulated age

use serde::{Deserialize, Serialize};

/// Output record for a single simulated age
///
/// Rows are appended in age order and never mutated afterwards. Money
/// columns carry household totals for the year; balance columns carry the
/// state after the year's transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    pub age: u32,

    // Income
    pub gross_income: f64,
    pub spouse_income: f64,
    pub income_tax: f64,
    pub resident_tax: f64,
    pub social_insurance: f64,
    pub net_income: f64,

    // Spending
    pub education_cost: f64,
    pub housing_cost: f64,
    pub one_off_purchases: f64,
    pub savings_contribution: f64,
    pub free_cash: f64,

    // Balances
    pub financial_assets: f64,
    pub land_value: f64,
    pub building_value: f64,
    pub loan_balance: f64,
    pub net_worth: f64,
}

/// Complete result of one projection run, ordered by age
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub rows: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            rows: Vec::with_capacity(years),
        }
    }

    pub fn add_row(&mut self, row: YearRow) {
        self.rows.push(row);
    }

    /// Final-age summary figures
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.rows.last();
        let total_tax_paid: f64 = self
            .rows
            .iter()
            .map(|r| r.income_tax + r.resident_tax + r.social_insurance)
            .sum();
        let total_contributions: f64 = self.rows.iter().map(|r| r.savings_contribution).sum();

        ProjectionSummary {
            years: self.rows.len() as u32,
            final_net_worth: last.map(|r| r.net_worth).unwrap_or(0.0),
            final_financial_assets: last.map(|r| r.financial_assets).unwrap_or(0.0),
            real_estate_equity: last
                .map(|r| r.land_value + r.building_value - r.loan_balance)
                .unwrap_or(0.0),
            total_tax_paid,
            total_contributions,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Headline figures over a full run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_net_worth: f64,
    pub final_financial_assets: f64,
    pub real_estate_equity: f64,
    pub total_tax_paid: f64,
    pub total_contributions: f64,
}
