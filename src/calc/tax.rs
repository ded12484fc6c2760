//! Flat-rate tax and net-income approximation
//!
//! One earner at a time; household totals are the sum over earners. There is
//! no bracket progression: every rate applies identically every year.

use crate::plan::TaxParams;

/// Taxes and net income for one earner's gross income in one year
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxBreakdown {
    pub social_insurance: f64,
    pub income_tax: f64,
    pub resident_tax: f64,
    pub net_income: f64,
}

impl TaxBreakdown {
    /// Sum two earners' breakdowns into a household total
    pub fn combine(self, other: TaxBreakdown) -> TaxBreakdown {
        TaxBreakdown {
            social_insurance: self.social_insurance + other.social_insurance,
            income_tax: self.income_tax + other.income_tax,
            resident_tax: self.resident_tax + other.resident_tax,
            net_income: self.net_income + other.net_income,
        }
    }
}

/// Compute taxes and net income for one earner
///
/// The salary deduction never falls below its configured floor. The income
/// tax base subtracts the basic deduction; the resident tax base does not.
/// The wider resident base is intended model behavior, not a defect.
pub fn taxes_and_net(gross: f64, tax: &TaxParams) -> TaxBreakdown {
    let social_insurance = gross * tax.social_insurance_pct / 100.0;
    let salary_deduction = (gross * tax.salary_deduction_pct / 100.0).max(tax.salary_deduction_min);

    let taxable_base =
        (gross - social_insurance - salary_deduction - tax.basic_deduction).max(0.0);
    let income_tax = taxable_base * tax.income_tax_pct / 100.0;

    let resident_base = (gross - social_insurance - salary_deduction).max(0.0);
    let resident_tax = resident_base * tax.resident_tax_pct / 100.0;

    let net_income = gross - (social_insurance + income_tax + resident_tax);

    TaxBreakdown {
        social_insurance,
        income_tax,
        resident_tax,
        net_income,
    }
}
