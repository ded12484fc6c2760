//! Per-year calculators: pure functions of the plan parameters and an age

pub mod education;
pub mod income;
pub mod mortgage;
pub mod savings;
pub mod tax;
pub mod valuation;

pub use education::{child_cost_by_age, total_education_cost};
pub use income::{primary_income_at, spouse_income_at};
pub use mortgage::{amortize_year, annuity_payment, AmortizationYear};
pub use savings::{contribution, select_regime, SavingsRegime};
pub use tax::{taxes_and_net, TaxBreakdown};
pub use valuation::{appreciate, seed_values};
