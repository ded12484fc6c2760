//! Plan parameters: the immutable input bundle for a projection run

mod data;
pub mod loader;

pub use data::{
    EducationCosts, HousingParams, OneOffPurchase, PlanParams, SavingsPolicy, SpouseIncome,
    TaxParams,
};
pub use loader::{load_scenario, ScenarioError};
