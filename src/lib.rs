//! Lifeplan - Household net-worth projection engine
//!
//! This library provides:
//! - A year-by-year simulation of household finances over an age range
//! - Flat-rate income tax, resident tax, and social-insurance approximation
//! - Education costs by child age bracket
//! - Fixed-payment mortgage amortization with land/building valuation
//! - Three-regime savings policies and compounding investment returns
//! - Parallel batch evaluation of independent scenarios

pub mod calc;
pub mod plan;
pub mod projection;
pub mod runner;

// Re-export commonly used types
pub use plan::{PlanParams, SavingsPolicy};
pub use projection::{simulate, ProjectionEngine, ProjectionResult, YearRow};
pub use runner::ScenarioRunner;
