//! Year-by-year projection: engine, running state, and result series

mod engine;
mod series;
mod state;

pub use engine::{simulate, ProjectionEngine};
pub use series::{ProjectionResult, ProjectionSummary, YearRow};
pub use state::RunningState;
