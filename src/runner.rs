//! Batch runner for independent scenario projections
//!
//! Each run owns its own `RunningState`; nothing is shared between runs, so
//! scenarios can be evaluated in parallel and re-run any number of times
//! with bit-identical results.

use crate::plan::PlanParams;
use crate::projection::{ProjectionEngine, ProjectionResult};
use log::debug;
use rayon::prelude::*;

/// Runs one or many parameter sets through the projection engine
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single scenario
    pub fn run(&self, params: &PlanParams) -> ProjectionResult {
        ProjectionEngine::new(params.clone()).run()
    }

    /// Run many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[PlanParams]) -> Vec<ProjectionResult> {
        debug!("running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|p| self.run(p)).collect()
    }
}
