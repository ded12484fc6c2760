//! Load plan parameters from a JSON scenario file

use super::PlanParams;
use log::info;
use std::path::Path;
use thiserror::Error;

/// Failure while reading or parsing a scenario file
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a `PlanParams` from a JSON file
pub fn load_scenario(path: &Path) -> Result<PlanParams, ScenarioError> {
    let contents = std::fs::read_to_string(path)?;
    let params: PlanParams = serde_json::from_str(&contents)?;
    info!(
        "loaded scenario from {}: ages {}..={}",
        path.display(),
        params.current_age,
        params.target_age
    );
    Ok(params)
}
