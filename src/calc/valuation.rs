//! Land and building valuation

use crate::plan::HousingParams;

/// Initial land and building values at the purchase year, split from the
/// purchase price by the configured land ratio
pub fn seed_values(housing: &HousingParams) -> (f64, f64) {
    let land = housing.price * housing.land_ratio_pct / 100.0;
    let building = housing.price - land;
    (land, building)
}

/// Apply one year of appreciation or decline to a value
///
/// Only a currently positive value compounds; a zeroed value never restarts.
pub fn appreciate(value: f64, annual_change_pct: f64) -> f64 {
    if value > 0.0 {
        value * (1.0 + annual_change_pct / 100.0)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::plan::PlanParams;

    #[test]
    fn test_seed_split_by_land_ratio() {
        let housing = PlanParams::default_scenario().housing;
        let (land, building) = seed_values(&housing);
        assert_relative_eq!(land, 2000.0, epsilon = 1e-10);
        assert_relative_eq!(building, 3000.0, epsilon = 1e-10);
        assert_relative_eq!(land + building, housing.price, epsilon = 1e-10);
    }

    #[test]
    fn test_positive_value_compounds() {
        assert_relative_eq!(appreciate(2000.0, 1.0), 2020.0, epsilon = 1e-10);
        assert_relative_eq!(appreciate(3000.0, -1.0), 2970.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_value_stays_zero() {
        assert_eq!(appreciate(0.0, 5.0), 0.0);
        assert_eq!(appreciate(0.0, -5.0), 0.0);
    }
}
