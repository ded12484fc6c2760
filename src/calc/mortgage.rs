//! Fixed-payment mortgage: annuity formula and yearly amortization

/// Constant annual payment that amortizes `principal` to zero over `years`
///
/// Standard fixed-payment annuity. Non-positive principal or term yields
/// zero; a zero rate degenerates to straight-line repayment.
pub fn annuity_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    if principal <= 0.0 || years == 0 {
        return 0.0;
    }
    let r = annual_rate_pct / 100.0;
    if r == 0.0 {
        return principal / years as f64;
    }
    let growth = (1.0 + r).powi(years as i32);
    principal * (r * growth) / (growth - 1.0)
}

/// One year of amortization applied to an outstanding balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationYear {
    pub interest: f64,
    pub principal_paid: f64,
    pub balance_after: f64,
}

/// Amortize one year: interest accrues on the balance, the rest of the fixed
/// payment retires principal
///
/// The principal portion is clamped to be non-negative and capped at the
/// remaining balance, so the final year cannot overpay.
pub fn amortize_year(balance: f64, annual_rate_pct: f64, annual_payment: f64) -> AmortizationYear {
    let interest = balance * annual_rate_pct / 100.0;
    let principal_paid = (annual_payment - interest).max(0.0).min(balance);
    AmortizationYear {
        interest,
        principal_paid,
        balance_after: balance - principal_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_degenerate_inputs_pay_nothing() {
        assert_eq!(annuity_payment(0.0, 1.0, 35), 0.0);
        assert_eq!(annuity_payment(-100.0, 1.0, 35), 0.0);
        assert_eq!(annuity_payment(4500.0, 1.0, 0), 0.0);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(annuity_payment(4500.0, 0.0, 10), 450.0);

        let mut balance = 4500.0;
        for _ in 0..10 {
            balance = amortize_year(balance, 0.0, 450.0).balance_after;
        }
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn test_payment_amortizes_to_zero_over_term() {
        for &(principal, rate, years) in &[
            (4500.0, 1.0, 35u32),
            (3000.0, 0.5, 20),
            (10000.0, 3.0, 30),
            (500.0, 5.0, 5),
        ] {
            let payment = annuity_payment(principal, rate, years);
            let mut balance = principal;
            for _ in 0..years {
                let interest = balance * rate / 100.0;
                balance -= payment - interest;
            }
            assert_abs_diff_eq!(balance, 0.0, epsilon = 0.01);
        }
    }

    #[test]
    fn test_known_annuity_value() {
        // 4500 at 1% over 35 years.
        let payment = annuity_payment(4500.0, 1.0, 35);
        let growth = 1.01_f64.powi(35);
        assert_relative_eq!(
            payment,
            4500.0 * 0.01 * growth / (growth - 1.0),
            epsilon = 1e-10
        );
        assert!(payment > 4500.0 / 35.0);
    }

    #[test]
    fn test_final_year_clamps_to_balance() {
        // Balance smaller than the scheduled principal portion.
        let year = amortize_year(100.0, 1.0, 450.0);
        assert_relative_eq!(year.interest, 1.0, epsilon = 1e-10);
        assert_eq!(year.principal_paid, 100.0);
        assert_eq!(year.balance_after, 0.0);
    }

    #[test]
    fn test_principal_portion_never_negative() {
        // Payment smaller than interest: balance must not grow via repayment.
        let year = amortize_year(1000.0, 10.0, 50.0);
        assert_eq!(year.principal_paid, 0.0);
        assert_eq!(year.balance_after, 1000.0);
    }
}
