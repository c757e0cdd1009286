//! Compound growth of a starting balance with monthly contributions,
//! compounded monthly.

/// Year-end balances for `years` years. Index 0 holds the starting
/// principal, so the result has `years + 1` entries.
pub fn growth_schedule(
    principal: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    years: u32,
) -> Vec<f64> {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let mut schedule = Vec::with_capacity(years as usize + 1);
    schedule.push(principal);

    let mut balance = principal;
    for _ in 0..years {
        for _ in 0..12 {
            balance = balance * (1.0 + monthly_rate) + monthly_contribution;
        }
        schedule.push(balance);
    }
    schedule
}

/// Balance at the end of the final year.
pub fn final_balance(
    principal: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    years: u32,
) -> f64 {
    *growth_schedule(principal, monthly_contribution, annual_rate_pct, years)
        .last()
        .unwrap_or(&principal)
}

/// Sum of principal and all contributions, with no growth.
pub fn total_contributed(principal: f64, monthly_contribution: f64, years: u32) -> f64 {
    principal + monthly_contribution * 12.0 * years as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_length_and_start() {
        let schedule = growth_schedule(1000.0, 100.0, 5.0, 10);
        assert_eq!(schedule.len(), 11);
        assert_eq!(schedule[0], 1000.0);
    }

    #[test]
    fn test_zero_rate_is_plain_contributions() {
        let schedule = growth_schedule(1000.0, 100.0, 0.0, 2);
        assert!((schedule[1] - 2200.0).abs() < 1e-9);
        assert!((schedule[2] - 3400.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_beats_contributions() {
        let grown = final_balance(10_000.0, 200.0, 7.0, 20);
        let flat = total_contributed(10_000.0, 200.0, 20);
        assert!(grown > flat);
    }

    #[test]
    fn test_schedule_monotonic_with_contributions() {
        let schedule = growth_schedule(0.0, 50.0, 4.0, 15);
        for pair in schedule.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_zero_years_is_just_principal() {
        assert_eq!(final_balance(500.0, 100.0, 6.0, 0), 500.0);
    }
}
