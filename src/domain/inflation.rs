//! Purchasing-power erosion: what a present amount is worth, and what
//! today's prices become, after years of inflation.

/// What `amount` buys in today's terms after `years` of inflation.
pub fn purchasing_power(amount: f64, inflation_pct: f64, years: u32) -> f64 {
    amount / (1.0 + inflation_pct / 100.0).powi(years as i32)
}

/// The future sticker price of something costing `amount` today.
pub fn future_cost(amount: f64, inflation_pct: f64, years: u32) -> f64 {
    amount * (1.0 + inflation_pct / 100.0).powi(years as i32)
}

/// Year-by-year purchasing power of `amount`, index 0 = today.
pub fn erosion_schedule(amount: f64, inflation_pct: f64, years: u32) -> Vec<f64> {
    (0..=years)
        .map(|y| purchasing_power(amount, inflation_pct, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inflation_changes_nothing() {
        assert_eq!(purchasing_power(1000.0, 0.0, 30), 1000.0);
        assert_eq!(future_cost(1000.0, 0.0, 30), 1000.0);
    }

    #[test]
    fn test_rule_of_thumb_halving() {
        // ~3% inflation halves purchasing power in roughly 24 years
        let remaining = purchasing_power(1000.0, 3.0, 24);
        assert!(remaining > 480.0 && remaining < 510.0, "got {remaining}");
    }

    #[test]
    fn test_round_trip() {
        let future = future_cost(250.0, 2.5, 10);
        let back = purchasing_power(future, 2.5, 10);
        assert!((back - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_is_decreasing() {
        let schedule = erosion_schedule(100.0, 2.0, 10);
        assert_eq!(schedule.len(), 11);
        for pair in schedule.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }
}
