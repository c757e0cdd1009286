//! Monte Carlo retirement projection.
//!
//! Accumulation until retirement age (balance grows, contributions flow in),
//! then drawdown until the horizon age (spending flows out). Annual returns
//! are sampled from a normal distribution in real (inflation-adjusted)
//! terms, so all amounts read in today's money.
//!
//! The RNG is seeded from a hash of the inputs: the same form state always
//! produces the same bands, which keeps the render path pure and the tests
//! deterministic.

use std::collections::hash_map::DefaultHasher;
use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retire_age: u32,
    /// Plan end age: the simulation succeeds if money lasts until here.
    pub horizon_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Spending in retirement, today's money.
    pub monthly_spending: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct MarketAssumptions {
    pub mean_return_pct: f64,
    pub volatility_pct: f64,
    pub inflation_pct: f64,
    pub trials: u32,
}

/// Percentile band for one simulated year.
#[derive(Clone, Copy, Debug)]
pub struct YearBand {
    pub age: u32,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    /// Fraction of trials with money left at the horizon age.
    pub success_rate: f64,
    /// One band per simulated year, starting at the current age.
    pub bands: Vec<YearBand>,
    pub median_at_retirement: f64,
}

/// Standard normal sample via Box–Muller.
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.r#gen();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

fn seed_from_inputs(inputs: &RetirementInputs, market: &MarketAssumptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    inputs.current_age.hash(&mut hasher);
    inputs.retire_age.hash(&mut hasher);
    inputs.horizon_age.hash(&mut hasher);
    inputs.current_savings.to_bits().hash(&mut hasher);
    inputs.monthly_contribution.to_bits().hash(&mut hasher);
    inputs.monthly_spending.to_bits().hash(&mut hasher);
    market.mean_return_pct.to_bits().hash(&mut hasher);
    market.volatility_pct.to_bits().hash(&mut hasher);
    market.inflation_pct.to_bits().hash(&mut hasher);
    market.trials.hash(&mut hasher);
    hasher.finish()
}

/// Value at percentile `p` of an already-sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (p / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Run the simulation. Ages are clamped so the timeline is always valid:
/// retire_age >= current_age, horizon_age >= retire_age.
pub fn simulate(inputs: &RetirementInputs, market: &MarketAssumptions) -> SimulationOutcome {
    let retire_age = inputs.retire_age.max(inputs.current_age);
    let horizon_age = inputs.horizon_age.max(retire_age);
    let years = (horizon_age - inputs.current_age) as usize;
    let trials = market.trials.max(1) as usize;

    // Work in real terms: expected return net of inflation.
    let real_mean = (market.mean_return_pct - market.inflation_pct) / 100.0;
    let vol = market.volatility_pct / 100.0;
    let annual_contribution = inputs.monthly_contribution * 12.0;
    let annual_spending = inputs.monthly_spending * 12.0;

    let mut rng = StdRng::seed_from_u64(seed_from_inputs(inputs, market));

    // balances_by_year[y] holds every trial's balance at year y
    let mut balances_by_year = vec![Vec::with_capacity(trials); years + 1];
    let mut successes = 0usize;

    for _ in 0..trials {
        let mut balance = inputs.current_savings;
        balances_by_year[0].push(balance);
        let mut depleted = false;

        for year in 1..=years {
            let age = inputs.current_age + year as u32;
            let annual_return = real_mean + vol * standard_normal(&mut rng);
            balance *= 1.0 + annual_return;
            if age <= retire_age {
                balance += annual_contribution;
            } else {
                balance -= annual_spending;
            }
            if balance <= 0.0 {
                balance = 0.0;
                depleted = true;
            }
            balances_by_year[year].push(balance);
        }

        if !depleted {
            successes += 1;
        }
    }

    let bands: Vec<YearBand> = balances_by_year
        .iter_mut()
        .enumerate()
        .map(|(year, balances)| {
            balances.sort_by(f64::total_cmp);
            YearBand {
                age: inputs.current_age + year as u32,
                p10: percentile(balances, 10.0),
                p50: percentile(balances, 50.0),
                p90: percentile(balances, 90.0),
            }
        })
        .collect();

    let median_at_retirement = bands
        .iter()
        .find(|b| b.age == retire_age)
        .map(|b| b.p50)
        .unwrap_or(0.0);

    SimulationOutcome {
        success_rate: successes as f64 / trials as f64,
        bands,
        median_at_retirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RetirementInputs {
        RetirementInputs {
            current_age: 35,
            retire_age: 65,
            horizon_age: 90,
            current_savings: 50_000.0,
            monthly_contribution: 800.0,
            monthly_spending: 3000.0,
        }
    }

    fn market() -> MarketAssumptions {
        MarketAssumptions {
            mean_return_pct: 6.5,
            volatility_pct: 15.0,
            inflation_pct: 2.5,
            trials: 400,
        }
    }

    #[test]
    fn test_same_inputs_same_outcome() {
        let a = simulate(&inputs(), &market());
        let b = simulate(&inputs(), &market());
        assert_eq!(a.success_rate, b.success_rate);
        assert_eq!(a.bands.len(), b.bands.len());
        assert_eq!(a.bands[10].p50, b.bands[10].p50);
    }

    #[test]
    fn test_band_count_spans_timeline() {
        let outcome = simulate(&inputs(), &market());
        // 35 through 90 inclusive
        assert_eq!(outcome.bands.len(), 56);
        assert_eq!(outcome.bands[0].age, 35);
        assert_eq!(outcome.bands.last().unwrap().age, 90);
    }

    #[test]
    fn test_percentiles_are_ordered() {
        let outcome = simulate(&inputs(), &market());
        for band in &outcome.bands {
            assert!(band.p10 <= band.p50, "p10 > p50 at age {}", band.age);
            assert!(band.p50 <= band.p90, "p50 > p90 at age {}", band.age);
        }
    }

    #[test]
    fn test_success_rate_in_unit_range() {
        let outcome = simulate(&inputs(), &market());
        assert!((0.0..=1.0).contains(&outcome.success_rate));
    }

    #[test]
    fn test_saving_more_raises_success() {
        let mut generous = inputs();
        generous.monthly_contribution = 2500.0;
        generous.monthly_spending = 2000.0;
        let mut thin = inputs();
        thin.monthly_contribution = 100.0;
        thin.monthly_spending = 5000.0;
        let high = simulate(&generous, &market());
        let low = simulate(&thin, &market());
        assert!(high.success_rate > low.success_rate);
    }

    #[test]
    fn test_no_volatility_no_spread() {
        let calm = MarketAssumptions {
            volatility_pct: 0.0,
            ..market()
        };
        let outcome = simulate(&inputs(), &calm);
        let band = &outcome.bands[20];
        assert!((band.p90 - band.p10).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_ages_are_clamped() {
        let weird = RetirementInputs {
            current_age: 70,
            retire_age: 65,
            horizon_age: 60,
            ..inputs()
        };
        let outcome = simulate(&weird, &market());
        assert_eq!(outcome.bands.len(), 1);
        assert_eq!(outcome.success_rate, 1.0);
    }
}
