//! Multi-debt payoff simulation with a shared extra payment.
//!
//! Two orderings: avalanche (highest APR first) and snowball (lowest
//! balance first). Minimum payments keep flowing to every debt; the extra
//! payment, plus minimums freed by paid-off debts, attacks the current
//! target. A plan whose payments don't cover accruing interest is reported
//! as stalled instead of simulating forever.

/// Hard cap on simulated months (100 years). Anything beyond is stalled.
const MONTH_CAP: u32 = 1200;

/// Balances below this are treated as paid off.
const SETTLED: f64 = 0.005;

#[derive(Clone, Debug)]
pub struct Debt {
    pub name: String,
    pub balance: f64,
    pub apr_pct: f64,
    pub min_payment: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Highest APR first: minimizes total interest.
    Avalanche,
    /// Lowest balance first: fastest first win.
    Snowball,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "Avalanche",
            Strategy::Snowball => "Snowball",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PayoffPlan {
    /// Months until the last debt is cleared. Meaningless when stalled.
    pub months: u32,
    pub total_interest: f64,
    /// Debt names in the order they were cleared.
    pub payoff_order: Vec<String>,
    /// True when payments never outpace interest accrual.
    pub stalled: bool,
}

/// Pick the index of the next target among active debts.
fn target_index(balances: &[f64], debts: &[Debt], strategy: Strategy) -> Option<usize> {
    let active = (0..debts.len()).filter(|&i| balances[i] > SETTLED);
    match strategy {
        Strategy::Avalanche => {
            active.max_by(|&a, &b| debts[a].apr_pct.total_cmp(&debts[b].apr_pct))
        }
        Strategy::Snowball => {
            active.min_by(|&a, &b| balances[a].total_cmp(&balances[b]))
        }
    }
}

/// Simulate the payoff month by month.
pub fn payoff_plan(debts: &[Debt], extra_monthly: f64, strategy: Strategy) -> PayoffPlan {
    let mut balances: Vec<f64> = debts.iter().map(|d| d.balance.max(0.0)).collect();
    let mut months = 0;
    let mut total_interest = 0.0;
    let mut payoff_order = Vec::new();

    // Total monthly budget stays fixed: freed minimums roll into the target.
    let budget_total: f64 = debts.iter().map(|d| d.min_payment.max(0.0)).sum::<f64>()
        + extra_monthly.max(0.0);

    while balances.iter().any(|&b| b > SETTLED) {
        if months >= MONTH_CAP {
            return PayoffPlan {
                months,
                total_interest,
                payoff_order,
                stalled: true,
            };
        }
        months += 1;
        let owed_before: f64 = balances.iter().sum();

        // Accrue interest on active balances
        for (i, debt) in debts.iter().enumerate() {
            if balances[i] > SETTLED {
                let interest = balances[i] * debt.apr_pct / 100.0 / 12.0;
                balances[i] += interest;
                total_interest += interest;
            }
        }

        // Minimum payment on every active debt
        let mut budget = budget_total;
        for (i, debt) in debts.iter().enumerate() {
            if balances[i] > SETTLED {
                let pay = debt.min_payment.max(0.0).min(balances[i]).min(budget);
                balances[i] -= pay;
                budget -= pay;
            }
        }

        // Everything left attacks targets in strategy order
        while budget > SETTLED {
            let Some(target) = target_index(&balances, debts, strategy) else {
                break;
            };
            let pay = budget.min(balances[target]);
            balances[target] -= pay;
            budget -= pay;
        }

        // Record debts cleared this month, in catalog order
        for (i, debt) in debts.iter().enumerate() {
            if balances[i] <= SETTLED && !payoff_order.contains(&debt.name) {
                payoff_order.push(debt.name.clone());
            }
        }

        // No progress this month means interest outruns payments
        let owed_after: f64 = balances.iter().sum();
        if owed_after >= owed_before - SETTLED {
            return PayoffPlan {
                months,
                total_interest,
                payoff_order,
                stalled: true,
            };
        }
    }

    PayoffPlan {
        months,
        total_interest,
        payoff_order,
        stalled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt {
                name: "Credit card".to_string(),
                balance: 3000.0,
                apr_pct: 22.0,
                min_payment: 90.0,
            },
            Debt {
                name: "Car loan".to_string(),
                balance: 8000.0,
                apr_pct: 7.0,
                min_payment: 200.0,
            },
            Debt {
                name: "Store card".to_string(),
                balance: 600.0,
                apr_pct: 18.0,
                min_payment: 25.0,
            },
        ]
    }

    #[test]
    fn test_plan_finishes() {
        let plan = payoff_plan(&sample_debts(), 300.0, Strategy::Avalanche);
        assert!(!plan.stalled);
        assert!(plan.months > 0 && plan.months < 60);
        assert_eq!(plan.payoff_order.len(), 3);
    }

    #[test]
    fn test_avalanche_clears_highest_apr_first() {
        let plan = payoff_plan(&sample_debts(), 300.0, Strategy::Avalanche);
        assert_eq!(plan.payoff_order[0], "Credit card");
    }

    #[test]
    fn test_snowball_clears_smallest_balance_first() {
        let plan = payoff_plan(&sample_debts(), 300.0, Strategy::Snowball);
        assert_eq!(plan.payoff_order[0], "Store card");
    }

    #[test]
    fn test_avalanche_never_costs_more_interest() {
        let avalanche = payoff_plan(&sample_debts(), 300.0, Strategy::Avalanche);
        let snowball = payoff_plan(&sample_debts(), 300.0, Strategy::Snowball);
        assert!(avalanche.total_interest <= snowball.total_interest + 1e-6);
    }

    #[test]
    fn test_more_extra_payment_is_faster() {
        let slow = payoff_plan(&sample_debts(), 50.0, Strategy::Avalanche);
        let fast = payoff_plan(&sample_debts(), 500.0, Strategy::Avalanche);
        assert!(fast.months < slow.months);
    }

    #[test]
    fn test_underwater_plan_stalls() {
        let debts = vec![Debt {
            name: "Payday loan".to_string(),
            balance: 10_000.0,
            apr_pct: 120.0,
            min_payment: 10.0,
        }];
        let plan = payoff_plan(&debts, 0.0, Strategy::Avalanche);
        assert!(plan.stalled);
    }

    #[test]
    fn test_no_debts_is_already_free() {
        let plan = payoff_plan(&[], 100.0, Strategy::Snowball);
        assert!(!plan.stalled);
        assert_eq!(plan.months, 0);
        assert!(plan.payoff_order.is_empty());
    }
}
