//! 50/30/20 budget split: needs, wants, and savings targets from monthly
//! income, compared against actual spending.

/// Share of income targeted at needs / wants / savings, in that order.
const NEEDS_SHARE: f64 = 0.50;
const WANTS_SHARE: f64 = 0.30;
const SAVINGS_SHARE: f64 = 0.20;

#[derive(Clone, Copy, Debug)]
pub struct BudgetInputs {
    pub monthly_income: f64,
    pub needs_spend: f64,
    pub wants_spend: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct BudgetBreakdown {
    pub needs_target: f64,
    pub wants_target: f64,
    pub savings_target: f64,
    /// Income left after actual needs + wants spending.
    pub actual_savings: f64,
    /// Actual savings minus the 20% target. Negative = behind target.
    pub savings_surplus: f64,
    /// Actual needs spending as a fraction of the needs target (1.0 = on target).
    pub needs_ratio: f64,
    /// Actual wants spending as a fraction of the wants target.
    pub wants_ratio: f64,
}

/// The 50/30/20 targets for a given monthly income.
pub fn targets(monthly_income: f64) -> (f64, f64, f64) {
    (
        monthly_income * NEEDS_SHARE,
        monthly_income * WANTS_SHARE,
        monthly_income * SAVINGS_SHARE,
    )
}

/// Full breakdown of targets vs. actual spending.
pub fn breakdown(inputs: BudgetInputs) -> BudgetBreakdown {
    let (needs_target, wants_target, savings_target) = targets(inputs.monthly_income);
    let actual_savings = inputs.monthly_income - inputs.needs_spend - inputs.wants_spend;

    let ratio = |actual: f64, target: f64| {
        if target > 0.0 { actual / target } else { 0.0 }
    };

    BudgetBreakdown {
        needs_target,
        wants_target,
        savings_target,
        actual_savings,
        savings_surplus: actual_savings - savings_target,
        needs_ratio: ratio(inputs.needs_spend, needs_target),
        wants_ratio: ratio(inputs.wants_spend, wants_target),
    }
}
