//! Emergency fund sizing: how many months of expenses the current savings
//! cover, and the gap to a target month count.

#[derive(Clone, Copy, Debug)]
pub struct EmergencyStatus {
    /// Months of expenses the savings cover. Zero when expenses are zero.
    pub months_covered: f64,
    /// Savings needed to reach the target month count.
    pub target_amount: f64,
    /// Remaining amount to save. Zero once the target is met.
    pub gap: f64,
}

pub fn assess(savings: f64, monthly_expenses: f64, target_months: u32) -> EmergencyStatus {
    let months_covered = if monthly_expenses > 0.0 {
        savings / monthly_expenses
    } else {
        0.0
    };
    let target_amount = monthly_expenses * target_months as f64;
    EmergencyStatus {
        months_covered,
        target_amount,
        gap: (target_amount - savings).max(0.0),
    }
}
