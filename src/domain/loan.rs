//! Fixed-rate loan cost: monthly payment and the full amortization schedule.

#[derive(Clone, Copy, Debug)]
pub struct AmortizationRow {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

#[derive(Clone, Debug)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub schedule: Vec<AmortizationRow>,
}

/// Standard annuity payment. Zero-rate loans divide the principal evenly.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let n = (years * 12) as f64;
    if n == 0.0 {
        return principal;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    let factor = (1.0 + r).powf(n);
    principal * r * factor / (factor - 1.0)
}

/// Full amortization of a fixed-rate loan. The final payment is adjusted so
/// the balance lands exactly on zero.
pub fn amortize(principal: f64, annual_rate_pct: f64, years: u32) -> LoanSummary {
    let payment = monthly_payment(principal, annual_rate_pct, years);
    let r = annual_rate_pct / 100.0 / 12.0;
    let months = years * 12;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;
    let mut total_interest = 0.0;

    for month in 1..=months {
        let interest = balance * r;
        let principal_part = (payment - interest).min(balance);
        balance -= principal_part;
        total_interest += interest;
        schedule.push(AmortizationRow {
            month,
            interest,
            principal: principal_part,
            balance,
        });
        if balance <= 0.0 {
            break;
        }
    }

    LoanSummary {
        monthly_payment: payment,
        total_paid: principal + total_interest,
        total_interest,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payment_known_value() {
        // 200k over 30 years at 6%: the textbook 1199.10
        let p = monthly_payment(200_000.0, 6.0, 30);
        assert!((p - 1199.10).abs() < 0.01, "got {p}");
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let p = monthly_payment(12_000.0, 0.0, 1);
        assert!((p - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_amortization_ends_at_zero() {
        let summary = amortize(50_000.0, 4.5, 10);
        let last = summary.schedule.last().unwrap();
        assert!(last.balance.abs() < 0.01, "residual {}", last.balance);
        assert_eq!(summary.schedule.len(), 120);
    }

    #[test]
    fn test_interest_share_shrinks_over_time() {
        let summary = amortize(100_000.0, 5.0, 15);
        let first = &summary.schedule[0];
        let last = summary.schedule.last().unwrap();
        assert!(first.interest > last.interest);
        assert!(first.principal < last.principal);
    }

    #[test]
    fn test_total_paid_exceeds_principal_with_interest() {
        let summary = amortize(10_000.0, 8.0, 5);
        assert!(summary.total_interest > 0.0);
        assert!((summary.total_paid - 10_000.0 - summary.total_interest).abs() < 1e-6);
    }
}
