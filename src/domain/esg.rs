//! ESG portfolio scoring: weight-averaged environmental, social, and
//! governance pillar scores (0–10 scale) with a rating band.

#[derive(Clone, Debug)]
pub struct Holding {
    pub name: &'static str,
    pub sector: &'static str,
    /// Portfolio weight in percent. Weights need not sum to 100; scores
    /// normalize over the actual total.
    pub weight_pct: f64,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Leader,
    Average,
    Laggard,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Leader => "Leader",
            Rating::Average => "Average",
            Rating::Laggard => "Laggard",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EsgSummary {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub composite: f64,
    pub rating: Rating,
}

/// The demo holding set shown in the ESG module. Weights are a starting
/// point; the module lets the user shift them.
pub fn demo_portfolio() -> Vec<Holding> {
    vec![
        Holding {
            name: "Northwind Renewables",
            sector: "Utilities",
            weight_pct: 25.0,
            environmental: 9.1,
            social: 7.2,
            governance: 7.8,
        },
        Holding {
            name: "Atlas Consumer Goods",
            sector: "Consumer",
            weight_pct: 20.0,
            environmental: 6.0,
            social: 7.5,
            governance: 8.2,
        },
        Holding {
            name: "Meridian Software",
            sector: "Technology",
            weight_pct: 20.0,
            environmental: 7.4,
            social: 8.1,
            governance: 8.8,
        },
        Holding {
            name: "Crestline Materials",
            sector: "Materials",
            weight_pct: 15.0,
            environmental: 3.2,
            social: 5.0,
            governance: 6.1,
        },
        Holding {
            name: "Harbor Health Group",
            sector: "Healthcare",
            weight_pct: 20.0,
            environmental: 6.8,
            social: 8.9,
            governance: 7.0,
        },
    ]
}

fn rating_for(composite: f64) -> Rating {
    if composite >= 7.0 {
        Rating::Leader
    } else if composite >= 5.0 {
        Rating::Average
    } else {
        Rating::Laggard
    }
}

/// Weight-averaged pillar scores and their mean composite. An empty or
/// zero-weight portfolio scores zero across the board.
pub fn portfolio_score(holdings: &[Holding]) -> EsgSummary {
    let total_weight: f64 = holdings.iter().map(|h| h.weight_pct.max(0.0)).sum();
    if total_weight <= 0.0 {
        return EsgSummary {
            environmental: 0.0,
            social: 0.0,
            governance: 0.0,
            composite: 0.0,
            rating: Rating::Laggard,
        };
    }

    let weighted = |pick: fn(&Holding) -> f64| {
        holdings
            .iter()
            .map(|h| pick(h) * h.weight_pct.max(0.0))
            .sum::<f64>()
            / total_weight
    };

    let environmental = weighted(|h| h.environmental);
    let social = weighted(|h| h.social);
    let governance = weighted(|h| h.governance);
    let composite = (environmental + social + governance) / 3.0;

    EsgSummary {
        environmental,
        social,
        governance,
        composite,
        rating: rating_for(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_portfolio_scores_in_range() {
        let summary = portfolio_score(&demo_portfolio());
        for score in [
            summary.environmental,
            summary.social,
            summary.governance,
            summary.composite,
        ] {
            assert!((0.0..=10.0).contains(&score), "out of range: {score}");
        }
    }

    #[test]
    fn test_single_holding_scores_itself() {
        let holdings = vec![Holding {
            name: "Solo",
            sector: "Test",
            weight_pct: 40.0,
            environmental: 8.0,
            social: 6.0,
            governance: 7.0,
        }];
        let summary = portfolio_score(&holdings);
        assert_eq!(summary.environmental, 8.0);
        assert_eq!(summary.social, 6.0);
        assert_eq!(summary.governance, 7.0);
        assert_eq!(summary.composite, 7.0);
        assert_eq!(summary.rating, Rating::Leader);
    }

    #[test]
    fn test_weights_tilt_the_score() {
        let mut holdings = demo_portfolio();
        let base = portfolio_score(&holdings);
        // Pile the weight onto the weakest environmental performer
        for h in &mut holdings {
            h.weight_pct = if h.name == "Crestline Materials" { 90.0 } else { 2.5 };
        }
        let tilted = portfolio_score(&holdings);
        assert!(tilted.environmental < base.environmental);
        assert!(tilted.composite < base.composite);
    }

    #[test]
    fn test_empty_portfolio_is_laggard_zero() {
        let summary = portfolio_score(&[]);
        assert_eq!(summary.composite, 0.0);
        assert_eq!(summary.rating, Rating::Laggard);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(rating_for(8.0), Rating::Leader);
        assert_eq!(rating_for(6.0), Rating::Average);
        assert_eq!(rating_for(3.0), Rating::Laggard);
    }
}
