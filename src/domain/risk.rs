//! Risk profiling questionnaire: five fixed questions, answer points sum
//! to a score, score bands map to a profile with a model allocation.

pub struct Question {
    pub text: &'static str,
    pub answers: &'static [Answer],
}

pub struct Answer {
    pub label: &'static str,
    pub points: u32,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        text: "Your portfolio drops 20% in a month. What do you do?",
        answers: &[
            Answer { label: "Sell everything, I can't watch this", points: 0 },
            Answer { label: "Sell some to stop the bleeding", points: 1 },
            Answer { label: "Hold and wait it out", points: 2 },
            Answer { label: "Buy more while it's cheap", points: 3 },
        ],
    },
    Question {
        text: "When do you expect to need this money?",
        answers: &[
            Answer { label: "Within 3 years", points: 0 },
            Answer { label: "In 3 to 7 years", points: 1 },
            Answer { label: "In 7 to 15 years", points: 2 },
            Answer { label: "Not for 15+ years", points: 3 },
        ],
    },
    Question {
        text: "How stable is your income?",
        answers: &[
            Answer { label: "Irregular or at risk", points: 0 },
            Answer { label: "Mostly stable", points: 1 },
            Answer { label: "Very stable", points: 2 },
            Answer { label: "Stable with reserves to spare", points: 3 },
        ],
    },
    Question {
        text: "Which outcome range would you pick for 10k over a year?",
        answers: &[
            Answer { label: "9.8k to 10.4k", points: 0 },
            Answer { label: "9.2k to 11.2k", points: 1 },
            Answer { label: "8.5k to 12.5k", points: 2 },
            Answer { label: "7k to 15k", points: 3 },
        ],
    },
    Question {
        text: "How much investing experience do you have?",
        answers: &[
            Answer { label: "None", points: 0 },
            Answer { label: "Savings products only", points: 1 },
            Answer { label: "Funds and shares for a few years", points: 2 },
            Answer { label: "Broad, including downturns", points: 3 },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskProfile {
    Conservative,
    Cautious,
    Balanced,
    Growth,
    Aggressive,
}

/// Model portfolio split in percent. Always sums to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub stocks_pct: u8,
    pub bonds_pct: u8,
    pub cash_pct: u8,
}

impl RiskProfile {
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Cautious => "Cautious",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Growth => "Growth",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    pub fn allocation(&self) -> Allocation {
        match self {
            RiskProfile::Conservative => Allocation { stocks_pct: 20, bonds_pct: 50, cash_pct: 30 },
            RiskProfile::Cautious => Allocation { stocks_pct: 40, bonds_pct: 45, cash_pct: 15 },
            RiskProfile::Balanced => Allocation { stocks_pct: 60, bonds_pct: 30, cash_pct: 10 },
            RiskProfile::Growth => Allocation { stocks_pct: 80, bonds_pct: 15, cash_pct: 5 },
            RiskProfile::Aggressive => Allocation { stocks_pct: 95, bonds_pct: 5, cash_pct: 0 },
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => {
                "Capital preservation first. Expect modest growth and small swings."
            }
            RiskProfile::Cautious => {
                "Mostly defensive, with a measured slice of growth assets."
            }
            RiskProfile::Balanced => {
                "Growth and stability in roughly equal measure."
            }
            RiskProfile::Growth => {
                "Long horizon, growth-heavy. Larger drawdowns are part of the deal."
            }
            RiskProfile::Aggressive => {
                "Maximum growth orientation. Volatility is the price of admission."
            }
        }
    }
}

/// Highest score the questionnaire can produce.
pub fn max_score() -> u32 {
    QUESTIONS
        .iter()
        .map(|q| q.answers.iter().map(|a| a.points).max().unwrap_or(0))
        .sum()
}

/// Sum the points for one chosen answer index per question. Out-of-range
/// indices clamp to the last answer; missing answers count as zero.
pub fn score(choices: &[usize]) -> u32 {
    QUESTIONS
        .iter()
        .zip(choices)
        .map(|(q, &choice)| {
            let idx = choice.min(q.answers.len().saturating_sub(1));
            q.answers[idx].points
        })
        .sum()
}

/// Map a score onto a profile. Bands split the 0..=max range evenly.
pub fn profile_for(score: u32) -> RiskProfile {
    let max = max_score().max(1);
    // Five even bands over the score range
    match score * 5 / (max + 1) {
        0 => RiskProfile::Conservative,
        1 => RiskProfile::Cautious,
        2 => RiskProfile::Balanced,
        3 => RiskProfile::Growth,
        _ => RiskProfile::Aggressive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_score() {
        assert_eq!(max_score(), 15);
    }

    #[test]
    fn test_all_lowest_answers_is_conservative() {
        let choices = vec![0; QUESTIONS.len()];
        assert_eq!(profile_for(score(&choices)), RiskProfile::Conservative);
    }

    #[test]
    fn test_all_highest_answers_is_aggressive() {
        let choices = vec![3; QUESTIONS.len()];
        assert_eq!(score(&choices), 15);
        assert_eq!(profile_for(15), RiskProfile::Aggressive);
    }

    #[test]
    fn test_middle_answers_land_near_balanced() {
        let choices = vec![2; QUESTIONS.len()];
        let profile = profile_for(score(&choices));
        assert!(matches!(profile, RiskProfile::Balanced | RiskProfile::Growth));
    }

    #[test]
    fn test_out_of_range_choice_clamps() {
        let choices = vec![99; QUESTIONS.len()];
        assert_eq!(score(&choices), 15);
    }

    #[test]
    fn test_partial_answers_score_partially() {
        assert_eq!(score(&[3]), 3);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_profile_monotonic_in_score() {
        let mut last = 0u32;
        for s in 0..=max_score() {
            let rank = match profile_for(s) {
                RiskProfile::Conservative => 0,
                RiskProfile::Cautious => 1,
                RiskProfile::Balanced => 2,
                RiskProfile::Growth => 3,
                RiskProfile::Aggressive => 4,
            };
            assert!(rank >= last, "profile rank regressed at score {s}");
            last = rank;
        }
    }

    #[test]
    fn test_allocations_sum_to_hundred() {
        for profile in [
            RiskProfile::Conservative,
            RiskProfile::Cautious,
            RiskProfile::Balanced,
            RiskProfile::Growth,
            RiskProfile::Aggressive,
        ] {
            let a = profile.allocation();
            assert_eq!(
                a.stocks_pct as u32 + a.bonds_pct as u32 + a.cash_pct as u32,
                100,
                "{} allocation does not sum to 100",
                profile.label()
            );
        }
    }
}
