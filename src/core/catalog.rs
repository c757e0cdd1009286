//! # Station Catalog
//!
//! Static descriptors for the four stations and their modules. Defined once
//! as `const` data and never mutated, so every layer can hold `'static`
//! references without synchronization.
//!
//! The catalog is the closed set of navigable ids: `Screen`, the main menu,
//! and the station tab strip are all driven from it. Adding a station or
//! module means adding a descriptor here and a matching arm in
//! `tui::modules::build`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier for a top-level station. Closed set, checked at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationId {
    Education,
    Foundation,
    Protection,
    Investment,
}

impl StationId {
    /// Parse a lowercase station name, as used in config files and env vars.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "education" => Some(Self::Education),
            "foundation" => Some(Self::Foundation),
            "protection" => Some(Self::Protection),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }
}

/// Identifier for a sub-module (calculator/assessment) within a station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleId {
    CompoundGrowth,
    LoanCost,
    InflationImpact,
    BudgetCalculator,
    EmergencyFund,
    DebtFreedom,
    LifeCover,
    IncomeShield,
    RiskProfile,
    RetirementSim,
    EsgPortfolio,
}

/// Abstract accent color. Only the TUI layer maps tokens to terminal colors;
/// the core passes them through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Sky,
    Amber,
    Emerald,
    Violet,
}

/// Static metadata for one station, rendered as a menu card and as the
/// station header.
pub struct StationDescriptor {
    pub id: StationId,
    pub number: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Single glyph shown on the menu card.
    pub icon: &'static str,
    pub accent: ColorToken,
    pub tags: &'static [&'static str],
    /// Modules in tab order. The first entry is the default module.
    pub modules: &'static [ModuleDescriptor],
}

/// Static metadata for one module, rendered as a tab label.
pub struct ModuleDescriptor {
    pub id: ModuleId,
    pub title: &'static str,
    /// One-line hint shown under the station header while the module is active.
    pub hint: &'static str,
}

/// The full catalog in menu order.
pub const STATIONS: &[StationDescriptor] = &[
    StationDescriptor {
        id: StationId::Education,
        number: 1,
        title: "Financial Education",
        subtitle: "See how money behaves over time",
        description: "Interactive explorers for the mechanics behind everyday \
            finance: how compounding builds savings, what a loan really costs, \
            and how inflation eats purchasing power.",
        icon: "✎",
        accent: ColorToken::Sky,
        tags: &["compounding", "loans", "inflation"],
        modules: &[
            ModuleDescriptor {
                id: ModuleId::CompoundGrowth,
                title: "Compound Growth",
                hint: "Grow a starting amount with monthly contributions",
            },
            ModuleDescriptor {
                id: ModuleId::LoanCost,
                title: "Loan Cost",
                hint: "Monthly payment and full amortization schedule",
            },
            ModuleDescriptor {
                id: ModuleId::InflationImpact,
                title: "Inflation Impact",
                hint: "What today's money buys in the future",
            },
        ],
    },
    StationDescriptor {
        id: StationId::Foundation,
        number: 2,
        title: "Financial Foundation",
        subtitle: "Budget, buffer, and get out of debt",
        description: "The groundwork: split income with the 50/30/20 rule, \
            size an emergency fund, and simulate the fastest way out of a \
            stack of debts.",
        icon: "⌂",
        accent: ColorToken::Amber,
        tags: &["budget", "savings", "debt"],
        modules: &[
            ModuleDescriptor {
                id: ModuleId::BudgetCalculator,
                title: "Budget Calculator",
                hint: "50/30/20 targets against your actual spending",
            },
            ModuleDescriptor {
                id: ModuleId::EmergencyFund,
                title: "Emergency Fund",
                hint: "Months covered and the gap to your target",
            },
            ModuleDescriptor {
                id: ModuleId::DebtFreedom,
                title: "Debt Freedom Simulator",
                hint: "Avalanche vs snowball payoff plans",
            },
        ],
    },
    StationDescriptor {
        id: StationId::Protection,
        number: 3,
        title: "Protection",
        subtitle: "Cover the people who depend on you",
        description: "Estimate how much life cover replaces your income for \
            the years your family needs it, and whether disability cover \
            would carry your monthly costs.",
        icon: "☂",
        accent: ColorToken::Emerald,
        tags: &["insurance", "income"],
        modules: &[
            ModuleDescriptor {
                id: ModuleId::LifeCover,
                title: "Life Cover Estimator",
                hint: "Income replacement plus debts, minus assets",
            },
            ModuleDescriptor {
                id: ModuleId::IncomeShield,
                title: "Income Shield",
                hint: "Disability cover against monthly outgoings",
            },
        ],
    },
    StationDescriptor {
        id: StationId::Investment,
        number: 4,
        title: "Investment",
        subtitle: "Risk, retirement, and what you own",
        description: "Find your risk profile, stress-test a retirement plan \
            with a Monte Carlo simulation, and weigh a portfolio's ESG \
            footprint.",
        icon: "▲",
        accent: ColorToken::Violet,
        tags: &["risk", "retirement", "esg"],
        modules: &[
            ModuleDescriptor {
                id: ModuleId::RiskProfile,
                title: "Risk Profiling",
                hint: "Five questions, one profile, one model allocation",
            },
            ModuleDescriptor {
                id: ModuleId::RetirementSim,
                title: "Retirement Simulator",
                hint: "Monte Carlo bands for your savings path",
            },
            ModuleDescriptor {
                id: ModuleId::EsgPortfolio,
                title: "ESG Portfolio",
                hint: "Weighted E/S/G scores for a demo portfolio",
            },
        ],
    },
];

/// Look up a station descriptor by id. Total: every `StationId` is in the
/// catalog by construction.
pub fn station(id: StationId) -> &'static StationDescriptor {
    STATIONS
        .iter()
        .find(|s| s.id == id)
        .unwrap_or(&STATIONS[0])
}
