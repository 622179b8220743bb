//! Policy decisions - the levers a government sets each year

use serde::{Deserialize, Serialize};

/// A policy lever. Closed set: the sensitivity tables in the effect and
/// spillover systems match on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Education,
    Health,
    Infrastructure,
    Environment,
    Trade,
    Tariff,
    Cooperation,
    Agriculture,
    Manufacturing,
    Services,
    Energy,
    Technology,
    Tourism,
    FiscalDeficit,
    ForeignInvestment,
    SocialProtection,
    LaborMarket,
}

pub const ALL_LEVERS: [Lever; 17] = [
    Lever::Education,
    Lever::Health,
    Lever::Infrastructure,
    Lever::Environment,
    Lever::Trade,
    Lever::Tariff,
    Lever::Cooperation,
    Lever::Agriculture,
    Lever::Manufacturing,
    Lever::Services,
    Lever::Energy,
    Lever::Technology,
    Lever::Tourism,
    Lever::FiscalDeficit,
    Lever::ForeignInvestment,
    Lever::SocialProtection,
    Lever::LaborMarket,
];

/// Broad grouping used for display and product matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeverCategory {
    Education,
    Health,
    Infrastructure,
    Environment,
    Economic,
    Agriculture,
    Manufacturing,
    Services,
    Energy,
    Technology,
    Tourism,
    Fiscal,
    Investment,
    Social,
    Labor,
}

/// Static definition of one lever: display metadata plus the allowed range
#[derive(Debug, Clone, Copy)]
pub struct LeverDef {
    pub name: &'static str,
    pub description: &'static str,
    pub category: LeverCategory,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

impl Lever {
    /// Stable string id, matching the decision keys the data files use
    pub fn id(self) -> &'static str {
        match self {
            Lever::Education => "education",
            Lever::Health => "health",
            Lever::Infrastructure => "infrastructure",
            Lever::Environment => "environment",
            Lever::Trade => "trade",
            Lever::Tariff => "tariff",
            Lever::Cooperation => "cooperation",
            Lever::Agriculture => "agriculture",
            Lever::Manufacturing => "manufacturing",
            Lever::Services => "services",
            Lever::Energy => "energy",
            Lever::Technology => "technology",
            Lever::Tourism => "tourism",
            Lever::FiscalDeficit => "fiscal_deficit",
            Lever::ForeignInvestment => "foreign_investment",
            Lever::SocialProtection => "social_protection",
            Lever::LaborMarket => "labor_market",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ALL_LEVERS.iter().copied().find(|l| l.id() == id)
    }

    pub fn def(self) -> &'static LeverDef {
        match self {
            Lever::Education => &LeverDef {
                name: "Education Spending",
                description: "Invest in schools, universities, and literacy programs",
                category: LeverCategory::Education,
                default: 4.0,
                min: 1.0,
                max: 15.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Health => &LeverDef {
                name: "Healthcare Investment",
                description: "Fund hospitals, medical infrastructure, and public health",
                category: LeverCategory::Health,
                default: 3.0,
                min: 1.0,
                max: 12.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Infrastructure => &LeverDef {
                name: "Infrastructure Development",
                description: "Build roads, bridges, power plants, and telecommunications",
                category: LeverCategory::Infrastructure,
                default: 5.0,
                min: 2.0,
                max: 20.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Environment => &LeverDef {
                name: "Environmental Policy",
                description: "Implement green technologies and emission reduction measures",
                category: LeverCategory::Environment,
                default: 2.0,
                min: 0.0,
                max: 8.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Trade => &LeverDef {
                name: "Trade Liberalization",
                description: "Open markets, reduce barriers, and promote international trade",
                category: LeverCategory::Economic,
                default: 50.0,
                min: 0.0,
                max: 100.0,
                step: 5.0,
                unit: "% Open",
            },
            Lever::Tariff => &LeverDef {
                name: "Tariff Policy",
                description: "Set import tariffs to protect domestic industries vs. free trade",
                category: LeverCategory::Economic,
                default: 15.0,
                min: 0.0,
                max: 40.0,
                step: 2.0,
                unit: "% Avg",
            },
            Lever::Cooperation => &LeverDef {
                name: "Regional Cooperation",
                description: "Invest in SAARC initiatives and bilateral partnerships",
                category: LeverCategory::Economic,
                default: 50.0,
                min: 0.0,
                max: 100.0,
                step: 5.0,
                unit: "% Engagement",
            },
            Lever::Agriculture => &LeverDef {
                name: "Agricultural Development",
                description: "Subsidies, irrigation, technology, and rural development programs",
                category: LeverCategory::Agriculture,
                default: 3.5,
                min: 1.0,
                max: 12.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Manufacturing => &LeverDef {
                name: "Manufacturing Incentives",
                description: "Industrial parks, tax breaks, and manufacturing promotion",
                category: LeverCategory::Manufacturing,
                default: 2.0,
                min: 0.5,
                max: 8.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Services => &LeverDef {
                name: "Services Sector Development",
                description: "IT, finance, tourism, and service industry promotion",
                category: LeverCategory::Services,
                default: 1.5,
                min: 0.5,
                max: 6.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Energy => &LeverDef {
                name: "Energy Policy",
                description: "Power generation, renewable energy, and energy security",
                category: LeverCategory::Energy,
                default: 4.0,
                min: 2.0,
                max: 15.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::Technology => &LeverDef {
                name: "Technology & Innovation",
                description: "R&D, digital infrastructure, and innovation ecosystems",
                category: LeverCategory::Technology,
                default: 1.0,
                min: 0.2,
                max: 5.0,
                step: 0.2,
                unit: "% GDP",
            },
            Lever::Tourism => &LeverDef {
                name: "Tourism Development",
                description: "Tourism infrastructure, marketing, and hospitality sector",
                category: LeverCategory::Tourism,
                default: 0.8,
                min: 0.1,
                max: 4.0,
                step: 0.1,
                unit: "% GDP",
            },
            Lever::FiscalDeficit => &LeverDef {
                name: "Fiscal Deficit Target",
                description: "Government budget deficit as percentage of GDP",
                category: LeverCategory::Fiscal,
                default: 3.5,
                min: 0.0,
                max: 10.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::ForeignInvestment => &LeverDef {
                name: "Foreign Investment Policy",
                description: "FDI limits, investment incentives, and market access",
                category: LeverCategory::Investment,
                default: 60.0,
                min: 20.0,
                max: 100.0,
                step: 5.0,
                unit: "% Open",
            },
            Lever::SocialProtection => &LeverDef {
                name: "Social Protection",
                description: "Welfare programs, unemployment benefits, and social safety nets",
                category: LeverCategory::Social,
                default: 2.5,
                min: 0.5,
                max: 8.0,
                step: 0.5,
                unit: "% GDP",
            },
            Lever::LaborMarket => &LeverDef {
                name: "Labor Market Flexibility",
                description: "Employment laws, worker rights, and labor market regulations",
                category: LeverCategory::Labor,
                default: 50.0,
                min: 20.0,
                max: 80.0,
                step: 5.0,
                unit: "% Flexible",
            },
        }
    }

    pub fn default_value(self) -> f64 {
        self.def().default
    }
}

/// One lever's chosen value for a year
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub lever: Lever,
    pub value: f64,
}

/// A country's full decision set for one year. Ordered, one entry per lever.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionSet {
    decisions: Vec<PolicyDecision>,
}

impl DecisionSet {
    /// Every lever at its published default
    pub fn defaults() -> Self {
        Self {
            decisions: ALL_LEVERS
                .iter()
                .map(|&lever| PolicyDecision {
                    lever,
                    value: lever.default_value(),
                })
                .collect(),
        }
    }

    pub fn value(&self, lever: Lever) -> Option<f64> {
        self.decisions.iter().find(|d| d.lever == lever).map(|d| d.value)
    }

    /// Lookup that never misses: absent levers read as their published
    /// default
    pub fn value_or_default(&self, lever: Lever) -> f64 {
        self.value(lever).unwrap_or_else(|| lever.default_value())
    }

    /// Set a lever, re-clamped to its declared [min, max]
    pub fn set(&mut self, lever: Lever, value: f64) {
        let def = lever.def();
        let clamped = value.clamp(def.min, def.max);
        match self.decisions.iter_mut().find(|d| d.lever == lever) {
            Some(decision) => decision.value = clamped,
            None => self.decisions.push(PolicyDecision { lever, value: clamped }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyDecision> {
        self.decisions.iter()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl Default for DecisionSet {
    fn default() -> Self {
        Self::defaults()
    }
}
