//! Turn orchestrator - owns the world state and drives one year at a time
//!
//! Phases: Select (no country chosen) -> Play (repeated year advances) ->
//! Report (score computed). Restart returns to Select with freshly built
//! snapshots. The presentation layer only ever talks to the engine through
//! `Action` dispatch and read-only accessors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::rng::{SeededRng, SimRng};
use crate::core::types::Year;
use crate::data::indicators::IndicatorStore;
use crate::data::products::ProductCatalog;
use crate::region::country::{self, SOUTH_ASIAN_COUNTRIES};
use crate::region::decisions::{DecisionSet, Lever};
use crate::region::indicators::IndicatorSnapshot;
use crate::region::spillover::PolicySpillover;
use crate::region::systems;
use crate::region::systems::spillover::PolicyDeltas;
use crate::region::systems::trade_update::TradeStance;
use crate::region::trade::RegionalMatrix;
use crate::region::world::WorldState;

/// Configuration for one game session
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub start_year: Year,
    pub end_year: Year,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_year: 2023,
            end_year: 2043,
            seed: 12345,
        }
    }
}

/// Where a session currently stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Select,
    Play,
    Report,
}

/// Everything the presentation layer may ask the engine to do
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectCountry(String),
    /// Re-clamped to the lever's declared range on arrival
    SetDecision(Lever, f64),
    AdvanceYear,
    FinishGame,
    Restart,
}

pub struct Game<R: SimRng = SeededRng> {
    config: GameConfig,
    store: IndicatorStore,
    products: ProductCatalog,
    world: WorldState,
    phase: GamePhase,
    /// Decision set per country, replaced by the AI pass each year
    decisions: BTreeMap<String, DecisionSet>,
    /// Append-only yearly snapshots of the player country
    history: Vec<IndicatorSnapshot>,
    final_score: Option<f64>,
    rng: R,
}

impl Game<SeededRng> {
    pub fn new(config: GameConfig) -> Self {
        let rng = SeededRng::seed_from_u64(config.seed);
        Self::with_rng(
            config,
            IndicatorStore::south_asia(),
            ProductCatalog::south_asia(),
            rng,
        )
    }
}

impl<R: SimRng> Game<R> {
    pub fn with_rng(
        config: GameConfig,
        store: IndicatorStore,
        products: ProductCatalog,
        rng: R,
    ) -> Self {
        let world = WorldState {
            countries: BTreeMap::new(),
            player_country: String::new(),
            matrix: RegionalMatrix::initial(),
            spillovers: Vec::new(),
            detailed_spillovers: Vec::new(),
            year: config.start_year,
            active: false,
        };
        Self {
            config,
            store,
            products,
            world,
            phase: GamePhase::Select,
            decisions: BTreeMap::new(),
            history: Vec::new(),
            final_score: None,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn history(&self) -> &[IndicatorSnapshot] {
        &self.history
    }

    pub fn final_score(&self) -> Option<f64> {
        self.final_score
    }

    pub fn decisions(&self, country: &str) -> Option<&DecisionSet> {
        self.decisions.get(country)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match (self.phase, action) {
            (GamePhase::Select, Action::SelectCountry(name)) => self.select_country(&name),
            (GamePhase::Play, Action::SetDecision(lever, value)) => {
                self.set_decision(lever, value);
                Ok(())
            }
            (GamePhase::Play, Action::AdvanceYear) => {
                self.advance_year();
                Ok(())
            }
            (GamePhase::Play, Action::FinishGame) => self.finish_game(),
            (GamePhase::Play | GamePhase::Report, Action::Restart) => {
                self.restart();
                Ok(())
            }
            (phase, _) => Err(SimError::WrongPhase(phase)),
        }
    }

    fn select_country(&mut self, name: &str) -> Result<()> {
        if !country::is_known(name) {
            return Err(SimError::UnknownCountry(name.to_string()));
        }

        let start = self.config.start_year;
        for c in SOUTH_ASIAN_COUNTRIES {
            self.world
                .countries
                .insert(c.name.to_string(), self.store.initial_snapshot(c.name, start));
            let set = if c.name == name {
                DecisionSet::defaults()
            } else {
                systems::starting_decisions(c.name)
            };
            self.decisions.insert(c.name.to_string(), set);
        }

        self.world.player_country = name.to_string();
        self.world.year = start;
        self.world.active = true;
        self.history = vec![self.world.countries[name].clone()];
        self.phase = GamePhase::Play;

        tracing::info!(country = name, year = start, "game started");
        Ok(())
    }

    fn set_decision(&mut self, lever: Lever, value: f64) {
        if let Some(set) = self.decisions.get_mut(&self.world.player_country) {
            set.set(lever, value);
        }
    }

    /// Advance the world by one year. Play -> Play; every call moves the
    /// state monotonically (year, snapshots, matrix, event log).
    fn advance_year(&mut self) {
        if !self.world.active {
            return;
        }
        let year = self.world.year + 1;
        let player = self.world.player_country.clone();

        // 1. AI reactions for every computer-run country
        let names: Vec<String> = self.world.countries.keys().cloned().collect();
        for name in &names {
            if *name == player {
                continue;
            }
            let Some(stats) = self.world.countries.get(name) else {
                continue;
            };
            let current = self
                .decisions
                .get(name)
                .cloned()
                .unwrap_or_else(DecisionSet::defaults);
            let adjusted = systems::adjust_ai_decisions(&current, stats, &mut self.rng);
            self.decisions.insert(name.clone(), adjusted);
        }

        // 2. Spillovers radiating from every country
        let mut spillovers_by_target: BTreeMap<String, Vec<PolicySpillover>> = BTreeMap::new();
        for name in &names {
            let Some(set) = self.decisions.get(name) else {
                continue;
            };
            let deltas = PolicyDeltas::from_decisions(set);
            for spillover in systems::trade_spillovers(name, &deltas, &self.world.matrix.trade) {
                spillovers_by_target
                    .entry(spillover.target.clone())
                    .or_default()
                    .push(spillover);
            }
        }

        // Product-level analysis for the player country
        let detailed = match self.decisions.get(&player) {
            Some(set) => {
                let deltas = systems::spillover::lever_deltas(set);
                systems::detailed_spillovers(
                    &player,
                    &deltas,
                    &self.world.matrix.trade,
                    &self.products,
                )
            }
            None => Vec::new(),
        };

        // This year's regional events, drawn against the fresh cooperation
        // average
        let cooperation_index = self.mean_cooperation();
        let events = systems::generate_regional_events(year, cooperation_index, &mut self.rng);

        // 3 + 4. Policy effects per country, then event effects by field name
        let defaults = DecisionSet::defaults();
        let empty = Vec::new();
        let mut next_countries = BTreeMap::new();
        for (name, stats) in &self.world.countries {
            let set = self.decisions.get(name).unwrap_or(&defaults);
            let spillovers = spillovers_by_target.get(name).unwrap_or(&empty);
            let mut next = systems::apply_policy_effects(stats, set, spillovers, &mut self.rng);
            for event in &events {
                for (key, value) in &event.effects {
                    if let Some(indicator) = key.indicator() {
                        indicator.add(&mut next, *value);
                    }
                }
            }
            next.year = year;
            next_countries.insert(name.clone(), next);
        }

        // 5. Trade matrix from this year's stances
        let stances: BTreeMap<String, TradeStance> = self
            .decisions
            .iter()
            .map(|(name, set)| (name.clone(), TradeStance::from_decisions(set)))
            .collect();
        let new_trade = systems::update_trade_matrix(&self.world.matrix.trade, &stances);

        // 6 + 7. Publish the new world state
        for event in &events {
            tracing::info!(name = %event.name, year, "regional event");
        }
        self.world.countries = next_countries;
        self.world.year = year;
        self.world.spillovers = spillovers_by_target.into_values().flatten().collect();
        self.world.detailed_spillovers = detailed;
        self.world.matrix.trade = new_trade;
        self.world.matrix.cooperation_index = cooperation_index;
        self.world.matrix.events.extend(events);

        if let Some(snapshot) = self.world.countries.get(&player) {
            self.history.push(snapshot.clone());
        }

        tracing::debug!(
            year,
            spillovers = self.world.spillovers.len(),
            cooperation = cooperation_index,
            "year advanced"
        );
    }

    fn finish_game(&mut self) -> Result<()> {
        if self.world.year < self.config.end_year {
            return Err(SimError::HorizonNotReached {
                year: self.world.year,
                end: self.config.end_year,
            });
        }
        let (Some(final_stats), Some(initial)) = (
            self.world.countries.get(&self.world.player_country),
            self.history.first(),
        ) else {
            return Err(SimError::WrongPhase(self.phase));
        };

        let score = systems::calculate_score(final_stats, initial);
        self.final_score = Some(score);
        self.world.active = false;
        self.phase = GamePhase::Report;

        tracing::info!(score, "game finished");
        Ok(())
    }

    fn restart(&mut self) {
        self.world = WorldState {
            countries: BTreeMap::new(),
            player_country: String::new(),
            matrix: RegionalMatrix::initial(),
            spillovers: Vec::new(),
            detailed_spillovers: Vec::new(),
            year: self.config.start_year,
            active: false,
        };
        self.decisions.clear();
        self.history.clear();
        self.final_score = None;
        self.phase = GamePhase::Select;
        tracing::info!("game reset");
    }

    /// Regional cooperation: the mean of every country's cooperation lever
    fn mean_cooperation(&self) -> f64 {
        if self.decisions.is_empty() {
            return Lever::Cooperation.default_value();
        }
        let sum: f64 = self
            .decisions
            .values()
            .map(|set| set.value_or_default(Lever::Cooperation))
            .sum();
        sum / self.decisions.len() as f64
    }
}
