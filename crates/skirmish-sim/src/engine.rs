//! Battle engine: the core of the game.
//!
//! `BattleEngine` owns the hecs ECS world and all battle state, gates
//! deployments, runs every system on `update`, and publishes a `GameState`
//! snapshot to its observers after each operation. Completely headless
//! (no rendering or frame-clock dependency), enabling deterministic testing.

use std::sync::mpsc;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use skirmish_core::characters::{Character, CharacterCatalog, CharacterId};
use skirmish_core::commands::BattleCommand;
use skirmish_core::enums::{Faction, GameStatus, Lane};
use skirmish_core::error::{CommandError, DeckError, DeployError};
use skirmish_core::events::BattleEvent;
use skirmish_core::state::GameState;
use skirmish_core::types::{SimTime, UnitId};
use skirmish_enemy_ai::planner::SpawnPlanner;
use skirmish_enemy_ai::roster::EnemyRoster;

use crate::battlefield::Battlefield;
use crate::config::{BattleConfig, ConfigError};
use crate::deployment;
use crate::economy::{EnergyPool, ScoreState};
use crate::observers::{ObserverRegistry, SubscriptionId};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// The battle engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    config: BattleConfig,
    catalog: CharacterCatalog,
    roster: EnemyRoster,
    world: World,
    time: SimTime,
    status: GameStatus,
    energy: EnergyPool,
    score: ScoreState,
    deck: Vec<CharacterId>,
    planner: SpawnPlanner,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    events: Vec<BattleEvent>,
    despawn_buffer: Vec<Entity>,
    observers: ObserverRegistry,
    published: GameState,
}

impl BattleEngine {
    /// Create an engine using the builtin character catalog.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CharacterCatalog::builtin())
    }

    /// Create an engine that resolves character ids against `catalog`.
    pub fn with_catalog(
        config: BattleConfig,
        catalog: CharacterCatalog,
    ) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        let roster = EnemyRoster::from_ids(&catalog, &config.enemy_ai.roster)?;

        let mut engine = Self {
            energy: EnergyPool::from_config(&config),
            planner: SpawnPlanner::new(config.enemy_ai.timing()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            catalog,
            roster,
            world: World::new(),
            time: SimTime::default(),
            status: GameStatus::Menu,
            score: ScoreState::default(),
            deck: Vec::new(),
            next_unit_id: 0,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            observers: ObserverRegistry::new(),
            published: GameState::default(),
        };
        engine.reset_battle_state();
        engine.published = engine.build_snapshot(Vec::new());
        Ok(engine)
    }

    // ---- State store ----

    /// Owned copy of the most recently published state.
    pub fn get_state(&self) -> GameState {
        self.published.clone()
    }

    /// Register a callback run after every state-changing operation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Register a channel that receives every published state.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, mpsc::Receiver<GameState>) {
        self.observers.subscribe_channel()
    }

    /// Stop notifying a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ---- Lifecycle ----

    /// Start a fresh battle with `deck`. An invalid deck changes nothing.
    pub fn start_game<I, S>(&mut self, deck: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = S>,
        S: Into<CharacterId>,
    {
        let deck: Vec<CharacterId> = deck.into_iter().map(Into::into).collect();
        if let Err(err) = deployment::validate_deck(&deck) {
            debug!(error = %err, "start rejected");
            self.publish();
            return Err(err);
        }

        self.reset_battle_state();
        self.deck = deck;
        self.status = GameStatus::Playing;
        info!(deck = ?self.deck, seed = self.config.seed, "battle started");
        self.publish();
        Ok(())
    }

    /// Suspend a battle in progress.
    pub fn pause_game(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
            info!(elapsed_secs = self.time.elapsed_secs, "battle paused");
        }
        self.publish();
    }

    /// Continue a paused battle.
    pub fn resume_game(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
            info!(elapsed_secs = self.time.elapsed_secs, "battle resumed");
        }
        self.publish();
    }

    /// Discard the battle and return to the menu with default towers/energy.
    pub fn reset_game(&mut self) {
        self.reset_battle_state();
        self.deck.clear();
        self.status = GameStatus::Menu;
        info!("battle reset");
        self.publish();
    }

    // ---- Tick scheduler ----

    /// Advance the battle by `delta_secs` of simulated time and publish.
    ///
    /// Outside `Playing`, or for a zero, negative or non-finite delta, the
    /// state is left untouched and only republished.
    pub fn update(&mut self, delta_secs: f64) {
        if self.status == GameStatus::Playing && delta_secs.is_finite() && delta_secs > 0.0 {
            self.run_systems(delta_secs);
        }
        self.publish();
    }

    // ---- Deployment gate ----

    /// Whether `character` is affordable right now.
    pub fn can_place_character(&self, character: &Character) -> bool {
        deployment::can_place(self.status, &self.energy, character)
    }

    /// Deploy `character` into `lane`. Returns false, changing nothing, when
    /// the battle is not running, the card is not in the deck, or energy is
    /// short.
    pub fn place_character(&mut self, character: &Character, lane: Lane) -> bool {
        self.try_place_character(character, lane).is_ok()
    }

    /// As [`place_character`](Self::place_character), with the reason for a
    /// refusal.
    pub fn try_place_character(
        &mut self,
        character: &Character,
        lane: Lane,
    ) -> Result<UnitId, DeployError> {
        let result = match deployment::check(self.status, &self.energy, &self.deck, character) {
            Ok(()) => {
                self.energy.spend(character.cost);
                let unit_id = deployment::deploy(
                    &mut self.world,
                    &mut self.next_unit_id,
                    Faction::Player,
                    lane,
                    character,
                    &mut self.events,
                );
                debug!(%unit_id, character = %character.id, ?lane, energy = self.energy.current(), "player deployed");
                Ok(unit_id)
            }
            Err(err) => {
                debug!(character = %character.id, error = %err, "deployment rejected");
                Err(err)
            }
        };
        self.publish();
        result
    }

    /// Apply a host command, resolving character ids through the catalog.
    pub fn apply(&mut self, command: BattleCommand) -> Result<(), CommandError> {
        match command {
            BattleCommand::StartGame { deck } => self.start_game(deck)?,
            BattleCommand::PlaceCharacter { character_id, lane } => {
                let Some(character) = self.catalog.get(character_id.as_str()).cloned() else {
                    debug!(character = %character_id, "unknown character");
                    self.publish();
                    return Err(DeployError::UnknownCharacter(character_id).into());
                };
                self.try_place_character(&character, lane)?;
            }
            BattleCommand::Pause => self.pause_game(),
            BattleCommand::Resume => self.resume_game(),
            BattleCommand::Reset => self.reset_game(),
        }
        Ok(())
    }

    // ---- Accessors ----

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CharacterCatalog {
        &self.catalog
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    // ---- Internals ----

    /// Run all systems in order for one step of `dt` seconds.
    fn run_systems(&mut self, dt: f64) {
        self.time.advance(dt);

        // 1. Energy regeneration
        systems::energy::run(&mut self.energy, dt);

        // 2. Targeting and movement against one start-of-tick survey
        let field = Battlefield::survey(&self.world);
        systems::targeting::run(&mut self.world, &field);
        systems::movement::run(&mut self.world, &field, dt);

        // 3. Combat
        let hits = systems::combat::run(&mut self.world, &field, dt);

        // 4. Remove the dead, flag fallen towers
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );

        // 5. Win/loss
        if let Some(outcome) = systems::outcome::evaluate(&self.world) {
            self.finish(outcome);
        }

        // 6. Enemy deployments
        if self.status == GameStatus::Playing && self.config.enemy_ai.enabled {
            systems::enemy_spawner::run(
                &mut self.world,
                &mut self.planner,
                &self.roster,
                &mut self.rng,
                dt,
                &mut self.next_unit_id,
                &mut self.events,
            );
        }

        trace!(
            tick = self.time.tick,
            dt,
            hits = hits.len(),
            combatants = field.len(),
            energy = self.energy.current(),
            "tick"
        );
    }

    fn finish(&mut self, outcome: GameStatus) {
        self.status = outcome;
        let event = if outcome == GameStatus::Victory {
            BattleEvent::BattleWon
        } else {
            BattleEvent::BattleLost
        };
        self.events.push(event);
        info!(
            outcome = ?outcome,
            elapsed_secs = self.time.elapsed_secs,
            score = self.score.points,
            "battle finished"
        );
    }

    /// Rebuild towers and reset every per-battle counter. The RNG is not
    /// reseeded, so successive battles differ while a replay stays exact.
    fn reset_battle_state(&mut self) {
        world_setup::setup_battle(&mut self.world, &self.config);
        self.time = SimTime::default();
        self.energy = EnergyPool::from_config(&self.config);
        self.score = ScoreState::default();
        self.planner = SpawnPlanner::new(self.config.enemy_ai.timing());
        self.next_unit_id = 0;
        self.events.clear();
    }

    fn build_snapshot(&self, events: Vec<BattleEvent>) -> GameState {
        let ctx = SnapshotContext {
            status: self.status,
            time: self.time,
            energy: &self.energy,
            score: self.score,
            deck: &self.deck,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, events)
    }

    /// Build the snapshot, store it, and fan it out to observers.
    fn publish(&mut self) {
        let events = std::mem::take(&mut self.events);
        let state = self.build_snapshot(events);
        self.observers.notify(&state);
        self.published = state;
    }
}

#[cfg(test)]
impl BattleEngine {
    /// Place a unit anywhere, bypassing the gate.
    pub(crate) fn spawn_test_unit(
        &mut self,
        faction: Faction,
        character: &Character,
        position: skirmish_core::types::Position,
    ) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        let lane = Lane::from_x(position.x);
        world_setup::spawn_unit(&mut self.world, id, faction, lane, character, position);
        self.publish();
        id
    }

    /// Overwrite a tower's current health.
    pub(crate) fn set_tower_health(
        &mut self,
        faction: Faction,
        kind: skirmish_core::enums::TowerKind,
        health: f64,
    ) {
        use skirmish_core::components::{Health, TowerInfo};
        for (_entity, (tower, hp)) in self.world.query_mut::<(&TowerInfo, &mut Health)>() {
            if tower.faction == faction && tower.kind == kind {
                hp.current = health.clamp(0.0, hp.max);
            }
        }
        self.publish();
    }

    pub(crate) fn set_energy(&mut self, value: f64) {
        self.energy.set_current(value);
        self.publish();
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
