#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use skirmish_core::characters::{Character, CharacterDef, CharacterId};
    use skirmish_core::commands::BattleCommand;
    use skirmish_core::components::{AttackClock, TargetRef};
    use skirmish_core::enums::*;
    use skirmish_core::error::{CommandError, DeckError, DeployError};
    use skirmish_core::events::BattleEvent;
    use skirmish_core::types::{Position, UnitId};

    use crate::config::{BattleConfig, ConfigError, EnemyAiConfig};
    use crate::engine::BattleEngine;
    use crate::systems::combat::tick_clock;

    fn character(id: &str, cost: u32, health: f64, damage: f64, speed: f64, range: f64) -> Character {
        Character::new(CharacterDef {
            id: CharacterId::from(id),
            name: id.to_uppercase(),
            cost,
            health,
            damage,
            speed,
            range,
            attack_cooldown_secs: 1.0,
            element: Element::Fire,
            rarity: Rarity::Common,
            kind: CharacterKind::Melee,
        })
        .unwrap()
    }

    fn quiet_config() -> BattleConfig {
        BattleConfig {
            enemy_ai: EnemyAiConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// A running battle with deck a..d and no enemy deployments.
    fn started() -> BattleEngine {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        engine.start_game(["a", "b", "c", "d"]).unwrap();
        engine
    }

    fn brute() -> Character {
        character("a", 3, 1000.0, 100.0, 1.0, 1.0)
    }

    // ---- Lifecycle ----

    #[test]
    fn test_new_engine_starts_in_menu() {
        let engine = BattleEngine::new(BattleConfig::default()).unwrap();
        let state = engine.get_state();
        assert_eq!(state.game_status, GameStatus::Menu);
        assert_eq!(state.player_towers.len(), 3);
        assert_eq!(state.enemy_towers.len(), 3);
        assert_eq!(state.energy, 5.0);
        assert!(state.player_units.is_empty());
    }

    #[test]
    fn test_start_game_sets_playing_and_deck() {
        let engine = started();
        let state = engine.get_state();
        assert_eq!(state.game_status, GameStatus::Playing);
        assert_eq!(
            state.selected_deck,
            vec![
                CharacterId::from("a"),
                CharacterId::from("b"),
                CharacterId::from("c"),
                CharacterId::from("d")
            ]
        );
        assert_eq!(state.battle_timer, 0.0);
    }

    #[test]
    fn test_start_game_rejects_bad_decks() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        assert_eq!(
            engine.start_game(Vec::<CharacterId>::new()),
            Err(DeckError::Empty)
        );
        assert_eq!(
            engine.start_game(["a", "b", "c", "d", "e"]),
            Err(DeckError::TooLarge { size: 5, max: 4 })
        );
        assert_eq!(
            engine.start_game(["a", "b", "a"]),
            Err(DeckError::Duplicate(CharacterId::from("a")))
        );
        assert_eq!(engine.status(), GameStatus::Menu);
        assert!(engine.get_state().selected_deck.is_empty());
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut engine = started();
        engine.update(1.0);
        engine.pause_game();
        let paused = engine.get_state();
        assert_eq!(paused.game_status, GameStatus::Paused);

        engine.update(2.0);
        let after = engine.get_state();
        assert_eq!(after.battle_timer, paused.battle_timer);
        assert_eq!(after.energy, paused.energy);
        assert!(!engine.place_character(&brute(), Lane::Left));

        engine.resume_game();
        assert_eq!(engine.status(), GameStatus::Playing);
        engine.update(1.0);
        assert!((engine.get_state().battle_timer - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_and_resume_ignored_in_wrong_status() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        engine.pause_game();
        assert_eq!(engine.status(), GameStatus::Menu);
        engine.resume_game();
        assert_eq!(engine.status(), GameStatus::Menu);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut engine = started();
        assert!(engine.place_character(&brute(), Lane::Left));
        engine.set_tower_health(Faction::Enemy, TowerKind::Left, 10.0);
        engine.update(2.0);

        engine.reset_game();
        let state = engine.get_state();
        assert_eq!(state.game_status, GameStatus::Menu);
        assert!(state.player_units.is_empty());
        assert!(state.selected_deck.is_empty());
        assert_eq!(state.energy, 5.0);
        assert_eq!(state.battle_timer, 0.0);
        assert_eq!(state.score, 0);
        for tower in state.player_towers.iter().chain(&state.enemy_towers) {
            assert_eq!(tower.health, tower.max_health);
            assert!(!tower.is_destroyed);
        }
    }

    // ---- Deployment gate ----

    #[test]
    fn test_place_character_spends_energy_then_refuses() {
        let mut engine = started();
        let card = brute();
        assert!(engine.can_place_character(&card));
        assert!(engine.place_character(&card, Lane::Left));

        let state = engine.get_state();
        assert_eq!(state.energy, 2.0);
        assert_eq!(state.player_units.len(), 1);
        assert_eq!(state.player_units[0].lane, Lane::Left);
        assert!(state.player_units[0].is_player_unit);

        assert!(!engine.can_place_character(&card));
        assert!(!engine.place_character(&card, Lane::Right));
        let state = engine.get_state();
        assert_eq!(state.energy, 2.0);
        assert_eq!(state.player_units.len(), 1);
    }

    #[test]
    fn test_deploy_position_on_home_edge() {
        let mut engine = started();
        assert!(engine.place_character(&brute(), Lane::Right));
        let unit = &engine.get_state().player_units[0];
        assert_eq!(unit.position, Position::new(4.0, 0.0, -9.0));
        assert_eq!(unit.health, unit.max_health);
    }

    #[test]
    fn test_try_place_reports_reason() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        assert_eq!(
            engine.try_place_character(&brute(), Lane::Left),
            Err(DeployError::NotPlaying)
        );

        engine.start_game(["b", "c"]).unwrap();
        assert_eq!(
            engine.try_place_character(&brute(), Lane::Left),
            Err(DeployError::NotInDeck(CharacterId::from("a")))
        );

        let pricey = character("b", 9, 100.0, 1.0, 1.0, 1.0);
        assert_eq!(
            engine.try_place_character(&pricey, Lane::Left),
            Err(DeployError::InsufficientEnergy {
                required: 9,
                available: 5.0
            })
        );
        assert!(engine.get_state().player_units.is_empty());
    }

    #[test]
    fn test_unit_ids_are_unique_and_increasing() {
        let mut engine = started();
        engine.set_energy(10.0);
        let first = engine.try_place_character(&brute(), Lane::Left).unwrap();
        let second = engine.try_place_character(&brute(), Lane::Right).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_apply_resolves_catalog_ids() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        engine
            .apply(BattleCommand::StartGame {
                deck: vec!["ember-knight".into(), "volt-runner".into()],
            })
            .unwrap();
        engine
            .apply(BattleCommand::PlaceCharacter {
                character_id: "volt-runner".into(),
                lane: Lane::Left,
            })
            .unwrap();
        assert_eq!(engine.get_state().energy, 3.0);

        let err = engine
            .apply(BattleCommand::PlaceCharacter {
                character_id: "nobody".into(),
                lane: Lane::Left,
            })
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::Deploy(DeployError::UnknownCharacter("nobody".into()))
        );

        let err = engine
            .apply(BattleCommand::PlaceCharacter {
                character_id: "sun-guardian".into(),
                lane: Lane::Left,
            })
            .unwrap_err();
        assert!(matches!(err, CommandError::Deploy(DeployError::NotInDeck(_))));

        engine.apply(BattleCommand::Pause).unwrap();
        assert_eq!(engine.status(), GameStatus::Paused);
        engine.apply(BattleCommand::Reset).unwrap();
        assert_eq!(engine.status(), GameStatus::Menu);
    }

    // ---- Tick scheduler ----

    #[test]
    fn test_update_zero_is_idempotent() {
        let mut engine = started();
        engine.update(0.5);
        engine.update(0.5);
        let before = engine.get_state();

        engine.update(0.0);
        assert_eq!(engine.get_state(), before);
        engine.update(-1.0);
        assert_eq!(engine.get_state(), before);
        engine.update(f64::NAN);
        assert_eq!(engine.get_state(), before);
        engine.update(f64::INFINITY);
        assert_eq!(engine.get_state(), before);
    }

    #[test]
    fn test_update_outside_playing_is_noop() {
        let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
        let before = engine.get_state();
        engine.update(5.0);
        assert_eq!(engine.get_state(), before);
    }

    #[test]
    fn test_timer_and_tick_count() {
        let mut engine = started();
        for _ in 0..30 {
            engine.update(1.0 / 30.0);
        }
        let state = engine.get_state();
        assert_eq!(state.time.tick, 30);
        assert!((state.battle_timer - 1.0).abs() < 1e-9);
    }

    // ---- Energy ----

    #[test]
    fn test_energy_regenerates_and_caps() {
        let mut engine = started();
        engine.update(2.0);
        assert!((engine.get_state().energy - 7.0).abs() < 1e-9);
        engine.update(10.0);
        assert_eq!(engine.get_state().energy, 10.0);
    }

    // ---- Movement & targeting ----

    #[test]
    fn test_unit_targets_own_lane_tower_and_advances() {
        let mut engine = started();
        let unit_id = engine.try_place_character(&brute(), Lane::Right).unwrap();
        engine.update(0.5);

        let state = engine.get_state();
        let right_tower = state.tower(Faction::Enemy, TowerKind::Right).unwrap().id;
        let unit = state.unit(unit_id).unwrap();
        assert_eq!(unit.target, Some(TargetRef::Tower(right_tower)));
        assert_eq!(unit.state, UnitState::Moving);
        assert!((unit.position.z - -8.5).abs() < 1e-9);
        assert_eq!(unit.position.x, 4.0);
    }

    #[test]
    fn test_unit_falls_back_to_king_when_lane_tower_falls() {
        let mut engine = started();
        let unit_id = engine.try_place_character(&brute(), Lane::Right).unwrap();
        engine.set_tower_health(Faction::Enemy, TowerKind::Right, 0.0);
        engine.update(0.1);

        let state = engine.get_state();
        let right = state.tower(Faction::Enemy, TowerKind::Right).unwrap();
        assert!(right.is_destroyed);
        let king = state.king_tower(Faction::Enemy).unwrap().id;
        assert_eq!(
            state.unit(unit_id).unwrap().target,
            Some(TargetRef::Tower(king))
        );
    }

    #[test]
    fn test_movement_stops_at_attack_range() {
        let mut engine = started();
        let sprinter = character("a", 1, 5000.0, 1.0, 100.0, 1.0);
        let unit_id = engine.spawn_test_unit(
            Faction::Player,
            &sprinter,
            Position::new(4.0, 0.0, 0.0),
        );
        engine.update(0.5);
        let unit = engine.get_state().unit(unit_id).cloned().unwrap();
        // Tower at z 7.5 with a footprint of 1, range 1.
        assert!((unit.position.z - 5.5).abs() < 1e-9);
        assert_eq!(unit.state, UnitState::Moving);

        engine.update(0.1);
        let unit = engine.get_state().unit(unit_id).cloned().unwrap();
        assert!((unit.position.z - 5.5).abs() < 1e-9);
        assert_eq!(unit.state, UnitState::Attacking);
    }

    #[test]
    fn test_target_prefers_weaker_then_lower_id() {
        let mut engine = started();
        let seeker = character("a", 1, 5000.0, 1.0, 1.0, 5.0);
        let sturdy = character("b", 1, 500.0, 1.0, 1.0, 1.0);
        let frail = character("c", 1, 300.0, 1.0, 1.0, 1.0);

        let player = engine.spawn_test_unit(Faction::Player, &seeker, Position::new(0.0, 0.0, 0.0));
        let _strong = engine.spawn_test_unit(Faction::Enemy, &sturdy, Position::new(0.0, 0.0, 2.0));
        let weak = engine.spawn_test_unit(Faction::Enemy, &frail, Position::new(0.0, 0.0, -2.0));
        engine.update(0.01);
        assert_eq!(
            engine.get_state().unit(player).unwrap().target,
            Some(TargetRef::Unit(weak))
        );

        let mut engine = started();
        let player = engine.spawn_test_unit(Faction::Player, &seeker, Position::new(0.0, 0.0, 0.0));
        let first = engine.spawn_test_unit(Faction::Enemy, &sturdy, Position::new(0.0, 0.0, 2.0));
        let _second = engine.spawn_test_unit(Faction::Enemy, &sturdy, Position::new(0.0, 0.0, -2.0));
        engine.update(0.01);
        assert_eq!(
            engine.get_state().unit(player).unwrap().target,
            Some(TargetRef::Unit(first))
        );
    }

    // ---- Combat ----

    #[test]
    fn test_tower_destroyed_and_clamped_at_zero() {
        let mut engine = started();
        engine.set_tower_health(Faction::Enemy, TowerKind::Left, 50.0);
        engine.spawn_test_unit(Faction::Player, &brute(), Position::new(-4.0, 0.0, 6.0));
        engine.update(0.1);

        let state = engine.get_state();
        let left = state.tower(Faction::Enemy, TowerKind::Left).unwrap();
        assert_eq!(left.health, 0.0);
        assert!(left.is_destroyed);
        assert_eq!(state.score, 100);
        assert!(state.events.iter().any(|e| matches!(
            e,
            BattleEvent::TowerDestroyed {
                faction: Faction::Enemy,
                kind: TowerKind::Left,
                ..
            }
        )));
        assert_eq!(state.game_status, GameStatus::Playing);
    }

    #[test]
    fn test_enemy_kill_awards_score() {
        let mut engine = started();
        let victim = character("b", 1, 50.0, 10.0, 1.0, 1.0);
        engine.spawn_test_unit(Faction::Player, &brute(), Position::new(0.0, 0.0, 0.0));
        let enemy = engine.spawn_test_unit(Faction::Enemy, &victim, Position::new(0.0, 0.0, 0.5));
        engine.update(0.1);

        let state = engine.get_state();
        assert!(state.enemy_units.is_empty());
        assert_eq!(state.score, 10);
        assert!(state.events.contains(&BattleEvent::UnitDestroyed {
            unit_id: enemy,
            faction: Faction::Enemy
        }));
        assert_eq!(state.player_units[0].health, 990.0);
    }

    #[test]
    fn test_simultaneous_hits_trade_kills() {
        let mut engine = started();
        let glass = character("a", 1, 50.0, 100.0, 1.0, 1.0);
        engine.spawn_test_unit(Faction::Player, &glass, Position::new(0.0, 0.0, 0.0));
        engine.spawn_test_unit(Faction::Enemy, &glass, Position::new(0.0, 0.0, 0.5));
        engine.update(0.1);

        let state = engine.get_state();
        assert!(state.player_units.is_empty());
        assert!(state.enemy_units.is_empty());
    }

    #[test]
    fn test_no_zero_health_unit_is_published() {
        let mut engine = started();
        let glass = character("a", 1, 50.0, 100.0, 1.0, 1.0);
        engine.spawn_test_unit(Faction::Player, &glass, Position::new(0.0, 0.0, 0.0));
        engine.spawn_test_unit(Faction::Enemy, &brute(), Position::new(0.0, 0.0, 0.5));
        for _ in 0..10 {
            engine.update(0.1);
            let state = engine.get_state();
            assert!(state
                .player_units
                .iter()
                .chain(&state.enemy_units)
                .all(|u| u.health > 0.0));
        }
    }

    #[test]
    fn test_attack_clock_strikes() {
        let mut clock = AttackClock {
            since_last_attack_secs: 1.0,
        };
        assert_eq!(tick_clock(&mut clock, 1.0, 0.5, true), 1);
        assert!((clock.since_last_attack_secs - 0.5).abs() < 1e-9);
        assert_eq!(tick_clock(&mut clock, 1.0, 0.25, true), 0);
        assert_eq!(tick_clock(&mut clock, 1.0, 2.25, true), 3);

        // Idle clocks saturate at one cooldown.
        assert_eq!(tick_clock(&mut clock, 1.0, 10.0, false), 0);
        assert_eq!(clock.since_last_attack_secs, 1.0);
    }

    // ---- Win/loss ----

    #[test]
    fn test_victory_on_king_destruction_then_frozen() {
        let mut engine = started();
        engine.set_tower_health(Faction::Enemy, TowerKind::King, 50.0);
        engine.spawn_test_unit(Faction::Player, &brute(), Position::new(0.0, 0.0, 9.5));
        engine.update(0.1);

        let won = engine.get_state();
        assert_eq!(won.game_status, GameStatus::Victory);
        assert!(won.king_tower(Faction::Enemy).unwrap().is_destroyed);
        assert!(won.events.contains(&BattleEvent::BattleWon));
        assert_eq!(won.score, 300);

        engine.update(0.5);
        let frozen = engine.get_state();
        engine.update(3.0);
        assert_eq!(engine.get_state(), frozen);
        assert_eq!(frozen.time, won.time);
        assert_eq!(frozen.player_units, won.player_units);
        assert!(!engine.place_character(&brute(), Lane::Left));
    }

    #[test]
    fn test_defeat_on_player_king_destruction() {
        let mut engine = started();
        engine.set_tower_health(Faction::Player, TowerKind::King, 50.0);
        engine.spawn_test_unit(Faction::Enemy, &brute(), Position::new(0.0, 0.0, -9.5));
        engine.update(0.1);

        let state = engine.get_state();
        assert_eq!(state.game_status, GameStatus::Defeat);
        assert!(state.events.contains(&BattleEvent::BattleLost));
    }

    #[test]
    fn test_double_knockout_is_victory() {
        let mut engine = started();
        engine.set_tower_health(Faction::Enemy, TowerKind::King, 50.0);
        engine.set_tower_health(Faction::Player, TowerKind::King, 50.0);
        engine.spawn_test_unit(Faction::Player, &brute(), Position::new(0.0, 0.0, 9.5));
        engine.spawn_test_unit(Faction::Enemy, &brute(), Position::new(0.0, 0.0, -9.5));
        engine.update(0.1);
        assert_eq!(engine.status(), GameStatus::Victory);
    }

    // ---- Enemy AI ----

    #[test]
    fn test_enemy_ai_deploys_after_initial_delay() {
        let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
        engine.start_game(["ember-knight"]).unwrap();
        engine.update(2.5);
        assert!(engine.get_state().enemy_units.is_empty());

        engine.update(1.0);
        let state = engine.get_state();
        assert_eq!(state.enemy_units.len(), 1);
        let unit = &state.enemy_units[0];
        assert!(!unit.is_player_unit);
        assert_eq!(unit.position.z, 9.0);
        assert!(state.events.iter().any(|e| matches!(
            e,
            BattleEvent::UnitDeployed {
                faction: Faction::Enemy,
                ..
            }
        )));
        // Enemy deployments draw no player energy.
        assert!((state.energy - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_enemy_ai_disabled_never_deploys() {
        let mut engine = started();
        for _ in 0..60 {
            engine.update(0.5);
        }
        assert!(engine.get_state().enemy_units.is_empty());
    }

    #[test]
    fn test_enemy_ai_defends_pressed_lane() {
        let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
        engine.start_game(["a"]).unwrap();
        let stalker = character("a", 1, 100_000.0, 0.0, 0.01, 1.0);
        engine.spawn_test_unit(Faction::Player, &stalker, Position::new(-4.0, 0.0, 1.0));
        engine.update(3.5);
        let state = engine.get_state();
        assert_eq!(state.enemy_units.len(), 1);
        assert_eq!(state.enemy_units[0].lane, Lane::Left);
    }

    #[test]
    fn test_huge_step_deploys_at_most_one_enemy() {
        let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
        engine.start_game(["ember-knight"]).unwrap();
        engine.update(1.0e6);
        assert!(engine.get_state().enemy_units.len() <= 1);

        engine.update(1.0e6);
        assert!(engine.get_state().enemy_units.len() <= 2);
    }

    // ---- Observers ----

    #[test]
    fn test_observers_notified_until_unsubscribed() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let counter = Arc::clone(&calls);
        let statuses = Arc::clone(&seen);
        let id = engine.subscribe(move |state| {
            counter.fetch_add(1, Ordering::SeqCst);
            statuses.lock().unwrap().push(state.game_status);
        });

        engine.start_game(["a"]).unwrap();
        engine.update(0.1);
        engine.pause_game();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![GameStatus::Playing, GameStatus::Playing, GameStatus::Paused]
        );

        assert!(engine.unsubscribe(id));
        assert!(!engine.unsubscribe(id));
        engine.resume_game();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_rejected_operations_still_publish() {
        let mut engine = started();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        engine.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        engine.set_energy(0.0);
        let before = calls.load(Ordering::SeqCst);
        assert!(!engine.place_character(&brute(), Lane::Left));
        assert_eq!(calls.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_channel_subscription_receives_and_prunes() {
        let mut engine = BattleEngine::new(quiet_config()).unwrap();
        let (_id, rx) = engine.subscribe_channel();
        engine.start_game(["a"]).unwrap();
        let state = rx.try_recv().unwrap();
        assert_eq!(state.game_status, GameStatus::Playing);
        assert_eq!(state, engine.get_state());

        drop(rx);
        assert_eq!(engine.observer_count(), 1);
        engine.update(0.1);
        assert_eq!(engine.observer_count(), 0);
    }

    // ---- Determinism ----

    fn scripted_run(seed: u64) -> Vec<String> {
        let mut engine = BattleEngine::new(BattleConfig {
            seed,
            ..Default::default()
        })
        .unwrap();
        engine
            .start_game(["ember-knight", "tide-archer", "volt-runner", "spark-mage"])
            .unwrap();
        let cards: Vec<Character> = ["ember-knight", "tide-archer", "volt-runner"]
            .iter()
            .filter_map(|id| engine.catalog().get(id).cloned())
            .collect();

        let mut frames = Vec::new();
        for step in 0..900u32 {
            if step % 120 == 0 {
                let card = &cards[(step / 120) as usize % cards.len()];
                let lane = if step % 240 == 0 { Lane::Left } else { Lane::Right };
                engine.place_character(card, lane);
            }
            engine.update(1.0 / 30.0);
            frames.push(serde_json::to_string(&engine.get_state()).unwrap());
        }
        frames
    }

    #[test]
    fn test_determinism_same_seed() {
        assert_eq!(scripted_run(12345), scripted_run(12345));
    }

    #[test]
    fn test_determinism_different_seeds() {
        assert_ne!(scripted_run(111), scripted_run(222));
    }

    // ---- Config ----

    #[test]
    fn test_config_from_partial_json() {
        let config = BattleConfig::from_json(r#"{ "seed": 7, "enemy_ai": { "enabled": false } }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert!(!config.enemy_ai.enabled);
        assert_eq!(config.max_energy, 10.0);
        assert_eq!(config.enemy_ai.roster.len(), 4);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = BattleConfig::from_json(r#"{ "starting_energy": 20.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "starting_energy",
                ..
            }
        ));

        let err = BattleConfig::from_json(r#"{ "enemy_ai": { "roster": ["ghost"] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Roster(_)));

        let err = BattleConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_single_side_tower_layout() {
        let engine = BattleEngine::new(BattleConfig {
            side_towers: vec![Lane::Left],
            ..quiet_config()
        })
        .unwrap();
        let state = engine.get_state();
        assert_eq!(state.player_towers.len(), 2);
        assert!(state.tower(Faction::Enemy, TowerKind::Right).is_none());
    }

    #[test]
    fn test_unit_lookup_by_id() {
        let mut engine = started();
        let id = engine.try_place_character(&brute(), Lane::Left).unwrap();
        assert!(engine.get_state().unit(id).is_some());
        assert!(engine.get_state().unit(UnitId(999)).is_none());
    }
}
