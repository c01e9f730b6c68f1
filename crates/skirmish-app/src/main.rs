//! Headless demo: an autopiloted battle against the enemy AI.
//!
//! Usage: `skirmish [battle-config.json]`. Set `RUST_LOG` to tune logging.

use std::error::Error;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_app::autopilot;
use skirmish_app::game_loop::LoopConfig;
use skirmish_app::state::AppState;
use skirmish_core::commands::BattleCommand;
use skirmish_sim::config::BattleConfig;

const DEMO_DECK: [&str; 4] = ["ember-knight", "tide-archer", "volt-runner", "sun-guardian"];
const DEMO_TIME_SCALE: f64 = 8.0;
const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Simulated seconds after which the demo calls it a draw.
const DEMO_TIME_LIMIT_SECS: f64 = 600.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let battle = match std::env::args().nth(1) {
        Some(path) => BattleConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BattleConfig::default(),
    };

    let app = AppState::new();
    app.start(LoopConfig {
        time_scale: DEMO_TIME_SCALE,
        battle,
        ..Default::default()
    })?;
    app.send(BattleCommand::StartGame {
        deck: DEMO_DECK.iter().map(|&id| id.into()).collect(),
    })?;

    let catalog = skirmish_core::characters::CharacterCatalog::builtin();
    loop {
        std::thread::sleep(POLL_INTERVAL);
        let Some(state) = app.snapshot() else {
            continue;
        };

        if state.game_status.is_finished() {
            info!(
                outcome = ?state.game_status,
                battle_secs = state.battle_timer,
                score = state.score,
                "demo finished"
            );
            break;
        }
        if state.battle_timer >= DEMO_TIME_LIMIT_SECS {
            info!(battle_secs = state.battle_timer, score = state.score, "demo timed out");
            break;
        }
        if let Some(command) = autopilot::next_command(&state, &catalog) {
            app.send(command)?;
        }
    }

    app.shutdown()?;
    Ok(())
}
