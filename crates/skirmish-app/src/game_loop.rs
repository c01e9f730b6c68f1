//! Game loop thread: drives the battle engine at a fixed cadence.
//!
//! The engine is built by the caller's thread, then moved into the loop
//! thread which owns it from then on. Commands arrive via `mpsc` channel.
//! An engine subscription copies every published state into shared state
//! for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use skirmish_core::state::GameState;
use skirmish_sim::config::{BattleConfig, ConfigError};
use skirmish_sim::BattleEngine;

use crate::state::GameLoopCommand;

/// Longest wall-clock step handed to the engine in one update.
const MAX_FRAME_SECS: f64 = 0.25;

/// Loop cadence and the battle it hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    pub tick_rate_hz: u32,
    /// Simulated seconds per wall-clock second.
    pub time_scale: f64,
    pub battle: BattleConfig,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 30,
            time_scale: 1.0,
            battle: BattleConfig::default(),
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one loop iteration.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }

    /// Time scale with nonsense values replaced by real time.
    pub fn effective_time_scale(&self) -> f64 {
        if self.time_scale.is_finite() && self.time_scale > 0.0 {
            self.time_scale
        } else {
            1.0
        }
    }
}

/// Why the loop could not be started.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle. The loop ends on
/// `Shutdown` or when every sender is dropped.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_state: Arc<Mutex<Option<GameState>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), LoopError> {
    let mut engine = BattleEngine::new(config.battle.clone())?;
    engine.subscribe(move |state| {
        if let Ok(mut lock) = latest_state.lock() {
            *lock = Some(state.clone());
        }
    });
    // Publish the initial menu state to the new subscriber.
    engine.update(0.0);

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || run_game_loop(engine, &config, cmd_rx))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: BattleEngine,
    config: &LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
) {
    let tick_duration = config.tick_duration();
    let time_scale = config.effective_time_scale();
    info!(tick_rate_hz = config.tick_rate_hz, time_scale, "game loop started");

    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Battle(cmd)) => {
                    debug!(?cmd, "command received");
                    if let Err(err) = engine.apply(cmd) {
                        warn!(error = %err, "command rejected");
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(status = ?engine.status(), "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the measured wall-clock delta
        let now = Instant::now();
        let frame_secs = now.duration_since(last_frame).as_secs_f64().min(MAX_FRAME_SECS);
        last_frame = now;
        engine.update(frame_secs * time_scale);

        // 3. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
