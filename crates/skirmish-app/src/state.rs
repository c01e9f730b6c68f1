//! Host state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;

use skirmish_core::commands::BattleCommand;
use skirmish_core::state::GameState;

use crate::game_loop::{self, LoopConfig, LoopError};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to apply to the battle engine.
    Battle(BattleCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("host state lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Loop(#[from] LoopError),
}

/// Shared host state.
///
/// - `Mutex` around the `Sender` so the handle can be shared across threads
/// - `Arc<Mutex<Option<...>>>` for the latest state, written by the loop
pub struct AppState {
    /// `None` until `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Latest published state for synchronous polling.
    latest_state: Arc<Mutex<Option<GameState>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            worker: Mutex::new(None),
            latest_state: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop if it is not already running.
    pub fn start(&self, config: LoopConfig) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, Arc::clone(&self.latest_state))?;
        *tx_lock = Some(cmd_tx);
        *self.worker.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward a command to the engine.
    pub fn send(&self, command: BattleCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Battle(command))
                .map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// The latest published state, if the loop has published one.
    pub fn snapshot(&self) -> Option<GameState> {
        self.latest_state.lock().ok().and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for its thread. A no-op if it never started.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::Poisoned)?
            .take();
        if let Some(tx) = tx {
            // The loop may already have exited; joining below is enough.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }

        let handle = self.worker.lock().map_err(|_| AppError::Poisoned)?.take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| AppError::Disconnected)?;
        }
        Ok(())
    }
}
