//! dragon_slayer - console front end for the combat engine
//!
//! Provides the collaborators the engine calls out to:
//! - ConsoleInput: reads hero and action choices
//! - ConsoleDisplay: narrates rounds and prints status
//! - GameHistory: persists finished campaign summaries

pub mod console;
pub mod history;
pub mod screens;

pub use console::{ConsoleDisplay, ConsoleInput};
pub use history::{GameHistory, HistoryError};

use combat_core::config::ConfigError;
use combat_core::EngineError;
use thiserror::Error;

/// Fatal application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("Combat engine fault: {0}")]
    Engine(#[from] EngineError),
}
