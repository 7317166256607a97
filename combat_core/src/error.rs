//! Error types for the combat engine
//!
//! [`InputError`] is a recoverable user-input problem the caller re-prompts
//! for. [`EngineError`] means the engine was driven outside its contract.

use crate::campaign::FightPhase;
use thiserror::Error;

/// Rejected player input. The combatant's state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid action '{0}'. Please choose attack, defend, or buff.")]
    InvalidAction(String),
    #[error("Invalid hero choice '{0}'. Please enter 1, 2, or 3.")]
    InvalidHeroChoice(String),
}

/// Engine fault: a precondition of the resolution rules was violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{name} has no action set")]
    MissingAction { name: String },
    #[error("No profile configured for the {0} hero")]
    UnknownHero(crate::types::HeroClass),
    #[error("Enemy roster is empty")]
    EmptyRoster,
    #[error("Cannot {operation} during {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: FightPhase,
    },
    #[error("Campaign is already finished")]
    CampaignFinished,
    #[error("Campaign is still in progress")]
    CampaignInProgress,
    #[error("Campaign interrupted on level {level}")]
    Interrupted { level: usize },
}
