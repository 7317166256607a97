//! combat_core - Turn-based combat engine for the Dragon Slayer campaign
//!
//! This library provides:
//! - Combatant: stats, committed action and per-variant buffs
//! - Damage resolution: damage from an attacker against the defender's action
//! - Round resolution: player half-turn, then the enemy's if it survived
//! - Campaign: a hero's run through the enemy roster until victory or defeat
//!
//! The engine performs no console or history I/O; front ends drive it
//! through [`campaign::CommandSource`] and [`campaign::CampaignObserver`].

pub mod campaign;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use campaign::{
    run_campaign, ActionPrompt, Campaign, CampaignObserver, CampaignOutcome, CampaignSummary,
    CommandSource, FightPhase,
};
pub use combat::{choose_enemy_action, resolve_round, RoundOutcome, TurnEffect, TurnReport};
pub use combatant::{BuffEffect, BuffOutcome, Combatant, StatusSnapshot};
pub use config::{default_roster, CombatConstants, CombatantProfile, RosterConfig};
pub use damage::{counter_attack_damage, resolve_damage};
pub use error::{EngineError, InputError};
pub use types::{Action, HeroClass, Side, Variant};
