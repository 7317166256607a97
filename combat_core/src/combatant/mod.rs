//! Combatant - stats, committed action and buff behaviour
//!
//! A hero is created once per campaign and keeps its buffs between levels;
//! only health is restored when a new level starts. Enemies are created
//! once as a fixed roster.

mod buff;
mod snapshot;

pub use buff::{BuffEffect, BuffOutcome};
pub use snapshot::StatusSnapshot;

use crate::error::{EngineError, InputError};
use crate::types::{Action, Variant};
use serde::{Deserialize, Serialize};

/// A hero or enemy taking part in a fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub variant: Variant,
    pub attack_strength: u32,
    pub defense_strength: u32,
    pub max_health: i32,
    /// Zero or below means dead
    pub health: i32,
    /// Applied each time this combatant buffs
    pub buff_effect: BuffEffect,
    action: Option<Action>,
}

impl Combatant {
    /// Create a combatant at full health with its variant's canonical buff
    pub fn new(
        name: impl Into<String>,
        variant: Variant,
        attack_strength: u32,
        defense_strength: u32,
        health: i32,
    ) -> Self {
        Combatant {
            name: name.into(),
            variant,
            attack_strength,
            defense_strength,
            max_health: health,
            health,
            buff_effect: BuffEffect::for_variant(variant),
            action: None,
        }
    }

    /// Replace the buff effect
    pub fn with_buff(mut self, effect: BuffEffect) -> Self {
        self.buff_effect = effect;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }

    /// The action committed for the current round, if any
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn reset_action(&mut self) {
        self.action = None;
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = Some(action);
    }

    /// Set the action from a typed token.
    ///
    /// A rejected token leaves the action unset so the caller has to ask again.
    pub fn set_action_token(&mut self, token: &str) -> Result<Action, InputError> {
        match Action::parse(token) {
            Ok(action) => {
                self.action = Some(action);
                Ok(action)
            }
            Err(e) => {
                self.action = None;
                Err(e)
            }
        }
    }

    /// The committed action, or an engine fault if none was set
    pub fn require_action(&self) -> Result<Action, EngineError> {
        self.action.ok_or_else(|| EngineError::MissingAction {
            name: self.name.clone(),
        })
    }

    /// Subtract damage from health. Health may drop below zero.
    pub fn apply_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
    }

    /// Apply this combatant's buff effect and report what changed
    pub fn buff(&mut self) -> BuffOutcome {
        let effect = self.buff_effect;
        let health_gain = i32::try_from(effect.health).unwrap_or(i32::MAX);

        self.attack_strength = self.attack_strength.saturating_add(effect.attack);
        self.defense_strength = self.defense_strength.saturating_add(effect.defense);
        self.health = self.health.saturating_add(health_gain);
        self.max_health = self.max_health.saturating_add(health_gain);

        BuffOutcome {
            applied: effect,
            attack_after: self.attack_strength,
            defense_after: self.defense_strength,
            health_after: self.health,
            max_health_after: self.max_health,
        }
    }

    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            name: self.name.clone(),
            variant: self.variant,
            health: self.health,
            max_health: self.max_health,
            attack: self.attack_strength,
            defense: self.defense_strength,
        }
    }
}
