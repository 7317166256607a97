//! Buff effects - the per-variant self-targeted stat increase

use crate::types::Variant;
use serde::{Deserialize, Serialize};

/// Stat increases granted by one use of the Buff action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffEffect {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    /// Added to both current and max health
    #[serde(default)]
    pub health: u32,
}

impl BuffEffect {
    /// A buff that does nothing
    pub const NONE: BuffEffect = BuffEffect {
        attack: 0,
        defense: 0,
        health: 0,
    };

    pub fn new(attack: u32, defense: u32, health: u32) -> Self {
        BuffEffect {
            attack,
            defense,
            health,
        }
    }

    /// Canonical buff table
    pub fn for_variant(variant: Variant) -> BuffEffect {
        match variant {
            Variant::Mage => BuffEffect::new(8, 0, 0),
            Variant::Warrior => BuffEffect::new(0, 6, 15),
            Variant::Archer => BuffEffect::new(5, 4, 0),
            Variant::Goblin => BuffEffect::new(4, 0, 0),
            Variant::Orc => BuffEffect::new(6, 6, 0),
            Variant::Dragon => BuffEffect::new(10, 10, 10),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attack == 0 && self.defense == 0 && self.health == 0
    }

    /// Short description, e.g. `+10 Health, +10 Attack, +10 Defense`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if self.health > 0 {
            parts.push(format!("+{} Health", self.health));
        }
        if self.attack > 0 {
            parts.push(format!("+{} Attack", self.attack));
        }
        if self.defense > 0 {
            parts.push(format!("+{} Defense", self.defense));
        }

        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// What a single buff changed, with the stat values afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffOutcome {
    /// Deltas that were applied
    pub applied: BuffEffect,
    pub attack_after: u32,
    pub defense_after: u32,
    pub health_after: i32,
    pub max_health_after: i32,
}

impl BuffOutcome {
    /// True when the buff had nothing to apply
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }

    /// Stat readout in the order health, attack, defense, skipping unchanged stats
    pub fn changes(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if self.applied.health > 0 {
            parts.push(format!("Health is now {}", self.health_after));
        }
        if self.applied.attack > 0 {
            parts.push(format!("Attack is now {}", self.attack_after));
        }
        if self.applied.defense > 0 {
            parts.push(format!("Defense is now {}", self.defense_after));
        }
        parts
    }
}
