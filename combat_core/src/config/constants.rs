//! Combat rule constants

use serde::{Deserialize, Serialize};

/// Tunable multipliers used by damage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Damage multiplier against a buffing defender
    #[serde(default = "default_critical_hit_multiplier")]
    pub critical_hit_multiplier: u32,
    /// How many times defense counts while defending
    #[serde(default = "default_block_multiplier")]
    pub block_multiplier: u32,
    /// Counter-attack damage as a percentage of the defender's attack (floored)
    #[serde(default = "default_counter_attack_percent")]
    pub counter_attack_percent: u32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            critical_hit_multiplier: default_critical_hit_multiplier(),
            block_multiplier: default_block_multiplier(),
            counter_attack_percent: default_counter_attack_percent(),
        }
    }
}

fn default_critical_hit_multiplier() -> u32 {
    2
}
fn default_block_multiplier() -> u32 {
    2
}
fn default_counter_attack_percent() -> u32 {
    50
}
