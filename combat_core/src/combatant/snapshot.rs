//! StatusSnapshot - read-only view of a combatant for display

use crate::types::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time copy of the displayable stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub name: String,
    pub variant: Variant,
    pub health: i32,
    pub max_health: i32,
    pub attack: u32,
    pub defense: u32,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, the {}\nHP: {}, ATK: {}, DEF: {}",
            self.name, self.variant, self.health, self.attack, self.defense
        )
    }
}
