//! CampaignSummary - the record handed to history once a campaign ends

use crate::combatant::StatusSnapshot;
use crate::types::HeroClass;
use serde::{Deserialize, Serialize};

/// Result of a completed campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub player_name: String,
    pub hero_class: HeroClass,
    pub victory: bool,
    /// Last level reached (the level lost on, for a defeat)
    pub level: usize,
    pub hero: StatusSnapshot,
    /// The last opponent faced
    pub enemy: StatusSnapshot,
}

impl CampaignSummary {
    /// One-line history entry
    pub fn describe(&self) -> String {
        if self.victory {
            format!(
                "{}, the {} slayed the dragon with {} health remaining.",
                self.player_name, self.hero_class, self.hero.health
            )
        } else {
            format!(
                "{}, the {} was defeated by {}, the {} on level {}.",
                self.player_name, self.hero_class, self.enemy.name, self.enemy.variant, self.level
            )
        }
    }
}
