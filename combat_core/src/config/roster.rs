//! Combatant profiles and the campaign roster

use super::{CombatConstants, ConfigError};
use crate::combatant::{BuffEffect, Combatant};
use crate::types::{HeroClass, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base stats and buff for one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantProfile {
    pub variant: Variant,
    /// Display name; heroes take the player's name instead
    #[serde(default)]
    pub name: Option<String>,
    pub attack: u32,
    pub defense: u32,
    pub health: i32,
    #[serde(default)]
    pub buff: BuffEffect,
}

impl CombatantProfile {
    /// Compiled-in profile for a variant
    pub fn canonical(variant: Variant) -> Self {
        let (name, attack, defense, health) = match variant {
            Variant::Mage => (None, 22, 6, 70),
            Variant::Warrior => (None, 16, 12, 100),
            Variant::Archer => (None, 19, 9, 85),
            Variant::Goblin => (Some("Goober"), 12, 6, 60),
            Variant::Orc => (Some("Orcus"), 18, 14, 80),
            Variant::Dragon => (Some("Pyro"), 24, 18, 100),
        };

        CombatantProfile {
            variant,
            name: name.map(str::to_string),
            attack,
            defense,
            health,
            buff: BuffEffect::for_variant(variant),
        }
    }

    /// Create a fresh combatant. `name` overrides the profile's own name.
    pub fn spawn(&self, name: Option<&str>) -> Combatant {
        let name = name
            .map(str::to_string)
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| self.variant.name().to_string());

        Combatant::new(name, self.variant, self.attack, self.defense, self.health)
            .with_buff(self.buff)
    }

    /// Stat sheet lines for the character overview
    pub fn describe(&self) -> Vec<String> {
        vec![
            self.variant.name().to_string(),
            format!("- Health: {}", self.health),
            format!("- Attack Strength: {}", self.attack),
            format!("- Defense Strength: {}", self.defense),
            format!("- Buff: \"{}\"", self.buff.describe()),
        ]
    }
}

/// Hero profiles, the ordered enemy list and the rule constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub constants: CombatConstants,
    pub heroes: Vec<CombatantProfile>,
    /// One enemy per level, in level order
    pub enemies: Vec<CombatantProfile>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig::canonical()
    }
}

impl RosterConfig {
    /// Compiled-in roster: three heroes, then Goblin, Orc and Dragon
    pub fn canonical() -> Self {
        RosterConfig {
            constants: CombatConstants::default(),
            heroes: HeroClass::ALL
                .iter()
                .map(|class| CombatantProfile::canonical(class.variant()))
                .collect(),
            enemies: [Variant::Goblin, Variant::Orc, Variant::Dragon]
                .into_iter()
                .map(CombatantProfile::canonical)
                .collect(),
        }
    }

    pub fn hero(&self, class: HeroClass) -> Option<&CombatantProfile> {
        self.heroes.iter().find(|p| p.variant == class.variant())
    }

    /// Fresh enemy combatants in level order
    pub fn spawn_enemies(&self) -> Vec<Combatant> {
        self.enemies.iter().map(|p| p.spawn(None)).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for class in HeroClass::ALL {
            let count = self
                .heroes
                .iter()
                .filter(|p| p.variant == class.variant())
                .count();
            if count != 1 {
                return Err(ConfigError::ValidationError(format!(
                    "expected exactly one {} profile, found {}",
                    class, count
                )));
            }
        }

        if let Some(p) = self.heroes.iter().find(|p| !p.variant.is_hero()) {
            return Err(ConfigError::ValidationError(format!(
                "{} is not a hero variant",
                p.variant
            )));
        }

        if self.enemies.is_empty() {
            return Err(ConfigError::ValidationError(
                "enemy roster is empty".to_string(),
            ));
        }

        if let Some(p) = self
            .heroes
            .iter()
            .chain(self.enemies.iter())
            .find(|p| p.health <= 0)
        {
            return Err(ConfigError::ValidationError(format!(
                "{} must start with positive health, got {}",
                p.variant, p.health
            )));
        }

        Ok(())
    }
}

/// Load and validate a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::load_toml(path)?;
    roster.validate()?;
    Ok(roster)
}

/// Parse and validate a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::parse_toml(content)?;
    roster.validate()?;
    Ok(roster)
}

/// The shipped roster, falling back to the compiled-in tables
pub fn default_roster() -> RosterConfig {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|e| {
        tracing::warn!("Bundled roster is invalid ({}), using built-in profiles", e);
        RosterConfig::canonical()
    })
}
