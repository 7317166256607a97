//! Core types shared across the combat engine

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action a combatant commits to for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    Defend,
    Buff,
}

impl Action {
    /// Every action, in menu order
    pub const ALL: [Action; 3] = [Action::Attack, Action::Defend, Action::Buff];

    /// Lowercase token used at the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Defend => "defend",
            Action::Buff => "buff",
        }
    }

    /// Parse a typed action. Case and surrounding whitespace are ignored.
    pub fn parse(token: &str) -> Result<Action, InputError> {
        let normalized = token.trim().to_lowercase();
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| InputError::InvalidAction(token.trim().to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of combatant, which fixes its base stats and buff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    // Heroes
    Mage,
    Warrior,
    Archer,
    // Enemies
    Goblin,
    Orc,
    Dragon,
}

impl Variant {
    /// Get all variants
    pub fn all() -> &'static [Variant] {
        &[
            Variant::Mage,
            Variant::Warrior,
            Variant::Archer,
            Variant::Goblin,
            Variant::Orc,
            Variant::Dragon,
        ]
    }

    pub fn is_hero(&self) -> bool {
        matches!(self, Variant::Mage | Variant::Warrior | Variant::Archer)
    }

    /// Display name of the type ("Goblin", "Mage", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Mage => "Mage",
            Variant::Warrior => "Warrior",
            Variant::Archer => "Archer",
            Variant::Goblin => "Goblin",
            Variant::Orc => "Orc",
            Variant::Dragon => "Dragon",
        }
    }

    /// Narration verb phrase used when this variant buffs
    pub fn buff_flavor(&self) -> &'static str {
        match self {
            Variant::Mage => "channels arcane power",
            Variant::Warrior => "steels for battle",
            Variant::Archer => "takes careful aim",
            Variant::Goblin => "gets enraged",
            Variant::Orc => "braces itself",
            Variant::Dragon => "regenerates scales",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hero classes a player can pick at the start of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroClass {
    Mage,
    Warrior,
    Archer,
}

impl HeroClass {
    /// Selection menu order
    pub const ALL: [HeroClass; 3] = [HeroClass::Mage, HeroClass::Warrior, HeroClass::Archer];

    /// Parse a menu choice: "1"/"2"/"3" or the class name, case-insensitive
    pub fn from_choice(token: &str) -> Result<HeroClass, InputError> {
        let normalized = token.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "mage" => Ok(HeroClass::Mage),
            "2" | "warrior" => Ok(HeroClass::Warrior),
            "3" | "archer" => Ok(HeroClass::Archer),
            _ => Err(InputError::InvalidHeroChoice(token.trim().to_string())),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            HeroClass::Mage => Variant::Mage,
            HeroClass::Warrior => Variant::Warrior,
            HeroClass::Archer => Variant::Archer,
        }
    }
}

impl From<HeroClass> for Variant {
    fn from(class: HeroClass) -> Self {
        class.variant()
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant().name())
    }
}

/// Which side of a fight a combatant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}
