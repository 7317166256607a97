//! Static screens: menus, rules and the character overview

use combat_core::{HeroClass, RosterConfig};

pub const MAIN_MENU: [&str; 5] = [
    "1. How to Play",
    "2. Start new game",
    "3. View character stats",
    "4. View game history",
    "5. Save and Exit",
];

pub const HOW_TO_PLAY: &str = "\
How to Play:
You are on a quest to slay the dragon, but a few enemies stand in your way.
Choose between Mage, Warrior, or Archer to start your journey.
Each hero has unique attack, defense, and buff (power up) abilities.

Attack: Deals damage to the enemy.
Defend: Reduces damage taken from the enemy.
Buff: Power up your attack, defense, or health.

Attacking damage is calculated as follows:
• Against a defending opponent, damage is your attack minus double their defense.
  If everything is blocked, the defender counterattacks for half of their attack.
• Against an attacking opponent, damage is your attack minus their defense.
• Against a buffing opponent, damage is your attack times 2. A critical hit!

Tips:
• Enemies choose their actions at random, and announce them before you choose.
• Buffing is permanent for the whole run, but you are most vulnerable while buffing.
• Buffs carry over between battles. Health is restored between battles.";

/// Hero selection menu lines
pub fn hero_menu() -> Vec<String> {
    let mut lines = vec!["Get ready to battle! Who will you choose to slay the dragon?".to_string()];
    lines.extend(
        HeroClass::ALL
            .iter()
            .enumerate()
            .map(|(i, class)| format!("{}. {}", i + 1, class)),
    );
    lines
}

/// Stat sheet for every hero and enemy in the roster
pub fn character_stats(roster: &RosterConfig) -> Vec<String> {
    let mut lines = vec!["Hero Stats: ".to_string()];
    for profile in &roster.heroes {
        lines.extend(profile.describe());
    }

    lines.push(String::new());
    lines.push("Enemy Stats: ".to_string());
    for profile in &roster.enemies {
        let mut sheet = profile.describe();
        if let Some(name) = &profile.name {
            sheet[0] = format!("{} ({})", sheet[0], name);
        }
        lines.extend(sheet);
    }
    lines
}
