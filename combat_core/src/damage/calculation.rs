//! Damage calculation - attacker stats vs defender stats and action

use crate::combatant::Combatant;
use crate::config::CombatConstants;
use crate::error::EngineError;
use crate::types::Action;

/// Damage `attacker` deals to `defender` with the default constants
pub fn resolve_damage(attacker: &Combatant, defender: &Combatant) -> Result<u32, EngineError> {
    resolve_damage_with(attacker, defender, &CombatConstants::default())
}

/// Damage `attacker` deals to `defender`, dispatched on the defender's action:
///
/// - Buff: `attack * critical_hit_multiplier` (a critical hit)
/// - Attack: `max(0, attack - defense)`
/// - Defend: `max(0, attack - defense * block_multiplier)`
///
/// The defender must have an action committed; resolving against an unset
/// action is an [`EngineError::MissingAction`].
pub fn resolve_damage_with(
    attacker: &Combatant,
    defender: &Combatant,
    constants: &CombatConstants,
) -> Result<u32, EngineError> {
    let attack = attacker.attack_strength;

    let damage = match defender.require_action()? {
        Action::Buff => attack.saturating_mul(constants.critical_hit_multiplier),
        Action::Attack => attack.saturating_sub(defender.defense_strength),
        Action::Defend => attack.saturating_sub(
            defender
                .defense_strength
                .saturating_mul(constants.block_multiplier),
        ),
    };

    Ok(damage)
}

/// Counter-attack dealt by a defender who blocked everything
pub fn counter_attack_damage(defender: &Combatant) -> u32 {
    counter_attack_damage_with(defender, &CombatConstants::default())
}

/// `floor(defender.attack * counter_attack_percent / 100)`
pub fn counter_attack_damage_with(defender: &Combatant, constants: &CombatConstants) -> u32 {
    let scaled = u64::from(defender.attack_strength) * u64::from(constants.counter_attack_percent);
    u32::try_from(scaled / 100).unwrap_or(u32::MAX)
}
