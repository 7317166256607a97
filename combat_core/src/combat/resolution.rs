//! Round resolution - player half-turn, then enemy half-turn if it survived

use super::result::{RoundOutcome, TurnEffect, TurnReport};
use crate::combatant::Combatant;
use crate::config::CombatConstants;
use crate::damage::{counter_attack_damage_with, resolve_damage_with};
use crate::error::EngineError;
use crate::types::{Action, Side};
use rand::Rng;
use tracing::debug;

/// Pick the enemy's action uniformly at random
pub fn choose_enemy_action(rng: &mut impl Rng) -> Action {
    Action::ALL[rng.gen_range(0..Action::ALL.len())]
}

/// Resolve a round with the default constants
pub fn resolve_round(
    player: &mut Combatant,
    enemy: &mut Combatant,
) -> Result<RoundOutcome, EngineError> {
    resolve_round_with(player, enemy, &CombatConstants::default())
}

/// Resolve one round of already-committed actions.
///
/// The player acts first. The enemy acts only if it is still alive
/// afterwards; a combatant killed this round forfeits its turn even though
/// its action was already announced. Both actions must be set.
pub fn resolve_round_with(
    player: &mut Combatant,
    enemy: &mut Combatant,
    constants: &CombatConstants,
) -> Result<RoundOutcome, EngineError> {
    let enemy_action = enemy.require_action()?;
    let player_turn = resolve_player_half(player, enemy, constants)?;
    let enemy_turn = resolve_enemy_half(enemy, player, constants)?;

    Ok(RoundOutcome::assemble(
        enemy_action,
        player_turn,
        enemy_turn,
        player,
        enemy,
    ))
}

/// The player's half of a round. Fails before touching either combatant
/// unless both actions are committed.
pub fn resolve_player_half(
    player: &mut Combatant,
    enemy: &mut Combatant,
    constants: &CombatConstants,
) -> Result<TurnReport, EngineError> {
    player.require_action()?;
    enemy.require_action()?;
    resolve_turn(Side::Player, player, enemy, constants)
}

/// The enemy's half of a round, or `None` if the player's half killed it
pub fn resolve_enemy_half(
    enemy: &mut Combatant,
    player: &mut Combatant,
    constants: &CombatConstants,
) -> Result<Option<TurnReport>, EngineError> {
    if !enemy.is_alive() {
        debug!(enemy = %enemy.name, "enemy died before acting, turn skipped");
        return Ok(None);
    }
    resolve_turn(Side::Enemy, enemy, player, constants).map(Some)
}

/// Resolve `actor`'s committed action against `opponent`.
///
/// - Attack: damage from [`resolve_damage_with`] is applied to the opponent.
/// - Defend: only matters if the opponent is attacking. If the opponent's
///   attack would be fully blocked, the actor counters for a fraction of its
///   attack; otherwise the prevented amount is reported and nothing is applied.
/// - Buff: the actor's buff effect is applied to itself.
pub fn resolve_turn(
    side: Side,
    actor: &mut Combatant,
    opponent: &mut Combatant,
    constants: &CombatConstants,
) -> Result<TurnReport, EngineError> {
    let action = actor.require_action()?;

    let effect = match action {
        Action::Attack => {
            let damage = resolve_damage_with(actor, opponent, constants)?;
            opponent.apply_damage(damage);
            TurnEffect::Attack { damage }
        }
        Action::Defend => {
            if opponent.require_action()? == Action::Attack {
                let incoming = resolve_damage_with(opponent, actor, constants)?;
                if incoming == 0 {
                    let damage = counter_attack_damage_with(actor, constants);
                    opponent.apply_damage(damage);
                    TurnEffect::CounterAttack { damage }
                } else {
                    TurnEffect::Block {
                        prevented: opponent.attack_strength.saturating_sub(incoming),
                    }
                }
            } else {
                TurnEffect::Braced
            }
        }
        Action::Buff => TurnEffect::Buff(actor.buff()),
    };

    debug!(
        actor = %actor.name,
        target = %opponent.name,
        ?action,
        ?effect,
        actor_health = actor.health,
        target_health = opponent.health,
        "turn resolved"
    );

    Ok(TurnReport {
        side,
        actor: actor.name.clone(),
        actor_variant: actor.variant,
        target: opponent.name.clone(),
        action,
        effect,
    })
}
