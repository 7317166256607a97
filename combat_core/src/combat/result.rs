//! RoundOutcome - what happened in a round, and how to narrate it

use crate::combatant::{BuffOutcome, Combatant};
use crate::types::{Action, Side, Variant};
use serde::{Deserialize, Serialize};

/// Effect of one half-turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEffect {
    /// Damage dealt to the opponent
    Attack { damage: u32 },
    /// Defended a partial hit. Informational: the reduction lands when the
    /// opponent's own attack is resolved.
    Block { prevented: u32 },
    /// Defended everything and struck back
    CounterAttack { damage: u32 },
    /// Defended, but the opponent did not attack
    Braced,
    Buff(BuffOutcome),
}

/// One combatant's half of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub side: Side,
    pub actor: String,
    pub actor_variant: Variant,
    pub target: String,
    pub action: Action,
    pub effect: TurnEffect,
}

impl TurnReport {
    /// Damage this half-turn dealt to the opponent, counters included
    pub fn damage_dealt(&self) -> u32 {
        match self.effect {
            TurnEffect::Attack { damage } | TurnEffect::CounterAttack { damage } => damage,
            _ => 0,
        }
    }

    pub fn damage_prevented(&self) -> u32 {
        match self.effect {
            TurnEffect::Block { prevented } => prevented,
            _ => 0,
        }
    }

    pub fn counter_damage(&self) -> u32 {
        match self.effect {
            TurnEffect::CounterAttack { damage } => damage,
            _ => 0,
        }
    }

    /// Human-readable line describing this half-turn
    pub fn narrate(&self) -> String {
        match &self.effect {
            TurnEffect::Attack { damage } => {
                format!("{} attacks {} for {} damage!", self.actor, self.target, damage)
            }
            TurnEffect::Block { prevented } => {
                format!("{} blocked {} damage!", self.actor, prevented)
            }
            TurnEffect::CounterAttack { damage } => format!(
                "{} blocked completely and counterattacked {} for {} damage!",
                self.actor, self.target, damage
            ),
            TurnEffect::Braced => {
                format!("{} braces for an attack that never comes.", self.actor)
            }
            TurnEffect::Buff(outcome) if outcome.is_noop() => {
                format!("{} tries to buff, but nothing happens.", self.actor)
            }
            TurnEffect::Buff(outcome) => format!(
                "{} {}! {}",
                self.actor,
                self.actor_variant.buff_flavor(),
                outcome.changes().join(", ")
            ),
        }
    }
}

/// Aggregate of both half-turns of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_action: Action,
    pub enemy_action: Action,
    pub player_turn: TurnReport,
    /// `None` when the enemy died before its turn
    pub enemy_turn: Option<TurnReport>,
    pub player_health: i32,
    pub enemy_health: i32,
    pub player_died: bool,
    pub enemy_died: bool,
}

impl RoundOutcome {
    /// Build the record from both half-turns and the combatants' state after them
    pub fn assemble(
        enemy_action: Action,
        player_turn: TurnReport,
        enemy_turn: Option<TurnReport>,
        player: &Combatant,
        enemy: &Combatant,
    ) -> Self {
        RoundOutcome {
            player_action: player_turn.action,
            enemy_action,
            player_turn,
            enemy_turn,
            player_health: player.health,
            enemy_health: enemy.health,
            player_died: !player.is_alive(),
            enemy_died: !enemy.is_alive(),
        }
    }

    pub fn enemy_skipped(&self) -> bool {
        self.enemy_turn.is_none()
    }

    pub fn turn(&self, side: Side) -> Option<&TurnReport> {
        match side {
            Side::Player => Some(&self.player_turn),
            Side::Enemy => self.enemy_turn.as_ref(),
        }
    }

    /// Total damage dealt by one side this round
    pub fn damage_dealt_by(&self, side: Side) -> u32 {
        self.turn(side).map_or(0, TurnReport::damage_dealt)
    }

    pub fn damage_prevented_by(&self, side: Side) -> u32 {
        self.turn(side).map_or(0, TurnReport::damage_prevented)
    }

    pub fn counter_damage_by(&self, side: Side) -> u32 {
        self.turn(side).map_or(0, TurnReport::counter_damage)
    }

    /// Narration lines in resolution order
    pub fn narration(&self) -> Vec<String> {
        let mut lines = vec![self.player_turn.narrate()];
        if let Some(enemy_turn) = &self.enemy_turn {
            lines.push(enemy_turn.narrate());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::BuffEffect;

    fn report(effect: TurnEffect) -> TurnReport {
        TurnReport {
            side: Side::Enemy,
            actor: "Goober".to_string(),
            actor_variant: Variant::Goblin,
            target: "Ada".to_string(),
            action: Action::Attack,
            effect,
        }
    }

    #[test]
    fn test_narrate_attack() {
        let r = report(TurnEffect::Attack { damage: 7 });
        assert_eq!(r.narrate(), "Goober attacks Ada for 7 damage!");
        assert_eq!(r.damage_dealt(), 7);
    }

    #[test]
    fn test_narrate_block_and_counter() {
        let block = report(TurnEffect::Block { prevented: 12 });
        assert_eq!(block.narrate(), "Goober blocked 12 damage!");
        assert_eq!(block.damage_dealt(), 0);
        assert_eq!(block.damage_prevented(), 12);

        let counter = report(TurnEffect::CounterAttack { damage: 6 });
        assert_eq!(
            counter.narrate(),
            "Goober blocked completely and counterattacked Ada for 6 damage!"
        );
        assert_eq!(counter.damage_dealt(), 6);
        assert_eq!(counter.counter_damage(), 6);
    }

    #[test]
    fn test_narrate_buff() {
        let outcome = BuffOutcome {
            applied: BuffEffect::new(4, 0, 0),
            attack_after: 16,
            defense_after: 6,
            health_after: 60,
            max_health_after: 60,
        };
        let r = report(TurnEffect::Buff(outcome));
        assert_eq!(r.narrate(), "Goober gets enraged! Attack is now 16");

        let noop = BuffOutcome {
            applied: BuffEffect::NONE,
            ..outcome
        };
        let r = report(TurnEffect::Buff(noop));
        assert_eq!(r.narrate(), "Goober tries to buff, but nothing happens.");
    }

    #[test]
    fn test_skipped_enemy_turn_counts_nothing() {
        let outcome = RoundOutcome {
            player_action: Action::Attack,
            enemy_action: Action::Attack,
            player_turn: TurnReport {
                side: Side::Player,
                ..report(TurnEffect::Attack { damage: 60 })
            },
            enemy_turn: None,
            player_health: 30,
            enemy_health: 0,
            player_died: false,
            enemy_died: true,
        };

        assert!(outcome.enemy_skipped());
        assert_eq!(outcome.damage_dealt_by(Side::Player), 60);
        assert_eq!(outcome.damage_dealt_by(Side::Enemy), 0);
        assert_eq!(outcome.narration().len(), 1);
    }
}
