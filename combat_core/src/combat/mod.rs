//! Combat resolution - resolve one simultaneous round between two combatants

mod resolution;
mod result;

pub use resolution::{
    choose_enemy_action, resolve_enemy_half, resolve_player_half, resolve_round,
    resolve_round_with, resolve_turn,
};
pub use result::{RoundOutcome, TurnEffect, TurnReport};
