//! Damage resolution - how much an attack deals given the defender's action

mod calculation;

pub use calculation::{
    counter_attack_damage, counter_attack_damage_with, resolve_damage, resolve_damage_with,
};
