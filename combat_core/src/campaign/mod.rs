//! Campaign controller - sequences a run across the enemy roster
//!
//! A campaign is a step-wise state machine so it can be driven by an
//! interactive front end or by a scripted test harness alike:
//!
//! ```text
//! start_level -> commit_enemy_action -> submit_player_action
//!     -> resolve_player_turn -> resolve_enemy_turn -> complete_round
//!     -> (RoundComplete | FightWon | FightLost)
//! ```
//!
//! From `RoundComplete` the next `commit_enemy_action` opens a new round.
//!
//! [`run_campaign`] drives the whole loop against the
//! [`CommandSource`] and [`CampaignObserver`] collaborators.

mod driver;
mod summary;

pub use driver::{run_campaign, ActionPrompt, CampaignObserver, CommandSource};
pub use summary::CampaignSummary;

use crate::combat::{
    choose_enemy_action, resolve_enemy_half, resolve_player_half, RoundOutcome, TurnReport,
};
use crate::combatant::Combatant;
use crate::config::{CombatConstants, RosterConfig};
use crate::error::{EngineError, InputError};
use crate::types::{Action, HeroClass, Variant};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the current fight is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightPhase {
    /// No level started yet
    NotStarted,
    AwaitingActions,
    PlayerResolved,
    EnemyResolved,
    EnemySkipped,
    /// Both survived the round; the enemy commits next
    RoundComplete,
    FightWon,
    FightLost,
}

impl FightPhase {
    pub fn is_fight_over(self) -> bool {
        matches!(self, FightPhase::FightWon | FightPhase::FightLost)
    }
}

/// Terminal state of the whole campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignOutcome {
    InProgress,
    Victory,
    Defeat {
        level: usize,
        enemy: String,
        enemy_variant: Variant,
    },
}

/// Actions and half-turns of the round being resolved
#[derive(Debug, Clone)]
struct PendingRound {
    enemy_action: Action,
    player_turn: TurnReport,
    enemy_turn: Option<TurnReport>,
}

/// A hero's run through the enemy roster
#[derive(Debug, Clone)]
pub struct Campaign {
    player_name: String,
    hero_class: HeroClass,
    hero: Combatant,
    enemies: Vec<Combatant>,
    /// 1-based; 0 before the first level starts
    level: usize,
    phase: FightPhase,
    outcome: CampaignOutcome,
    constants: CombatConstants,
    round: Option<PendingRound>,
}

impl Campaign {
    /// Build a campaign from a roster: the hero takes the player's name and
    /// every enemy is spawned once, up front.
    pub fn new(
        player_name: impl Into<String>,
        hero_class: HeroClass,
        roster: &RosterConfig,
    ) -> Result<Self, EngineError> {
        let player_name = player_name.into();
        let hero = roster
            .hero(hero_class)
            .ok_or(EngineError::UnknownHero(hero_class))?
            .spawn(Some(player_name.as_str()));

        Self::with_combatants(
            player_name,
            hero_class,
            hero,
            roster.spawn_enemies(),
            roster.constants,
        )
    }

    /// Build a campaign from ready-made combatants
    pub fn with_combatants(
        player_name: impl Into<String>,
        hero_class: HeroClass,
        hero: Combatant,
        enemies: Vec<Combatant>,
        constants: CombatConstants,
    ) -> Result<Self, EngineError> {
        if enemies.is_empty() {
            return Err(EngineError::EmptyRoster);
        }

        Ok(Campaign {
            player_name: player_name.into(),
            hero_class,
            hero,
            enemies,
            level: 0,
            phase: FightPhase::NotStarted,
            outcome: CampaignOutcome::InProgress,
            constants,
            round: None,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn hero_class(&self) -> HeroClass {
        self.hero_class
    }

    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    /// The current opponent, once a level has started
    pub fn enemy(&self) -> Option<&Combatant> {
        self.level.checked_sub(1).and_then(|i| self.enemies.get(i))
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    pub fn outcome(&self) -> &CampaignOutcome {
        &self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome != CampaignOutcome::InProgress
    }

    /// Enter the next level: select its enemy and restore the hero's health.
    /// Buffs gained on earlier levels are kept. Returns the new level number.
    pub fn start_level(&mut self) -> Result<usize, EngineError> {
        if self.is_finished() {
            return Err(EngineError::CampaignFinished);
        }
        self.expect_phase(&[FightPhase::NotStarted, FightPhase::FightWon], "start a level")?;

        self.level += 1;
        self.hero.restore_health();
        self.hero.reset_action();
        self.round = None;

        let (name, variant) = {
            let enemy = self.current_enemy_mut()?;
            enemy.reset_action();
            (enemy.name.clone(), enemy.variant)
        };

        self.phase = FightPhase::AwaitingActions;
        info!(level = self.level, enemy = %name, ?variant, "level started");
        Ok(self.level)
    }

    /// The enemy commits to a random action before the player chooses,
    /// opening the next round. Clears the player's previous action.
    pub fn commit_enemy_action(&mut self, rng: &mut impl Rng) -> Result<Action, EngineError> {
        self.begin_round()?;

        let action = choose_enemy_action(rng);
        self.current_enemy_mut()?.set_action(action);

        debug!(level = self.level, ?action, "enemy committed");
        Ok(action)
    }

    /// Set the player's action from a typed token.
    ///
    /// The outer error is a phase fault; the inner one is a bad token, which
    /// leaves the action unset and can be asked for again.
    pub fn submit_player_action(
        &mut self,
        token: &str,
    ) -> Result<Result<Action, InputError>, EngineError> {
        self.expect_phase(&[FightPhase::AwaitingActions], "submit the player action")?;
        Ok(self.hero.set_action_token(token))
    }

    /// Resolve the player's half of the round
    pub fn resolve_player_turn(&mut self) -> Result<&TurnReport, EngineError> {
        self.expect_phase(&[FightPhase::AwaitingActions], "resolve the player turn")?;

        let index = self.enemy_index()?;
        let enemy = &mut self.enemies[index];
        let player_turn = resolve_player_half(&mut self.hero, enemy, &self.constants)?;
        let enemy_action = enemy.require_action()?;

        self.phase = FightPhase::PlayerResolved;
        let round = self.round.insert(PendingRound {
            enemy_action,
            player_turn,
            enemy_turn: None,
        });
        Ok(&round.player_turn)
    }

    /// Resolve the enemy's half of the round. Returns `None` when the enemy
    /// died during the player's half and its turn is skipped.
    pub fn resolve_enemy_turn(&mut self) -> Result<Option<&TurnReport>, EngineError> {
        self.expect_phase(&[FightPhase::PlayerResolved], "resolve the enemy turn")?;

        let index = self.enemy_index()?;
        let enemy = &mut self.enemies[index];
        let round = self.round.as_mut().ok_or(EngineError::InvalidPhase {
            operation: "resolve the enemy turn",
            phase: self.phase,
        })?;

        round.enemy_turn = resolve_enemy_half(enemy, &mut self.hero, &self.constants)?;
        self.phase = if round.enemy_turn.is_some() {
            FightPhase::EnemyResolved
        } else {
            FightPhase::EnemySkipped
        };

        Ok(round.enemy_turn.as_ref())
    }

    /// Close the round: `FightLost` if the hero died, `FightWon` if the enemy
    /// did, otherwise `RoundComplete`
    pub fn complete_round(&mut self) -> Result<RoundOutcome, EngineError> {
        self.expect_phase(
            &[FightPhase::EnemyResolved, FightPhase::EnemySkipped],
            "complete the round",
        )?;
        let round = self.round.take().ok_or(EngineError::InvalidPhase {
            operation: "complete the round",
            phase: self.phase,
        })?;

        let level = self.level;
        let is_last_level = level == self.enemies.len();
        let index = self.enemy_index()?;
        let enemy = &self.enemies[index];

        let outcome = RoundOutcome::assemble(
            round.enemy_action,
            round.player_turn,
            round.enemy_turn,
            &self.hero,
            enemy,
        );

        if outcome.player_died {
            self.phase = FightPhase::FightLost;
            self.outcome = CampaignOutcome::Defeat {
                level,
                enemy: enemy.name.clone(),
                enemy_variant: enemy.variant,
            };
            info!(level, enemy = %enemy.name, "hero defeated");
        } else if outcome.enemy_died {
            self.phase = FightPhase::FightWon;
            info!(level, enemy = %enemy.name, "enemy defeated");
            if is_last_level {
                self.outcome = CampaignOutcome::Victory;
                info!(player = %self.player_name, "campaign won");
            }
        } else {
            self.phase = FightPhase::RoundComplete;
        }

        Ok(outcome)
    }

    /// Resolve a full round: player half, enemy half (or skip), completion
    pub fn resolve_round(&mut self) -> Result<RoundOutcome, EngineError> {
        self.resolve_player_turn()?;
        self.resolve_enemy_turn()?;
        self.complete_round()
    }

    /// Summary for the history record; only available once finished
    pub fn summary(&self) -> Result<CampaignSummary, EngineError> {
        if !self.is_finished() {
            return Err(EngineError::CampaignInProgress);
        }
        let enemy = self.enemy().ok_or(EngineError::CampaignInProgress)?;

        Ok(CampaignSummary {
            player_name: self.player_name.clone(),
            hero_class: self.hero_class,
            victory: self.outcome == CampaignOutcome::Victory,
            level: self.level,
            hero: self.hero.status_snapshot(),
            enemy: enemy.status_snapshot(),
        })
    }

    /// Move from `RoundComplete` into a fresh round and clear the hero's
    /// action. A no-op phase change while already awaiting actions.
    fn begin_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(
            &[FightPhase::AwaitingActions, FightPhase::RoundComplete],
            "commit the enemy action",
        )?;
        self.hero.reset_action();
        self.phase = FightPhase::AwaitingActions;
        Ok(())
    }

    fn expect_phase(
        &self,
        allowed: &[FightPhase],
        operation: &'static str,
    ) -> Result<(), EngineError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn enemy_index(&self) -> Result<usize, EngineError> {
        match self.level.checked_sub(1) {
            Some(i) if i < self.enemies.len() => Ok(i),
            _ => Err(EngineError::InvalidPhase {
                operation: "select the active enemy",
                phase: self.phase,
            }),
        }
    }

    fn current_enemy_mut(&mut self) -> Result<&mut Combatant, EngineError> {
        let index = self.enemy_index()?;
        Ok(&mut self.enemies[index])
    }
}
