//! Campaign driver - runs the fight loop against input and display collaborators

use super::{Campaign, CampaignSummary, FightPhase};
use crate::combat::RoundOutcome;
use crate::combatant::{Combatant, StatusSnapshot};
use crate::error::{EngineError, InputError};
use crate::types::Action;
use rand::Rng;

/// What the player sees when asked for an action
#[derive(Debug, Clone, Copy)]
pub struct ActionPrompt<'a> {
    pub level: usize,
    pub enemy: &'a Combatant,
    /// Already committed and revealed
    pub enemy_action: Action,
}

/// Supplies the player's decisions. Both calls are suspension points.
pub trait CommandSource {
    /// Next action token; `None` means input was closed
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> Option<String>;

    /// Wait for the player before the next level; `false` aborts the campaign
    fn acknowledge_level(&mut self, _level: usize, _defeated: &Combatant) -> bool {
        true
    }
}

/// Receives everything worth showing while a campaign runs
pub trait CampaignObserver {
    fn level_started(&mut self, _level: usize, _enemy: &Combatant) {}

    /// Status of both combatants after a level starts and after every round
    fn status(&mut self, _hero: &StatusSnapshot, _enemy: &StatusSnapshot) {}

    fn enemy_committed(&mut self, _enemy: &Combatant, _action: Action) {}

    fn invalid_input(&mut self, _error: &InputError) {}

    fn round_resolved(&mut self, _outcome: &RoundOutcome) {}

    fn level_cleared(&mut self, _level: usize, _enemy: &Combatant) {}

    fn campaign_ended(&mut self, _summary: &CampaignSummary) {}
}

/// Observer that ignores everything
impl CampaignObserver for () {}

/// Run the campaign until victory or defeat.
///
/// Each round the enemy commits first, then the player is asked until a
/// valid action is given. Invalid tokens are reported to the observer and
/// asked again; no default is ever substituted. If input closes at any
/// suspension point the campaign is abandoned with
/// [`EngineError::Interrupted`] and no summary is produced.
pub fn run_campaign<I, O>(
    campaign: &mut Campaign,
    input: &mut I,
    observer: &mut O,
    rng: &mut impl Rng,
) -> Result<CampaignSummary, EngineError>
where
    I: CommandSource + ?Sized,
    O: CampaignObserver + ?Sized,
{
    while !campaign.is_finished() {
        let level = campaign.start_level()?;
        observer.level_started(level, active_enemy(campaign)?);
        report_status(campaign, observer)?;

        while !campaign.phase().is_fight_over() {
            let enemy_action = campaign.commit_enemy_action(rng)?;
            observer.enemy_committed(active_enemy(campaign)?, enemy_action);

            read_player_action(campaign, input, observer, level, enemy_action)?;

            let outcome = campaign.resolve_round()?;
            observer.round_resolved(&outcome);
            report_status(campaign, observer)?;
        }

        if campaign.phase() == FightPhase::FightWon {
            let enemy = active_enemy(campaign)?;
            observer.level_cleared(level, enemy);
            if !campaign.is_finished() && !input.acknowledge_level(level, enemy) {
                return Err(EngineError::Interrupted { level });
            }
        }
    }

    let summary = campaign.summary()?;
    observer.campaign_ended(&summary);
    Ok(summary)
}

fn read_player_action<I, O>(
    campaign: &mut Campaign,
    input: &mut I,
    observer: &mut O,
    level: usize,
    enemy_action: Action,
) -> Result<Action, EngineError>
where
    I: CommandSource + ?Sized,
    O: CampaignObserver + ?Sized,
{
    loop {
        let token = {
            let prompt = ActionPrompt {
                level,
                enemy: active_enemy(campaign)?,
                enemy_action,
            };
            input
                .choose_action(&prompt)
                .ok_or(EngineError::Interrupted { level })?
        };

        match campaign.submit_player_action(&token)? {
            Ok(action) => return Ok(action),
            Err(e) => observer.invalid_input(&e),
        }
    }
}

fn report_status<O>(campaign: &Campaign, observer: &mut O) -> Result<(), EngineError>
where
    O: CampaignObserver + ?Sized,
{
    let enemy = active_enemy(campaign)?;
    observer.status(&campaign.hero().status_snapshot(), &enemy.status_snapshot());
    Ok(())
}

fn active_enemy(campaign: &Campaign) -> Result<&Combatant, EngineError> {
    campaign.enemy().ok_or(EngineError::InvalidPhase {
        operation: "select the active enemy",
        phase: campaign.phase(),
    })
}
