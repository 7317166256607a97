//! Integration test: full campaigns driven by a scripted player
//!
//! Exercises the roster -> campaign -> round -> damage flow end to end.

use combat_core::campaign::{run_campaign, ActionPrompt, CampaignObserver, CommandSource};
use combat_core::{
    Action, Campaign, CampaignOutcome, CampaignSummary, CombatConstants, Combatant, EngineError,
    HeroClass, InputError, RosterConfig, RoundOutcome, Side, StatusSnapshot, TurnEffect, Variant,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Answers the revealed enemy action with a fixed counter-move
struct Responsive {
    prompts: usize,
    limit: usize,
}

impl Responsive {
    fn new() -> Self {
        Responsive {
            prompts: 0,
            limit: 10_000,
        }
    }
}

impl CommandSource for Responsive {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> Option<String> {
        self.prompts += 1;
        if self.prompts > self.limit {
            return None;
        }
        let reply = match prompt.enemy_action {
            Action::Attack => "defend",
            Action::Defend => "buff",
            Action::Buff => "attack",
        };
        Some(reply.to_string())
    }
}

/// Plays a fixed list of tokens, then closes
struct Scripted {
    tokens: Vec<String>,
    acknowledge: bool,
}

impl CommandSource for Scripted {
    fn choose_action(&mut self, _prompt: &ActionPrompt<'_>) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.remove(0))
        }
    }

    fn acknowledge_level(&mut self, _level: usize, _defeated: &Combatant) -> bool {
        self.acknowledge
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    LevelStarted(usize, String),
    Status(StatusSnapshot, StatusSnapshot),
    EnemyCommitted(Action),
    Invalid(InputError),
    Round(RoundOutcome),
    Cleared(usize),
    Ended(CampaignSummary),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn rounds(&self) -> impl Iterator<Item = &RoundOutcome> {
        self.events.iter().filter_map(|e| match e {
            Event::Round(r) => Some(r),
            _ => None,
        })
    }

    fn levels_started(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::LevelStarted(level, _) => Some(*level),
                _ => None,
            })
            .collect()
    }
}

impl CampaignObserver for Recorder {
    fn level_started(&mut self, level: usize, enemy: &Combatant) {
        self.events
            .push(Event::LevelStarted(level, enemy.name.clone()));
    }

    fn status(&mut self, hero: &StatusSnapshot, enemy: &StatusSnapshot) {
        self.events.push(Event::Status(hero.clone(), enemy.clone()));
    }

    fn enemy_committed(&mut self, _enemy: &Combatant, action: Action) {
        self.events.push(Event::EnemyCommitted(action));
    }

    fn invalid_input(&mut self, error: &InputError) {
        self.events.push(Event::Invalid(error.clone()));
    }

    fn round_resolved(&mut self, outcome: &RoundOutcome) {
        self.events.push(Event::Round(outcome.clone()));
    }

    fn level_cleared(&mut self, level: usize, _enemy: &Combatant) {
        self.events.push(Event::Cleared(level));
    }

    fn campaign_ended(&mut self, summary: &CampaignSummary) {
        self.events.push(Event::Ended(summary.clone()));
    }
}

fn canonical_run(class: HeroClass, seed: u64) -> (Campaign, CampaignSummary, Recorder) {
    let mut campaign = Campaign::new("Ada", class, &RosterConfig::canonical()).unwrap();
    let mut input = Responsive::new();
    let mut recorder = Recorder::default();
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = run_campaign(&mut campaign, &mut input, &mut recorder, &mut rng)
        .expect("campaign should run to completion");
    (campaign, summary, recorder)
}

#[test]
fn test_campaign_always_ends_with_recorded_outcome() {
    for class in HeroClass::ALL {
        for seed in 0..40 {
            let (campaign, summary, recorder) = canonical_run(class, seed);

            match campaign.outcome() {
                CampaignOutcome::Victory => {
                    assert!(summary.victory);
                    assert_eq!(summary.level, 3);
                    assert_eq!(summary.enemy.variant, Variant::Dragon);
                    assert!(summary.enemy.health <= 0);
                    assert!(summary.hero.health > 0);
                }
                CampaignOutcome::Defeat {
                    level,
                    enemy,
                    enemy_variant,
                } => {
                    assert!(!summary.victory);
                    assert!((1..=3).contains(level));
                    assert_eq!(summary.level, *level);
                    assert_eq!(&summary.enemy.name, enemy);
                    assert_eq!(summary.enemy.variant, *enemy_variant);
                    assert!(summary.hero.health <= 0);
                }
                CampaignOutcome::InProgress => panic!("finished campaign still in progress"),
            }

            // Levels are entered in order and never skipped
            let levels = recorder.levels_started();
            assert_eq!(levels, (1..=summary.level).collect::<Vec<_>>());
            assert_eq!(recorder.events.last(), Some(&Event::Ended(summary.clone())));
        }
    }
}

#[test]
fn test_same_seed_same_campaign() {
    let (_, first, first_log) = canonical_run(HeroClass::Warrior, 99);
    let (_, second, second_log) = canonical_run(HeroClass::Warrior, 99);
    assert_eq!(first, second);
    assert_eq!(first_log.events, second_log.events);
}

#[test]
fn test_dead_combatants_never_act() {
    for seed in 0..40 {
        let (_, _, recorder) = canonical_run(HeroClass::Mage, seed);
        for round in recorder.rounds() {
            if round.enemy_skipped() {
                assert!(round.enemy_died);
            }
            // A round ends the moment one side drops
            assert!(!(round.player_died && round.enemy_skipped()));
        }
    }
}

#[test]
fn test_enemy_action_is_revealed_before_player_chooses() {
    let (_, _, recorder) = canonical_run(HeroClass::Archer, 5);
    let mut last_committed = None;
    for event in &recorder.events {
        match event {
            Event::EnemyCommitted(action) => last_committed = Some(*action),
            Event::Round(round) => {
                assert_eq!(Some(round.enemy_action), last_committed);
                last_committed = None;
            }
            _ => {}
        }
    }
}

#[test]
fn test_health_restored_and_buffs_kept_between_levels() {
    let (_, summary, recorder) = canonical_run(HeroClass::Warrior, 11);
    if summary.level < 2 {
        return;
    }

    let mut statuses_after_start = Vec::new();
    let mut take_next = false;
    let mut previous_hero: Option<StatusSnapshot> = None;
    for event in &recorder.events {
        match event {
            Event::LevelStarted(..) => take_next = true,
            Event::Status(hero, _) if take_next => {
                statuses_after_start.push((previous_hero.clone(), hero.clone()));
                take_next = false;
                previous_hero = Some(hero.clone());
            }
            Event::Status(hero, _) => previous_hero = Some(hero.clone()),
            _ => {}
        }
    }

    for (before, after) in statuses_after_start.iter().skip(1) {
        let before = before.as_ref().unwrap();
        assert_eq!(after.health, after.max_health);
        assert_eq!(after.max_health, before.max_health);
        assert_eq!(after.attack, before.attack);
        assert_eq!(after.defense, before.defense);
    }
}

#[test]
fn test_invalid_input_is_reported_and_reprompted() {
    let hero = Combatant::new("Ada", Variant::Mage, 500, 5, 30);
    let enemies = vec![Combatant::new("Goober", Variant::Goblin, 12, 6, 60)];
    let mut campaign =
        Campaign::with_combatants("Ada", HeroClass::Mage, hero, enemies, CombatConstants::default())
            .unwrap();
    let mut input = Scripted {
        tokens: vec!["flee".into(), "Attack".into()],
        acknowledge: true,
    };
    let mut recorder = Recorder::default();
    let mut rng = StdRng::seed_from_u64(0);

    let summary = run_campaign(&mut campaign, &mut input, &mut recorder, &mut rng).unwrap();

    assert!(summary.victory);
    assert!(recorder
        .events
        .contains(&Event::Invalid(InputError::InvalidAction("flee".into()))));
    assert_eq!(recorder.rounds().count(), 1);
}

#[test]
fn test_declining_next_level_interrupts_without_summary() {
    let hero = Combatant::new("Ada", Variant::Mage, 500, 5, 30);
    let enemies = vec![
        Combatant::new("Goober", Variant::Goblin, 12, 6, 60),
        Combatant::new("Orcus", Variant::Orc, 18, 14, 80),
    ];
    let mut campaign =
        Campaign::with_combatants("Ada", HeroClass::Mage, hero, enemies, CombatConstants::default())
            .unwrap();
    let mut input = Scripted {
        tokens: vec!["attack".into(); 4],
        acknowledge: false,
    };
    let mut recorder = Recorder::default();
    let mut rng = StdRng::seed_from_u64(0);

    let err = run_campaign(&mut campaign, &mut input, &mut recorder, &mut rng).unwrap_err();

    assert_eq!(err, EngineError::Interrupted { level: 1 });
    assert!(recorder.events.contains(&Event::Cleared(1)));
    assert!(!recorder
        .events
        .iter()
        .any(|e| matches!(e, Event::Ended(_))));
}

#[test]
fn test_hero_attacks_defending_goblin() {
    let hero = Combatant::new("Ada", Variant::Warrior, 10, 5, 30);
    let goblin = Combatant::new("Goober", Variant::Goblin, 12, 6, 60);
    let mut campaign = Campaign::with_combatants(
        "Ada",
        HeroClass::Warrior,
        hero,
        vec![goblin],
        CombatConstants::default(),
    )
    .unwrap();
    campaign.start_level().unwrap();

    // Find a seed whose first enemy pick is Defend
    let mut rng = (0..)
        .map(StdRng::seed_from_u64)
        .find(|rng| combat_core::choose_enemy_action(&mut rng.clone()) == Action::Defend)
        .unwrap();
    assert_eq!(campaign.commit_enemy_action(&mut rng).unwrap(), Action::Defend);
    campaign.submit_player_action("attack").unwrap().unwrap();

    let outcome = campaign.resolve_round().unwrap();

    assert_eq!(outcome.player_turn.effect, TurnEffect::Attack { damage: 0 });
    assert_eq!(outcome.counter_damage_by(Side::Enemy), 6);
    assert_eq!(outcome.enemy_health, 60);
    assert_eq!(outcome.player_health, 24);
    assert_eq!(
        outcome.narration(),
        vec![
            "Ada attacks Goober for 0 damage!".to_string(),
            "Goober blocked completely and counterattacked Ada for 6 damage!".to_string(),
        ]
    );
}
