//! Dragon Slayer - a turn-based text adventure
//!
//! Asks for the player's name, then loops over the main menu: rules,
//! a new campaign, the character overview, past games, or save and exit.

use clap::Parser;
use combat_core::config::{default_roster, load_roster};
use combat_core::{run_campaign, Campaign, EngineError, HeroClass, RosterConfig};
use dragon_slayer::screens::{self, HOW_TO_PLAY, MAIN_MENU};
use dragon_slayer::{AppError, ConsoleDisplay, ConsoleInput, GameHistory};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Dragon Slayer - fight your way to the dragon
#[derive(Parser, Debug)]
#[command(name = "dragon_slayer")]
#[command(about = "Turn-based text adventure: defeat the goblin, the orc and the dragon")]
struct Args {
    /// Random seed for reproducible enemy choices
    #[arg(long)]
    seed: Option<u64>,

    /// Where finished games are saved
    #[arg(long, default_value = "data/game_history.json")]
    history: PathBuf,

    /// Roster override (TOML); defaults to the bundled roster
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let roster = match &args.config {
        Some(path) => load_roster(path)?,
        None => default_roster(),
    };
    let mut history = GameHistory::load(&args.history);
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, games = history.len(), "Dragon Slayer starting");

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout(), true);

    display.clear();
    let Some(player_name) = input.prompt_line("Enter your name: ")? else {
        return Ok(());
    };
    let player_name = player_name.trim().to_string();
    display.line(&format!(
        "Welcome to Dragon Slayer {}! Can you defeat the dragon?",
        player_name
    ));

    // Menu loop
    loop {
        display.line("\nWhat would you like to do?");
        display.lines(MAIN_MENU);
        display.line("");

        let Some(choice) = input.prompt_line("Enter your choice (1-5): ")? else {
            break;
        };

        match choice.trim() {
            "1" => display.line(HOW_TO_PLAY),
            "2" => {
                play(&player_name, &roster, &mut history, &mut input, &mut display, &mut rng)?;
            }
            "3" => {
                display.clear();
                display.lines(screens::character_stats(&roster));
            }
            "4" => {
                display.clear();
                if history.is_empty() {
                    display.line("No games have been played yet.");
                } else {
                    display.line("Game History:");
                    display.lines(history.lines());
                }
            }
            "5" => {
                history.save(&args.history)?;
                display.line("Game saved. Thanks for playing!");
                return Ok(());
            }
            _ => display.line("Invalid choice. Please try again."),
        }

        if input.prompt_line("\nPress Enter to continue...")?.is_none() {
            break;
        }
        display.clear();
    }

    tracing::info!("input closed, exiting without saving");
    Ok(())
}

/// Pick a hero and run one campaign, recording it if it finished
fn play<R: BufRead, W: Write, D: Write>(
    player_name: &str,
    roster: &RosterConfig,
    history: &mut GameHistory,
    input: &mut ConsoleInput<R, W>,
    display: &mut ConsoleDisplay<D>,
    rng: &mut ChaCha8Rng,
) -> Result<(), AppError> {
    display.clear();
    let hero_class = loop {
        display.line("");
        display.lines(screens::hero_menu());

        let Some(token) = input.prompt_line("Choose your hero (enter 1, 2, or 3): ")? else {
            return Ok(());
        };
        match HeroClass::from_choice(&token) {
            Ok(class) => break class,
            Err(e) => display.line(&e.to_string()),
        }
    };

    let mut campaign = Campaign::new(player_name, hero_class, roster)?;
    display.line(&format!(
        "{}, the {}, your journey begins!",
        player_name, hero_class
    ));

    match run_campaign(&mut campaign, input, display, rng) {
        Ok(summary) => {
            tracing::info!(victory = summary.victory, level = summary.level, "campaign finished");
            history.add(summary);
            Ok(())
        }
        Err(EngineError::Interrupted { level }) => {
            tracing::warn!(level, "campaign abandoned, nothing recorded");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("combat_core=debug,dragon_slayer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
