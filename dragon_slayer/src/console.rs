//! Console collaborators: line-based input and narrated output

use combat_core::campaign::{ActionPrompt, CampaignObserver, CommandSource};
use combat_core::{Action, CampaignSummary, Combatant, InputError, RoundOutcome, StatusSnapshot};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use tracing::warn;

const ROUND_SEPARATOR: &str = "--------------------------------";

/// Reads answers line by line, writing each prompt first
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput { reader, writer }
    }

    /// Show `prompt` and read one line, without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn prompt_or_close(&mut self, prompt: &str) -> Option<String> {
        self.prompt_line(prompt).unwrap_or_else(|e| {
            warn!("failed to read input: {}", e);
            None
        })
    }
}

impl<R: BufRead, W: Write> CommandSource for ConsoleInput<R, W> {
    fn choose_action(&mut self, prompt: &ActionPrompt<'_>) -> Option<String> {
        let text = format!(
            "[Level {}] {} will {}. Choose your action (attack/defend/buff): ",
            prompt.level, prompt.enemy.name, prompt.enemy_action
        );
        self.prompt_or_close(&text)
    }

    fn acknowledge_level(&mut self, _level: usize, _defeated: &Combatant) -> bool {
        self.prompt_or_close("\nPress Enter to continue...").is_some()
    }
}

/// Writes narration and status to a terminal or any writer
pub struct ConsoleDisplay<W> {
    writer: W,
    /// Clear the screen between scenes and style banners
    interactive: bool,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(writer: W, interactive: bool) -> Self {
        ConsoleDisplay {
            writer,
            interactive,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn clear(&mut self) {
        if !self.interactive {
            return;
        }
        if let Err(e) = execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("failed to clear screen: {}", e);
        }
    }

    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text) {
            warn!("failed to write output: {}", e);
        }
    }

    pub fn lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref());
        }
    }

    pub fn banner(&mut self, text: &str) {
        if self.interactive {
            let styled = text.bold().to_string();
            self.line(&styled);
        } else {
            self.line(text);
        }
    }

    fn snapshot(&mut self, snapshot: &StatusSnapshot) {
        self.line(&snapshot.to_string());
        self.line("");
    }
}

impl<W: Write> CampaignObserver for ConsoleDisplay<W> {
    fn level_started(&mut self, level: usize, enemy: &Combatant) {
        self.clear();
        self.banner(&format!("\nLevel {}", level));
        self.line(&format!(
            "You are fighting {}, the {}\n",
            enemy.name, enemy.variant
        ));
    }

    fn status(&mut self, hero: &StatusSnapshot, enemy: &StatusSnapshot) {
        self.snapshot(hero);
        self.snapshot(enemy);
    }

    fn enemy_committed(&mut self, enemy: &Combatant, action: Action) {
        self.line(&format!("{} chose to {}", enemy.name, action));
    }

    fn invalid_input(&mut self, error: &InputError) {
        self.line(&error.to_string());
    }

    fn round_resolved(&mut self, outcome: &RoundOutcome) {
        self.line("");
        self.lines(outcome.narration());
        self.line(ROUND_SEPARATOR);
    }

    fn level_cleared(&mut self, _level: usize, enemy: &Combatant) {
        self.banner(&format!(
            "🎉 {}, the {} has been defeated!",
            enemy.name, enemy.variant
        ));
    }

    fn campaign_ended(&mut self, summary: &CampaignSummary) {
        if summary.victory {
            self.banner("🎉 You have defeated all the enemies! You are the champion!");
        } else {
            self.banner(&format!(
                "You have been defeated by {}, the {}! Better luck next time!",
                summary.enemy.name, summary.enemy.variant
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::Variant;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_newline_and_detects_eof() {
        let mut input = ConsoleInput::new(Cursor::new("attack\r\n"), Vec::new());
        assert_eq!(
            input.prompt_line("> ").unwrap(),
            Some("attack".to_string())
        );
        assert_eq!(input.prompt_line("> ").unwrap(), None);
    }

    #[test]
    fn test_choose_action_returns_raw_token() {
        let enemy = Combatant::new("Goober", Variant::Goblin, 12, 6, 60);
        let prompt = ActionPrompt {
            level: 1,
            enemy: &enemy,
            enemy_action: Action::Buff,
        };

        let mut input = ConsoleInput::new(Cursor::new("  DEFEND \n"), Vec::new());
        assert_eq!(input.choose_action(&prompt), Some("  DEFEND ".to_string()));
        assert_eq!(input.choose_action(&prompt), None);
    }

    #[test]
    fn test_action_prompt_shows_level_and_revealed_action() {
        let enemy = Combatant::new("Orcus", Variant::Orc, 18, 14, 80);
        let prompt = ActionPrompt {
            level: 2,
            enemy: &enemy,
            enemy_action: Action::Defend,
        };

        let mut output = Vec::new();
        {
            let mut input = ConsoleInput::new(Cursor::new("buff\n"), &mut output);
            assert_eq!(input.choose_action(&prompt), Some("buff".to_string()));
        }
        let out = String::from_utf8(output).unwrap();
        assert_eq!(
            out,
            "[Level 2] Orcus will defend. Choose your action (attack/defend/buff): "
        );
    }

    #[test]
    fn test_non_interactive_display_is_plain() {
        let mut display = ConsoleDisplay::new(Vec::new(), false);
        let goblin = Combatant::new("Goober", Variant::Goblin, 12, 6, 60);
        display.clear();
        display.level_started(1, &goblin);
        display.enemy_committed(&goblin, Action::Defend);

        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(
            out,
            "\nLevel 1\nYou are fighting Goober, the Goblin\n\nGoober chose to defend\n"
        );
    }
}
