//! Game history - completed campaign summaries persisted as one JSON document

use combat_core::CampaignSummary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// History persistence error
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to (de)serialize history: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Ordered list of finished campaigns, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistory {
    games: Vec<CampaignSummary>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole history document. A missing or empty file is an empty history.
    pub fn try_load(path: &Path) -> Result<Self, HistoryError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`GameHistory::try_load`], but an unreadable or corrupt file
    /// degrades to an empty history.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(history) => {
                debug!(path = %path.display(), games = history.len(), "history loaded");
                history
            }
            Err(e) => {
                warn!(path = %path.display(), "ignoring unreadable game history: {}", e);
                Self::new()
            }
        }
    }

    /// Write the whole list, replacing the previous document
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), games = self.len(), "history saved");
        Ok(())
    }

    pub fn add(&mut self, summary: CampaignSummary) {
        self.games.push(summary);
    }

    pub fn games(&self) -> &[CampaignSummary] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Bulleted lines for the history screen
    pub fn lines(&self) -> Vec<String> {
        self.games
            .iter()
            .map(|game| format!("• {}", game.describe()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{HeroClass, StatusSnapshot, Variant};

    fn summary(victory: bool) -> CampaignSummary {
        CampaignSummary {
            player_name: "Ada".to_string(),
            hero_class: HeroClass::Archer,
            victory,
            level: if victory { 3 } else { 2 },
            hero: StatusSnapshot {
                name: "Ada".to_string(),
                variant: Variant::Archer,
                health: if victory { 41 } else { -3 },
                max_health: 85,
                attack: 24,
                defense: 13,
            },
            enemy: StatusSnapshot {
                name: if victory { "Pyro" } else { "Orcus" }.to_string(),
                variant: if victory { Variant::Dragon } else { Variant::Orc },
                health: if victory { -6 } else { 12 },
                max_health: 80,
                attack: 18,
                defense: 14,
            },
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = GameHistory::try_load(&dir.path().join("none.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_empty_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "  \n").unwrap();
        assert!(GameHistory::try_load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            GameHistory::try_load(&path),
            Err(HistoryError::Serde(_))
        ));
        assert!(GameHistory::load(&path).is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut history = GameHistory::new();
        history.add(summary(false));
        history.add(summary(true));
        history.save(&path).unwrap();

        let loaded = GameHistory::load(&path);
        assert_eq!(loaded, history);
        assert!(!loaded.games()[0].victory);
        assert!(loaded.games()[1].victory);
    }

    #[test]
    fn test_document_is_a_plain_list() {
        let mut history = GameHistory::new();
        history.add(summary(true));
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["player_name"], "Ada");
    }

    #[test]
    fn test_lines() {
        let mut history = GameHistory::new();
        history.add(summary(true));
        history.add(summary(false));
        assert_eq!(
            history.lines(),
            vec![
                "• Ada, the Archer slayed the dragon with 41 health remaining.".to_string(),
                "• Ada, the Archer was defeated by Orcus, the Orc on level 2.".to_string(),
            ]
        );
    }
}
