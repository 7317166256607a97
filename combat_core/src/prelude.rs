//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{BuffEffect, Combatant, StatusSnapshot};
pub use crate::types::{Action, HeroClass, Side, Variant};

// Resolution
pub use crate::combat::{resolve_round, RoundOutcome, TurnEffect};
pub use crate::damage::resolve_damage;

// Campaign
pub use crate::campaign::{run_campaign, Campaign, CampaignObserver, CampaignSummary, CommandSource};

// Config and errors
pub use crate::config::{default_roster, RosterConfig};
pub use crate::error::{EngineError, InputError};
