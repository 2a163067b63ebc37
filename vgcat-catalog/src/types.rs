//! Data model types for the game catalog.

use serde::{Deserialize, Serialize};

use crate::console::Console;

// ── Game ────────────────────────────────────────────────────────────────────

/// A single catalog entry describing a playable title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique, stable identifier assigned when the dataset is built.
    pub id: u32,
    /// Lookup key for every by-name operation (exact, case-sensitive).
    pub name: String,
    /// Free-text description; the only field the catalog mutates.
    pub description: String,
    #[serde(default)]
    pub consoles: Vec<Console>,
    pub release_year: u32,
    /// Minimum supported player count.
    pub num_players: u32,
}

impl Game {
    /// Whether this game is available on `console`.
    pub fn is_on(&self, console: &Console) -> bool {
        self.consoles.contains(console)
    }
}

// ── Projections ─────────────────────────────────────────────────────────────

/// A game name paired with how many consoles it ships on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleCount {
    pub name: String,
    pub console_count: usize,
}
