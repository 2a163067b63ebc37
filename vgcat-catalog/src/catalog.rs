//! The in-memory catalog and its query operations.
//!
//! Every operation is a single pass over the records in catalog order.
//! Lookups that find nothing return `None` or an empty collection rather
//! than an error.

use std::collections::{BTreeMap, HashSet};

use crate::console::Console;
use crate::dataset::reference_games;
use crate::error::CatalogError;
use crate::types::{ConsoleCount, Game};

/// Ordered collection of [`Game`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// Build a catalog from records in the given order.
    ///
    /// Ids must be unique. Names are not checked; by-name operations act on
    /// the first match.
    pub fn new(games: Vec<Game>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            if !seen.insert(game.id) {
                return Err(CatalogError::DuplicateId(game.id));
            }
        }
        Ok(Self { games })
    }

    /// Catalog holding the embedded reference dataset.
    pub fn reference() -> Self {
        Self {
            games: reference_games(),
        }
    }

    pub fn empty() -> Self {
        Self { games: Vec::new() }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    // ── Lookups ─────────────────────────────────────────────────────────────

    /// First game whose name equals `name` exactly (case-sensitive).
    pub fn find_game_by_name(&self, name: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.name == name)
    }

    /// Names of every game, in catalog order.
    pub fn get_all_game_names(&self) -> Vec<&str> {
        self.games.iter().map(|game| game.name.as_str()).collect()
    }

    // ── Filters ─────────────────────────────────────────────────────────────

    /// Games available on `console`.
    pub fn games_on(&self, console: &Console) -> Vec<&Game> {
        self.games.iter().filter(|game| game.is_on(console)).collect()
    }

    pub fn games_on_playstation(&self) -> Vec<&Game> {
        self.games_on(&Console::PlayStation)
    }

    /// Games available on both PC and Xbox, in either listing order.
    pub fn games_on_pc_and_xbox(&self) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.is_on(&Console::Pc) && game.is_on(&Console::Xbox))
            .collect()
    }

    /// Games released strictly after `year`.
    pub fn games_released_after(&self, year: u32) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.release_year > year)
            .collect()
    }

    pub fn games_released_after_2019(&self) -> Vec<&Game> {
        self.games_released_after(2019)
    }

    // ── Aggregates ──────────────────────────────────────────────────────────

    /// Sum of `num_players` over all games; 0 for an empty catalog.
    pub fn total_number_of_players(&self) -> u64 {
        self.games.iter().map(|game| u64::from(game.num_players)).sum()
    }

    /// One `(name, console count)` pair per game, in catalog order.
    pub fn games_with_console_count(&self) -> Vec<ConsoleCount> {
        self.games
            .iter()
            .map(|game| ConsoleCount {
                name: game.name.clone(),
                console_count: game.consoles.len(),
            })
            .collect()
    }

    /// The game with the largest `num_players`.
    ///
    /// Ties keep the earliest game in catalog order. Fails with
    /// [`CatalogError::EmptyCatalog`] when there are no games.
    pub fn game_with_max_players(&self) -> Result<&Game, CatalogError> {
        let mut iter = self.games.iter();
        let first = iter.next().ok_or(CatalogError::EmptyCatalog)?;
        Ok(iter.fold(first, |max, game| {
            if game.num_players > max.num_players {
                game
            } else {
                max
            }
        }))
    }

    /// Number of games per release year. Only years that occur are present.
    pub fn count_games_by_year(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for game in &self.games {
            *counts.entry(game.release_year).or_insert(0) += 1;
        }
        counts
    }

    // ── Mutation ────────────────────────────────────────────────────────────

    /// Replace the description of the first game named `name`.
    ///
    /// Unknown names are a silent no-op. Returns whether a game was updated.
    pub fn update_game_description(
        &mut self,
        name: &str,
        new_description: impl Into<String>,
    ) -> bool {
        match self.games.iter_mut().find(|game| game.name == name) {
            Some(game) => {
                game.description = new_description.into();
                log::debug!("Updated description of '{}' (id {})", game.name, game.id);
                true
            }
            None => {
                log::debug!("No game named '{}'; description unchanged", name);
                false
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
