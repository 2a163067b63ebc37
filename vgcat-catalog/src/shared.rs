//! Thread-safe catalog handle.
//!
//! Reads share an `RwLock` read guard and hand back owned values so no
//! borrow escapes the lock. The description update takes the write guard,
//! so a reader never sees a half-written record.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::{ConsoleCount, Game};

/// Cloneable handle to one catalog shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, CatalogError> {
        self.inner.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, CatalogError> {
        self.inner.write().map_err(|_| CatalogError::LockPoisoned)
    }

    /// Owned copy of the catalog as of this call.
    pub fn snapshot(&self) -> Result<Catalog, CatalogError> {
        Ok(self.read()?.clone())
    }

    pub fn find_game_by_name(&self, name: &str) -> Result<Option<Game>, CatalogError> {
        Ok(self.read()?.find_game_by_name(name).cloned())
    }

    pub fn games_on_playstation(&self) -> Result<Vec<Game>, CatalogError> {
        Ok(owned(self.read()?.games_on_playstation()))
    }

    pub fn get_all_game_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .read()?
            .get_all_game_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn total_number_of_players(&self) -> Result<u64, CatalogError> {
        Ok(self.read()?.total_number_of_players())
    }

    pub fn games_released_after_2019(&self) -> Result<Vec<Game>, CatalogError> {
        Ok(owned(self.read()?.games_released_after_2019()))
    }

    /// See [`Catalog::update_game_description`].
    pub fn update_game_description(
        &self,
        name: &str,
        new_description: impl Into<String>,
    ) -> Result<bool, CatalogError> {
        Ok(self.write()?.update_game_description(name, new_description))
    }

    pub fn games_with_console_count(&self) -> Result<Vec<ConsoleCount>, CatalogError> {
        Ok(self.read()?.games_with_console_count())
    }

    pub fn game_with_max_players(&self) -> Result<Game, CatalogError> {
        self.read()?.game_with_max_players().cloned()
    }

    pub fn games_on_pc_and_xbox(&self) -> Result<Vec<Game>, CatalogError> {
        Ok(owned(self.read()?.games_on_pc_and_xbox()))
    }

    pub fn count_games_by_year(&self) -> Result<BTreeMap<u32, usize>, CatalogError> {
        Ok(self.read()?.count_games_by_year())
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

fn owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}
