//! YAML loading for human-curated game lists.
//!
//! A catalog can come from a single YAML file holding a sequence of games,
//! or from a directory of such files merged in file-name order.

use std::path::Path;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::Game;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Invalid catalog in {path}: {source}")]
    Catalog { path: String, source: CatalogError },
}

/// Load games from a single YAML file containing a sequence of `Game` entries.
pub fn load_games(path: &Path) -> Result<Vec<Game>, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    // An empty file is an empty list, not a parse error
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load games from every `.yaml`/`.yml` file in a directory.
///
/// Files are read in file-name order and their sequences concatenated.
/// A missing directory yields an empty list.
pub fn load_games_dir(dir: &Path) -> Result<Vec<Game>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut all = Vec::new();
    for entry in entries {
        let path = entry.path();
        let games = load_games(&path)?;
        log::debug!("Loaded {} games from {}", games.len(), path.display());
        all.extend(games);
    }

    Ok(all)
}

/// Build a validated [`Catalog`] from a YAML file or a directory of them.
pub fn load_catalog(path: &Path) -> Result<Catalog, YamlError> {
    let games = if path.is_dir() {
        load_games_dir(path)?
    } else {
        load_games(path)?
    };
    Catalog::new(games).map_err(|e| YamlError::Catalog {
        path: path.display().to_string(),
        source: e,
    })
}
