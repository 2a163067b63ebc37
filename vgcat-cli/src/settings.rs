//! Persistent CLI settings (default catalog location).
//!
//! The settings file is `~/.config/vgcat/settings.toml`:
//!
//! ```toml
//! [catalog]
//! path = "/home/me/games.yaml"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use vgcat_catalog::Catalog;

use crate::CliError;

/// Canonical path to the settings file: `~/.config/vgcat/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("vgcat").join("settings.toml")
}

/// Where the catalog for this invocation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// `--catalog` on the command line
    Flag(PathBuf),
    /// `catalog.path` in `settings.toml`
    Settings(PathBuf),
    /// The embedded reference dataset
    Builtin,
}

impl CatalogSource {
    pub(crate) fn load(&self) -> Result<Catalog, CliError> {
        match self {
            Self::Flag(path) | Self::Settings(path) => {
                let catalog = vgcat_catalog::load_catalog(path)?;
                log::debug!(
                    "Loaded {} games from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(catalog)
            }
            Self::Builtin => Ok(Catalog::reference()),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(path) => write!(f, "{} (--catalog)", path.display()),
            Self::Settings(path) => write!(f, "{} (settings)", path.display()),
            Self::Builtin => write!(f, "built-in reference dataset"),
        }
    }
}

/// Resolve the catalog source using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.path` in the settings file
/// 3. Embedded reference dataset
///
/// A settings file that exists but cannot be parsed is an error, so a saved
/// catalog is never silently swapped for the built-in data.
pub(crate) fn resolve_catalog_source(
    cli_override: Option<PathBuf>,
    settings: &Path,
) -> Result<CatalogSource, CliError> {
    if let Some(p) = cli_override {
        return Ok(CatalogSource::Flag(p));
    }
    Ok(match read_catalog_path(settings)? {
        Some(p) => CatalogSource::Settings(p),
        None => CatalogSource::Builtin,
    })
}

/// Parse the settings file. A missing file is `Ok(None)`.
fn read_settings(settings: &Path) -> Result<Option<toml::Table>, CliError> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| CliError::config(format!("invalid {}: {}", settings.display(), e)))
}

/// Replace the settings file with `doc` via a temp file and rename.
fn write_settings(settings: &Path, doc: &toml::Table) -> Result<(), CliError> {
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc)
        .map_err(|e| CliError::config(format!("cannot serialize settings: {}", e)))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, settings)?;
    Ok(())
}

/// Read `catalog.path` from the settings file, if set.
pub(crate) fn read_catalog_path(settings: &Path) -> Result<Option<PathBuf>, CliError> {
    let Some(doc) = read_settings(settings)? else {
        return Ok(None);
    };
    let path = doc
        .get("catalog")
        .and_then(|catalog| catalog.get("path"))
        .and_then(toml::Value::as_str)
        .filter(|path| !path.is_empty());
    Ok(path.map(PathBuf::from))
}

/// Save (or clear) `catalog.path`, preserving any other keys in the file.
///
/// Refuses to overwrite a settings file it cannot parse.
pub(crate) fn write_catalog_path(settings: &Path, path: Option<&Path>) -> Result<(), CliError> {
    let mut doc = read_settings(settings)?.unwrap_or_default();

    match path {
        Some(p) => {
            let catalog = doc
                .entry("catalog")
                .or_insert_with(|| toml::Value::Table(toml::Table::new()))
                .as_table_mut()
                .ok_or_else(|| CliError::config("[catalog] in settings is not a table"))?;
            catalog.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            if let Some(catalog) = doc.get_mut("catalog").and_then(toml::Value::as_table_mut) {
                catalog.remove("path");
            }
        }
    }

    write_settings(settings, &doc)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings: &Path) -> Result<Option<String>, CliError> {
    match read_settings(settings)? {
        Some(doc) => toml::to_string_pretty(&doc)
            .map(Some)
            .map_err(|e| CliError::config(format!("cannot serialize settings: {}", e))),
        None => Ok(None),
    }
}
