use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{
    load_settings_string, resolve_catalog_source, settings_path, write_catalog_path,
};

/// Show the settings file and which catalog source is active.
pub(crate) fn run_config_show(cli_catalog: Option<PathBuf>) {
    let path = settings_path();

    log::info!(
        "{}",
        "vgcat Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::logging::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    match resolve_catalog_source(cli_catalog, &path) {
        Ok(source) => log::info!("  Catalog:       {}", source),
        Err(e) => log::warn!("{}", e),
    }

    if let Ok(Some(contents)) = load_settings_string(&path) {
        crate::logging::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save `catalog` as the default catalog location.
///
/// The catalog is loaded once first so a broken path is never saved.
pub(crate) fn run_config_set_catalog(catalog: &Path) -> Result<(), CliError> {
    let absolute = std::path::absolute(catalog)?;
    if !absolute.exists() {
        return Err(CliError::config(format!(
            "catalog path does not exist: {}",
            absolute.display()
        )));
    }
    let loaded = vgcat_catalog::load_catalog(&absolute)?;

    write_catalog_path(&settings_path(), Some(&absolute))?;
    log::info!(
        "Default catalog set to {} ({} games)",
        absolute.display().if_supports_color(Stdout, |t| t.cyan()),
        loaded.len(),
    );
    Ok(())
}

pub(crate) fn run_config_clear_catalog() -> Result<(), CliError> {
    write_catalog_path(&settings_path(), None)?;
    log::info!("Default catalog cleared; using built-in reference data");
    Ok(())
}
