use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use vgcat_catalog::Catalog;

use super::{Output, print_game_detail, print_json};
use crate::CliError;

/// Apply a description update to the loaded catalog and show the result.
///
/// The catalog lives only for this process, so the change is not saved.
pub(crate) fn run_update(
    catalog: &mut Catalog,
    name: &str,
    description: &str,
    output: Output,
) -> Result<(), CliError> {
    if !catalog.update_game_description(name, description) {
        log::warn!("No game named '{}'; nothing updated", name);
        return Ok(());
    }

    let game = catalog
        .find_game_by_name(name)
        .ok_or_else(|| CliError::not_found(format!("no game named '{}'", name)))?;
    match output {
        Output::Json => print_json(game)?,
        Output::Text => {
            log::info!(
                "{} {}",
                "Updated".if_supports_color(Stdout, |t| t.green()),
                name
            );
            crate::logging::log_blank();
            print_game_detail(game);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_changes_catalog() {
        let mut catalog = Catalog::reference();
        run_update(&mut catalog, "Space Adventure", "New Description", Output::Text).unwrap();
        assert_eq!(
            catalog
                .find_game_by_name("Space Adventure")
                .unwrap()
                .description,
            "New Description"
        );
    }

    #[test]
    fn unknown_name_is_not_an_error() {
        let mut catalog = Catalog::reference();
        run_update(&mut catalog, "does-not-exist", "x", Output::Text).unwrap();
        assert_eq!(catalog, Catalog::reference());
    }
}
