use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use vgcat_catalog::{Catalog, Console, Game};

use super::{Output, print_game_detail, print_game_rows, print_json};
use crate::CliError;

fn show_games(title: &str, games: &[&Game], output: Output) -> Result<(), CliError> {
    match output {
        Output::Json => print_json(games),
        Output::Text => {
            print_game_rows(title, games);
            Ok(())
        }
    }
}

pub(crate) fn run_list(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let games: Vec<&Game> = catalog.games().iter().collect();
    show_games("All games", &games, output)
}

pub(crate) fn run_find(catalog: &Catalog, name: &str, output: Output) -> Result<(), CliError> {
    let game = catalog
        .find_game_by_name(name)
        .ok_or_else(|| CliError::not_found(format!("no game named '{}'", name)))?;
    match output {
        Output::Json => print_json(game)?,
        Output::Text => print_game_detail(game),
    }
    Ok(())
}

pub(crate) fn run_playstation(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    show_games(
        "Games on PlayStation",
        &catalog.games_on_playstation(),
        output,
    )
}

pub(crate) fn run_on(catalog: &Catalog, console: &Console, output: Output) -> Result<(), CliError> {
    show_games(
        &format!("Games on {}", console),
        &catalog.games_on(console),
        output,
    )
}

pub(crate) fn run_pc_and_xbox(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    show_games(
        "Games on PC and Xbox",
        &catalog.games_on_pc_and_xbox(),
        output,
    )
}

pub(crate) fn run_after_2019(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    show_games(
        "Games released after 2019",
        &catalog.games_released_after_2019(),
        output,
    )
}

pub(crate) fn run_names(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let names = catalog.get_all_game_names();
    match output {
        Output::Json => print_json(&names)?,
        Output::Text => {
            for name in names {
                log::info!("{}", name);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_total_players(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let total = catalog.total_number_of_players();
    match output {
        Output::Json => print_json(&total)?,
        Output::Text => log::info!(
            "Total players across {} games: {}",
            catalog.len(),
            total.if_supports_color(Stdout, |t| t.bold()),
        ),
    }
    Ok(())
}

pub(crate) fn run_console_counts(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let counts = catalog.games_with_console_count();
    match output {
        Output::Json => print_json(&counts)?,
        Output::Text => {
            log::info!("{}", "Consoles per game".if_supports_color(Stdout, |t| t.bold()));
            for entry in &counts {
                log::info!("  {:<24} {:>2}", entry.name, entry.console_count);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_max_players(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let game = catalog.game_with_max_players()?;
    match output {
        Output::Json => print_json(game)?,
        Output::Text => print_game_detail(game),
    }
    Ok(())
}

pub(crate) fn run_by_year(catalog: &Catalog, output: Output) -> Result<(), CliError> {
    let counts = catalog.count_games_by_year();
    match output {
        Output::Json => print_json(&counts)?,
        Output::Text => {
            log::info!("{}", "Games per year".if_supports_color(Stdout, |t| t.bold()));
            for (year, count) in &counts {
                log::info!("  {}  {:>3}", year, count);
            }
        }
    }
    Ok(())
}
