//! vgcat CLI
//!
//! Command-line interface for querying a video game catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use vgcat_catalog::Catalog;

use cli_types::{Cli, Commands, ConfigAction, QueryCommand};
use commands::Output;
use commands::config::{
    run_config_clear_catalog, run_config_path, run_config_set_catalog, run_config_show,
};
use commands::query::{
    run_after_2019, run_by_year, run_console_counts, run_find, run_list, run_max_players,
    run_names, run_on, run_pc_and_xbox, run_playstation, run_total_players,
};
use commands::update::run_update;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let output = if cli.json { Output::Json } else { Output::Text };

    match cli.command {
        Commands::Config { action } => run_config(action, cli.catalog),
        Commands::Query(query) => {
            let source =
                settings::resolve_catalog_source(cli.catalog, &settings::settings_path())?;
            log::debug!("Catalog source: {}", source);
            let mut catalog = source.load()?;
            run_query(&mut catalog, query, output)
        }
    }
}

fn run_config(action: ConfigAction, cli_catalog: Option<PathBuf>) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            run_config_show(cli_catalog);
            Ok(())
        }
        ConfigAction::Path => {
            run_config_path();
            Ok(())
        }
        ConfigAction::SetCatalog { path } => run_config_set_catalog(&path),
        ConfigAction::ClearCatalog => run_config_clear_catalog(),
    }
}

fn run_query(catalog: &mut Catalog, query: QueryCommand, output: Output) -> Result<(), CliError> {
    match query {
        QueryCommand::List => run_list(catalog, output),
        QueryCommand::Find { name } => run_find(catalog, &name, output),
        QueryCommand::Playstation => run_playstation(catalog, output),
        QueryCommand::On { console } => run_on(catalog, &console, output),
        QueryCommand::Names => run_names(catalog, output),
        QueryCommand::TotalPlayers => run_total_players(catalog, output),
        QueryCommand::After2019 => run_after_2019(catalog, output),
        QueryCommand::Update { name, description } => {
            run_update(catalog, &name, &description, output)
        }
        QueryCommand::ConsoleCounts => run_console_counts(catalog, output),
        QueryCommand::MaxPlayers => run_max_players(catalog, output),
        QueryCommand::PcAndXbox => run_pc_and_xbox(catalog, output),
        QueryCommand::ByYear => run_by_year(catalog, output),
    }
}
