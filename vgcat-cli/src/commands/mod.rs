pub(crate) mod config;
pub(crate) mod query;
pub(crate) mod update;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use vgcat_catalog::Game;

use crate::CliError;

/// Output mode shared by every query command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Text,
    Json,
}

/// Write `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn player_label(count: u32) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{} players", count)
    }
}

pub(crate) fn console_list(game: &Game) -> String {
    game.consoles
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One summary line per game.
pub(crate) fn print_game_rows(title: &str, games: &[&Game]) {
    log::info!(
        "{} ({})",
        title.if_supports_color(Stdout, |t| t.bold()),
        games.len(),
    );
    if games.is_empty() {
        log::info!("  {}", "(none)".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for game in games {
        log::info!(
            "  {:>3}  {:<24} {}  {:<10} [{}]",
            format!("#{}", game.id).if_supports_color(Stdout, |t| t.dimmed()),
            game.name.if_supports_color(Stdout, |t| t.bold()),
            game.release_year,
            player_label(game.num_players),
            console_list(game).if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}

/// Full record display for a single game.
pub(crate) fn print_game_detail(game: &Game) {
    log::info!("{}", game.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  ID:          {}", game.id);
    log::info!("  Description: {}", game.description);
    log::info!(
        "  Consoles:    {}",
        console_list(game).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Released:    {}", game.release_year);
    log::info!("  Players:     {}", player_label(game.num_players));
}
