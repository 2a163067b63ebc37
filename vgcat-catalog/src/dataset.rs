//! Embedded reference dataset.

use crate::console::Console;
use crate::types::Game;

fn game(
    id: u32,
    name: &str,
    description: &str,
    consoles: &[Console],
    release_year: u32,
    num_players: u32,
) -> Game {
    Game {
        id,
        name: name.to_string(),
        description: description.to_string(),
        consoles: consoles.to_vec(),
        release_year,
        num_players,
    }
}

/// The five reference records, in catalog order.
pub fn reference_games() -> Vec<Game> {
    use Console::{Pc, PlayStation, Xbox};

    vec![
        game(
            1,
            "Space Adventure",
            "Explore distant galaxies",
            &[PlayStation, Xbox],
            2020,
            1,
        ),
        game(
            2,
            "Mystery Island",
            "Solve puzzles on an island",
            &[Pc, Xbox],
            2021,
            1,
        ),
        game(
            3,
            "Racers Unleashed",
            "High-speed racing action",
            &[PlayStation, Xbox, Pc],
            2019,
            4,
        ),
        game(
            4,
            "Alien Invasion",
            "Defend Earth from aliens",
            &[PlayStation],
            2018,
            2,
        ),
        game(
            5,
            "Zombie World",
            "Survive in a zombie apocalypse",
            &[Pc],
            2022,
            5,
        ),
    ]
}
