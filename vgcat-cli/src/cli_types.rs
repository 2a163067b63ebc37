//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vgcat_catalog::{Console, ConsoleParseError};

#[derive(Parser)]
#[command(name = "vgcat")]
#[command(about = "Query an in-memory video game catalog", long_about = None)]
pub(crate) struct Cli {
    /// YAML file or directory to load games from (defaults to settings, then built-in data)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    #[command(flatten)]
    Query(QueryCommand),

    /// Manage the default catalog location
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that run against a loaded catalog.
#[derive(Subcommand)]
pub(crate) enum QueryCommand {
    /// List every game in the catalog
    List,

    /// Look up a game by exact name
    Find {
        /// Game name (case-sensitive)
        name: String,
    },

    /// Games available on PlayStation
    Playstation,

    /// Games available on a given console (e.g., ps, xbox, pc)
    On {
        #[arg(value_parser = parse_console)]
        console: Console,
    },

    /// Names of all games
    Names,

    /// Sum of player counts across all games
    TotalPlayers,

    /// Games released after 2019
    #[command(name = "after-2019")]
    After2019,

    /// Replace a game's description, then show the updated record
    Update {
        /// Game name (case-sensitive)
        name: String,

        /// New description text
        description: String,
    },

    /// Number of consoles each game ships on
    ConsoleCounts,

    /// The game supporting the most players
    MaxPlayers,

    /// Games available on both PC and Xbox
    PcAndXbox,

    /// Number of games released per year
    ByYear,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the active catalog source
    Show,

    /// Print the settings file path
    Path,

    /// Remember a YAML file or directory as the default catalog
    SetCatalog {
        path: PathBuf,
    },

    /// Forget the saved catalog and use built-in data
    ClearCatalog,
}

/// Alias-aware console parsing for arguments.
///
/// `Console` also converts `From<String>` (exact match, for data), which clap
/// would otherwise pick over `FromStr`.
fn parse_console(s: &str) -> Result<Console, ConsoleParseError> {
    s.parse()
}
