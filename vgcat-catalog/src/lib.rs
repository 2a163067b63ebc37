//! Video game catalog: data model, console identifiers, query operations,
//! and YAML loading.
//!
//! The [`Catalog`] is an owned value constructed once by the caller and
//! passed to every query. Use [`SharedCatalog`] when several threads need
//! to read and update the same catalog.

pub mod catalog;
pub mod console;
pub mod dataset;
pub mod error;
pub mod shared;
pub mod types;
pub mod yaml;

pub use catalog::Catalog;
pub use console::{Console, ConsoleParseError};
pub use error::CatalogError;
pub use shared::SharedCatalog;
pub use types::*;
pub use yaml::{load_catalog, load_games, load_games_dir, YamlError};
