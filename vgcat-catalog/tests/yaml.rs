use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vgcat_catalog::{load_catalog, load_games, load_games_dir, CatalogError, Console, YamlError};

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const TWO_GAMES: &str = r#"
- id: 10
  name: "Harbor Tales"
  description: "Fishing village mysteries"
  consoles: [PC, Switch]
  release_year: 2023
  num_players: 1
- id: 11
  name: "Kart Mayhem"
  description: "Couch racing"
  consoles:
    - PlayStation
    - Xbox
  release_year: 2021
  num_players: 4
"#;

#[test]
fn load_games_from_file() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "games.yaml", TWO_GAMES);

    let games = load_games(&tmp.path().join("games.yaml")).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].name, "Harbor Tales");
    assert_eq!(
        games[0].consoles,
        vec![Console::Pc, Console::Other("Switch".to_string())]
    );
    assert_eq!(games[1].consoles, vec![Console::PlayStation, Console::Xbox]);
    assert_eq!(games[1].num_players, 4);
}

#[test]
fn missing_consoles_default_to_empty() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "bare.yaml",
        r#"
- id: 1
  name: "Text Quest"
  description: "Words only"
  release_year: 1985
  num_players: 1
"#,
    );

    let games = load_games(&tmp.path().join("bare.yaml")).unwrap();
    assert!(games[0].consoles.is_empty());
}

#[test]
fn empty_file_is_empty_list() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "empty.yaml", "");
    assert!(load_games(&tmp.path().join("empty.yaml")).unwrap().is_empty());
}

#[test]
fn directory_files_merge_in_name_order() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "b.yaml",
        "- {id: 2, name: Second, description: '', consoles: [], release_year: 2001, num_players: 1}\n",
    );
    write_yaml(
        tmp.path(),
        "a.yml",
        "- {id: 1, name: First, description: '', consoles: [], release_year: 2000, num_players: 1}\n",
    );
    write_yaml(tmp.path(), "notes.txt", "not yaml at all: [");

    let games = load_games_dir(tmp.path()).unwrap();
    let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let games = load_games_dir(&tmp.path().join("nonexistent")).unwrap();
    assert!(games.is_empty());
}

#[test]
fn file_passed_as_dir_is_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "games.yaml", TWO_GAMES);
    let result = load_games_dir(&tmp.path().join("games.yaml"));
    assert!(matches!(result, Err(YamlError::DirNotFound(_))));
}

#[test]
fn malformed_yaml_reports_path() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "bad.yaml", "- id: [unterminated\n");
    let err = load_games(&tmp.path().join("bad.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::Parse { .. }));
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn load_catalog_builds_queryable_catalog() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "games.yaml", TWO_GAMES);

    let catalog = load_catalog(&tmp.path().join("games.yaml")).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.total_number_of_players(), 5);
    assert_eq!(catalog.games_on_playstation().len(), 1);

    let from_dir = load_catalog(tmp.path()).unwrap();
    assert_eq!(from_dir, catalog);
}

#[test]
fn load_catalog_rejects_duplicate_ids() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "a.yaml", TWO_GAMES);
    write_yaml(tmp.path(), "b.yaml", TWO_GAMES);

    let err = load_catalog(tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        YamlError::Catalog {
            source: CatalogError::DuplicateId(10),
            ..
        }
    ));
}

#[test]
fn bundled_catalog_matches_reference() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("catalog")
        .join("games.yaml");
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog, vgcat_catalog::Catalog::reference());
}
