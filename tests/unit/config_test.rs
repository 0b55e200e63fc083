//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;

use spesa::config::Config;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.storage.file, PathBuf::from("spesa.csv"));
    assert!(config.storage.reset_file_on_clear);
    assert_eq!(config.display.currency, "€");
}

#[test]
fn test_no_candidate_files_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_first(&[temp.path().join("nope.toml")]).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".spesa.toml");
    fs::write(&path, "[display]\ncurrency = \"$\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.currency, "$");
    assert_eq!(config.storage.file, PathBuf::from("spesa.csv"));
    assert!(config.storage.reset_file_on_clear);
}

#[test]
fn test_first_existing_candidate_wins() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project.toml");
    let global = temp.path().join("global.toml");
    fs::write(&project, "[storage]\nfile = \"casa.csv\"\n").unwrap();
    fs::write(&global, "[storage]\nfile = \"globale.csv\"\n").unwrap();

    let config = Config::load_first(&[project, global.clone()]).unwrap();
    assert_eq!(config.storage.file, PathBuf::from("casa.csv"));

    let config = Config::load_first(&[temp.path().join("missing.toml"), global]).unwrap();
    assert_eq!(config.storage.file, PathBuf::from("globale.csv"));
}

#[test]
fn test_malformed_file_names_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".spesa.toml");
    fs::write(&path, "[storage\nfile = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains(".spesa.toml"));
}

#[test]
fn test_file_flag_overrides_config() {
    let config = Config::default().with_file(Some(PathBuf::from("altro.csv")));
    assert_eq!(config.storage.file, PathBuf::from("altro.csv"));

    let config = Config::default().with_file(None);
    assert_eq!(config.storage.file, PathBuf::from("spesa.csv"));
}

#[test]
fn test_shell_options_follow_config() {
    let mut config = Config::default();
    config.storage.reset_file_on_clear = false;
    config.display.currency = "£".to_string();

    let options = config.shell_options();
    assert!(!options.reset_file_on_clear);
    assert_eq!(options.currency, "£");
}
