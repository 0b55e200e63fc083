//! Integration tests for the spesa binary
//!
//! The interactive menu is driven through stdin; each test runs in its own
//! temporary directory so the default `spesa.csv` never leaks between tests.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;


fn spesa() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("spesa"))
}

#[test]
fn test_version() {
    spesa().arg("--version").assert().success().stdout(predicate::str::contains("spesa"));
}

#[test]
fn test_help() {
    spesa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Without a command, spesa opens an interactive menu"));
}

#[test]
fn test_exit_immediately() {
    let temp = TempDir::new().unwrap();

    spesa()
        .current_dir(temp.path())
        .write_stdin("10\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("GESTIONE LISTA DELLA SPESA"))
        .stdout(predicate::str::contains("Grazie per aver usato il gestionale!"));

    assert!(!temp.path().join("spesa.csv").exists());
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    spesa().current_dir(temp.path()).write_stdin("").assert().success();
}

#[test]
fn test_list_without_file_fails() {
    let temp = TempDir::new().unwrap();

    spesa()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("file non trovato"));
}

#[test]
fn test_summary_of_malformed_file_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("spesa.csv"),
        "Nome,Categoria,Prezzo,Quantita,Acquistato\nPane,Alimentari,uno,2,false\n",
    )
    .unwrap();

    spesa()
        .arg("summary")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("riga 2"));
}

#[test]
fn test_malformed_config_fails_at_startup() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".spesa.toml"), "[storage\n").unwrap();

    spesa()
        .arg("summary")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}
