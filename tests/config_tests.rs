//! Integration tests for the config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::cardmeta_cmd;

fn init_site(temp: &TempDir) {
    cardmeta_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn test_config_get_locale() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("locale")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"));
}

#[test]
fn test_config_set_social_handle() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("social_handle")
        .arg("@acme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set social_handle = @acme"));

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("social_handle")
        .assert()
        .success()
        .stdout(predicate::str::contains("@acme"));
}

#[test]
fn test_config_set_invalid_handle_fails() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("social_handle")
        .arg("way too long and spaced")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid handle"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = en"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("handle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_site_fails_with_exit_code() {
    let temp = TempDir::new().unwrap();

    cardmeta_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("locale")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cardmeta init"));
}

#[test]
fn test_config_respects_cardmeta_root_env() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    let elsewhere = TempDir::new().unwrap();

    cardmeta_cmd()
        .current_dir(elsewhere.path())
        .env("CARDMETA_ROOT", temp.path())
        .arg("config")
        .arg("locale")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"));
}
