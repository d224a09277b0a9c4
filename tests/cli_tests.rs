//! CLI integration tests. None of these reach the network or a browser.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn defi_probe() -> Command {
    let mut cmd = cargo_bin_cmd!("defi-probe");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    defi_probe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pairs"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_name() {
    defi_probe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("defi-probe"));
}

#[test]
fn config_without_file_shows_defaults() {
    let dir = TempDir::new().unwrap();
    defi_probe()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(built-in defaults)"))
        .stdout(predicate::str::contains("https://mainnet.base.org"))
        .stdout(predicate::str::contains("http://localhost:3000"))
        .stdout(predicate::str::contains(
            "/app/jules-scratch/verification/verification.png",
        ));
}

#[test]
fn config_picks_up_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("defi-probe.toml"), "[pairs]\nlimit = 3\n").unwrap();

    defi_probe()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("defi-probe.toml"))
        .stdout(predicate::str::is_match(r"Limit\s+3").unwrap());
}

#[test]
fn config_command_honours_rust_log() {
    let dir = TempDir::new().unwrap();
    defi_probe()
        .current_dir(dir.path())
        .env("RUST_LOG", "defi_probe=debug")
        .env("NO_COLOR", "1")
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("no config file found, using defaults"))
        .stdout(predicate::str::contains("no config file found").not());
}

#[test]
fn config_command_logs_loaded_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("defi-probe.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    defi_probe()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration loaded"));
}

#[test]
fn invalid_config_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[pairs]\nlimit = 0\n").unwrap();

    defi_probe()
        .args(["config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for limit"));
}

#[test]
fn pairs_rejects_malformed_provider_url() {
    let dir = TempDir::new().unwrap();
    defi_probe()
        .current_dir(dir.path())
        .args(["pairs", "--provider-url", "not a url"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("/USD").not())
        .stderr(predicate::str::contains("provider_url"));
}

#[test]
fn pairs_with_unreachable_provider_prints_no_pairs() {
    let dir = TempDir::new().unwrap();
    defi_probe()
        .current_dir(dir.path())
        .args(["pairs", "--provider-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Fetching Avantis perp pairs via SDK...",
        ))
        .stdout(predicate::str::contains("from=").not())
        .stderr(predicate::str::contains("Failed to read pairs count"));
}

#[test]
fn verify_rejects_invalid_url_before_launching() {
    let dir = TempDir::new().unwrap();
    defi_probe()
        .current_dir(dir.path())
        .args(["verify", "--url", "::not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for url"));
}
