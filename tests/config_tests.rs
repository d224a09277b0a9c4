use std::fs;
use std::path::{Path, PathBuf};

use defi_probe::config::Config;
use defi_probe::error::{ConfigError, Error};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("defi-probe.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn example_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("defi-probe.toml.example");
    let config = Config::load(&path).expect("example config loads");
    let defaults = Config::default();

    assert_eq!(config.pairs.provider_url, defaults.pairs.provider_url);
    assert_eq!(config.pairs.pair_storage, defaults.pairs.pair_storage);
    assert_eq!(config.pairs.limit, defaults.pairs.limit);
    assert_eq!(config.render.url, defaults.render.url);
    assert_eq!(
        config.render.success_screenshot(),
        defaults.render.success_screenshot()
    );
    assert_eq!(
        config.render.error_screenshot(),
        defaults.render.error_screenshot()
    );
    assert_eq!(config.render.chrome_executable, None);
}

#[test]
fn overrides_are_read_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[pairs]
provider_url = "http://127.0.0.1:8545"
limit = 2

[render]
url = "http://localhost:5173"
screenshot_dir = "/tmp/evidence"
sandbox = false
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.pairs.provider_url, "http://127.0.0.1:8545");
    assert_eq!(config.pairs.limit, 2);
    assert_eq!(config.render.url, "http://localhost:5173");
    assert_eq!(
        config.render.error_screenshot(),
        PathBuf::from("/tmp/evidence/error.png")
    );
    assert!(!config.render.sandbox);
    assert_eq!(config.render.heading_timeout_ms, 30_000);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = Config::discover(Some(missing.as_path()));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn explicit_file_is_reported_as_source() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"debug\"\n");

    let (config, source) = Config::discover(Some(path.as_path())).unwrap();

    assert_eq!(source.as_deref(), Some(path.as_path()));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[pairs\nlimit = 3\n");

    let result = Config::load(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn invalid_render_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render]\nurl = \"localhost without scheme\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "url", .. }))
    ));
}
