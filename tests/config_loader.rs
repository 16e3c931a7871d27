use backdesk::config::{Config, ConfigError, ConfigStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).expect("defaults");
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[api]
base_url = "http://localhost:4000"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.api.base_url, "http://localhost:4000");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.notification_ttl_ms, 3000);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "api = not toml at all [");

    let err = Config::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[api]
base_url = "ftp://localhost:3000"
"#,
    );

    let err = Config::load_from(&path).expect_err("should fail");
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("http://"), "message: {}", message)
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[api]
timeout_seconds = 0
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn store_reload_picks_up_file_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[api]
base_url = "http://localhost:4000"
"#,
    );

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().api.base_url, "http://localhost:4000");

    write_config(
        dir.path(),
        r#"
[api]
base_url = "http://localhost:5000"
"#,
    );
    store.reload().expect("reload");
    assert_eq!(store.get().api.base_url, "http://localhost:5000");
}

#[test]
fn store_keeps_old_config_when_reload_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[api]
base_url = "http://localhost:4000"
"#,
    );

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    write_config(dir.path(), "broken [");

    assert!(store.reload().is_err());
    assert_eq!(store.get().api.base_url, "http://localhost:4000");
}
