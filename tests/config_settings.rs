//! config.toml round-trip and settings precedence.

mod common;

use laptop_brick::config::{BrickPaths, CliOverrides, Config, Settings, DEFAULT_BLOCKLIST};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn paths_resolve_under_base() {
    let dir = common::temp_home();
    let paths = BrickPaths::for_test(dir.path());

    assert_eq!(paths.config_dir, dir.path());
    assert!(paths.config_file.ends_with("config.toml"));
    assert!(paths.config_file.starts_with(dir.path()));
}

#[test]
fn default_paths_use_brick_home() {
    let dir = common::temp_home();
    common::with_env("LAPTOP_BRICK_HOME", dir.path(), || {
        let paths = BrickPaths::default_paths();
        assert!(paths.config_file.starts_with(dir.path()));
    });
}

#[test]
fn missing_config_is_empty() {
    let dir = common::temp_home();
    let paths = BrickPaths::for_test(dir.path());
    assert_eq!(Config::load(&paths).unwrap(), Config::default());
}

#[test]
fn config_roundtrip() {
    let dir = common::temp_home();
    let paths = BrickPaths::for_test(dir.path().join("nested"));
    let config = Config {
        ip_address: Some("192.168.1.40".into()),
        username: Some("me@example.com".into()),
        blocklist: Some(PathBuf::from("/opt/brick/blocklist")),
        poll_interval_secs: Some(5),
        ..Config::default()
    };

    std::fs::create_dir_all(&paths.config_dir).unwrap();
    std::fs::write(&paths.config_file, toml::to_string_pretty(&config).unwrap()).unwrap();
    let loaded = Config::load(&paths).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = common::temp_home();
    let paths = BrickPaths::for_test(dir.path());
    std::fs::write(&paths.config_file, "poll_interval_secs = \"soon\"").unwrap();

    let err = Config::load(&paths).unwrap_err();
    assert!(format!("{err:#}").contains("parse config"));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let dir = common::temp_home();
    let paths = BrickPaths::for_test(dir.path());
    std::fs::write(&paths.config_file, "poll_interval_secs = 0\n").unwrap();

    let err = Config::load(&paths).unwrap_err();
    assert!(format!("{err:#}").contains("poll_interval_secs must be at least 1"));

    let config = Config {
        poll_interval_secs: Some(0),
        ..Config::default()
    };
    let settings = Settings::resolve(CliOverrides::default(), config);
    assert_eq!(settings.poll_interval, Duration::from_secs(1));
}

#[test]
fn debug_output_hides_password() {
    let config = Config {
        username: Some("me@example.com".into()),
        password: Some("hunter2-secret".into()),
        ..Config::default()
    };
    let cli = CliOverrides {
        password: Some("cli-secret".into()),
        ..CliOverrides::default()
    };

    let settings = Settings::resolve(cli.clone(), config.clone());

    for rendered in [
        format!("{config:?}"),
        format!("{cli:?}"),
        format!("{settings:?}"),
    ] {
        assert!(!rendered.contains("secret"), "leaked: {rendered}");
    }
    assert!(format!("{config:?}").contains("me@example.com"));
}

#[test]
fn cli_flags_win_over_config() {
    let config = Config {
        ip_address: Some("10.0.0.1".into()),
        username: Some("file-user".into()),
        password: Some("file-pass".into()),
        ..Config::default()
    };
    let cli = CliOverrides {
        ip_address: Some("10.0.0.2".into()),
        username: None,
        password: Some("cli-pass".into()),
    };

    let settings = Settings::resolve(cli, config);

    assert_eq!(settings.ip_address.as_deref(), Some("10.0.0.2"));
    assert_eq!(settings.username.as_deref(), Some("file-user"));
    assert_eq!(settings.password.as_deref(), Some("cli-pass"));
}

#[test]
fn defaults_and_env_overrides() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    let blocklist = dir.path().join("list");
    let config = Config {
        hosts_file: Some(PathBuf::from("/from/config/hosts")),
        ..Config::default()
    };

    let settings = Settings::resolve(CliOverrides::default(), Config::default());
    assert_eq!(settings.blocklist_file, PathBuf::from(DEFAULT_BLOCKLIST));
    assert_eq!(settings.poll_interval, Duration::from_secs(1));
    assert!(settings.ip_address.is_none());

    common::with_env("LAPTOP_BRICK_HOSTS_FILE", &hosts, || {
        common::with_env("LAPTOP_BRICK_BLOCKLIST", &blocklist, || {
            let settings = Settings::resolve(CliOverrides::default(), config.clone());
            assert_eq!(settings.hosts_file, hosts);
            assert_eq!(settings.blocklist_file, blocklist);
        });
    });
}
