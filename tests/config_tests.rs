use hrdash::config::{Config, DEFAULT_API_BASE_URL};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.simulated_delay_ms, 1000);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_missing_fields_take_defaults() {
    let cfg: Config = serde_yaml::from_str("page_size: 5\n").unwrap();
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn test_set_updates_fields() {
    let mut cfg = Config::default();

    cfg.set("page_size", "50").unwrap();
    cfg.set("simulated_delay_ms", "0").unwrap();
    cfg.set("log_level", "DEBUG").unwrap();
    cfg.set("api_base_url", "http://localhost:8080/").unwrap();

    assert_eq!(cfg.page_size, 50);
    assert_eq!(cfg.simulated_delay_ms, 0);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.api_base_url, "http://localhost:8080");
}

#[test]
fn test_set_rejects_bad_values() {
    let mut cfg = Config::default();

    assert!(cfg.set("page_size", "0").is_err());
    assert!(cfg.set("page_size", "many").is_err());
    assert!(cfg.set("log_level", "loud").is_err());
    assert!(cfg.set("api_base_url", "dummyjson.com").is_err());
    assert!(cfg.set("colour", "blue").is_err());

    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn test_relative_db_path_lives_in_config_dir() {
    assert_eq!(
        Config::resolve_db_path("team.sqlite"),
        Config::config_dir().join("team.sqlite")
    );

    let absolute: PathBuf = std::env::temp_dir().join("abs_hrdash.sqlite");
    assert_eq!(
        Config::resolve_db_path(&absolute.to_string_lossy()),
        absolute
    );
}

#[test]
fn test_set_database_uses_same_resolution() {
    let mut cfg = Config::default();
    cfg.set("database", "other.sqlite").unwrap();
    assert_eq!(
        PathBuf::from(&cfg.database),
        Config::resolve_db_path("other.sqlite")
    );
}
