use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn missing_database_url_is_an_error() {
    let result = Config::from_lookup(lookup_from(&[]));
    assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
}

#[test]
fn blank_database_url_is_an_error() {
    let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]));
    assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/admin")])).unwrap();
    assert_eq!(
        config,
        Config {
            database_url: "postgres://localhost/admin".into(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL_MS,
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            seed_defaults: true,
        }
    );
}

#[test]
fn explicit_values_override_defaults() {
    let config = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/admin"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("FLUSH_INTERVAL_MS", "250"),
        ("ADMIN_PASSWORD", "s3cret-pass"),
        ("SEED_DEFAULTS", "false"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.flush_interval_ms, 250);
    assert_eq!(config.admin_password, "s3cret-pass");
    assert!(!config.seed_defaults);
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/admin"),
        ("PORT", "eighty"),
        ("FLUSH_INTERVAL_MS", "-1"),
        ("SEED_DEFAULTS", "maybe"),
    ]))
    .unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.flush_interval_ms, DEFAULT_FLUSH_INTERVAL_MS);
    assert!(config.seed_defaults);
}

#[test]
fn parse_flag_accepts_common_spellings() {
    assert_eq!(parse_flag("ON"), Some(true));
    assert_eq!(parse_flag(" 0 "), Some(false));
    assert_eq!(parse_flag(""), None);
}
