//! Server configuration loaded from the environment.
//!
//! `.env` is read by `main` through `dotenvy` before [`Config::from_env`]
//! runs, so values there behave like real environment variables. Numeric
//! settings that fail to parse fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FLUSH_INTERVAL_MS: u64 = 1000;
const DEFAULT_ADMIN_PASSWORD: &str = "changeme123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL required")]
    MissingDatabaseUrl,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Delay between persistence flushes.
    pub flush_interval_ms: u64,
    /// Admin password installed when no account row exists yet.
    pub admin_password: String,
    /// Install the default collections into an empty store.
    pub seed_defaults: bool,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when `DATABASE_URL` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            flush_interval_ms: parse_or(&lookup, "FLUSH_INTERVAL_MS", DEFAULT_FLUSH_INTERVAL_MS),
            admin_password: lookup("ADMIN_PASSWORD")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_owned()),
            seed_defaults: lookup("SEED_DEFAULTS").map_or(true, |v| parse_flag(&v).unwrap_or(true)),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
