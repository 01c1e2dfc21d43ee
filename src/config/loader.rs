//! Load config from the process environment (after `.env`) or any key lookup.

use crate::config::types::{Config, DatabaseConfig};
use crate::error::ConfigError;
use std::str::FromStr;

/// Load `.env` if present, then read the process environment.
pub fn from_env() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Build config from a key lookup. Unset keys keep their defaults; empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let defaults = Config::default();
    let db = defaults.database;

    let database = DatabaseConfig {
        url: get("DATABASE_URL"),
        username: get("APP_DB_USERNAME").unwrap_or(db.username),
        password: lookup("APP_DB_PASSWORD").unwrap_or(db.password),
        name: get("APP_DB_NAME").unwrap_or(db.name),
        host: get("APP_DB_HOST").unwrap_or(db.host),
        port: parse_or(get("APP_DB_PORT"), "APP_DB_PORT", db.port)?,
        schema: get("APP_DB_SCHEMA").unwrap_or(db.schema),
        max_connections: parse_or(get("APP_DB_MAX_CONNECTIONS"), "APP_DB_MAX_CONNECTIONS", db.max_connections)?,
        ensure_table: parse_bool_or(get("APP_DB_ENSURE_TABLE"), "APP_DB_ENSURE_TABLE", db.ensure_table)?,
    };
    if database.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "APP_DB_MAX_CONNECTIONS",
            message: "must be at least 1".into(),
        });
    }

    Ok(Config {
        database,
        addr: get("APP_ADDR").unwrap_or(defaults.addr),
    })
}

fn parse_or<T: FromStr>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("'{}': {}", v, e),
        }),
        None => Ok(default),
    }
}

fn parse_bool_or(value: Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key,
                message: format!("'{}' is not a boolean", v),
            }),
        },
    }
}
