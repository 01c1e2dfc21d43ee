//! Runtime configuration types.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; when set, the discrete fields below are ignored.
    pub url: Option<String>,
    pub username: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    /// Schema holding the products table.
    pub schema: String,
    pub max_connections: u32,
    /// Run `CREATE TABLE IF NOT EXISTS` at startup.
    pub ensure_table: bool,
}

impl DatabaseConfig {
    /// Connect options for the pool. Discrete fields connect with `sslmode=disable`.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.username)
                .password(&self.password)
                .database(&self.name)
                .ssl_mode(PgSslMode::Disable)),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            username: "postgres".into(),
            password: String::new(),
            name: "postgres".into(),
            host: "localhost".into(),
            port: 5432,
            schema: "public".into(),
            max_connections: 5,
            ensure_table: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Listen address, `host:port`.
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: DatabaseConfig::default(),
            addr: "0.0.0.0:8010".into(),
        }
    }
}
