//! Runtime settings from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "curriculum_db";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct Settings {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    /// HTTP listening port.
    pub port: u16,
    /// Origin allowed to call the API from a browser.
    pub cors_origin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_host: DEFAULT_DB_HOST.into(),
            db_port: DEFAULT_DB_PORT,
            db_user: DEFAULT_DB_USER.into(),
            db_password: String::new(),
            db_name: DEFAULT_DB_NAME.into(),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.into(),
        }
    }
}

impl Settings {
    /// Read `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_MAX_CONNECTIONS`,
    /// `PORT` and `CORS_ORIGIN`; unset keys fall back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Ok(Self {
            db_host: lookup("DB_HOST").unwrap_or(defaults.db_host),
            db_port: parse_or(&lookup, "DB_PORT", defaults.db_port)?,
            db_user: lookup("DB_USER").unwrap_or(defaults.db_user),
            db_password: lookup("DB_PASSWORD").unwrap_or(defaults.db_password),
            db_name: lookup("DB_NAME").unwrap_or(defaults.db_name),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
