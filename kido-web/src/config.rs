//! Runtime configuration, read from the environment.

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REGISTRY_KEY: &str = "games";
pub const DEFAULT_MAILBOX: usize = 256;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Postgres connection string. Without one, games live in memory only.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Store key the whole registry is saved under.
    pub registry_key: String,
    /// How many requests may queue for the authority before callers wait.
    pub mailbox: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            registry_key: DEFAULT_REGISTRY_KEY.to_string(),
            mailbox: DEFAULT_MAILBOX,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable lookup. Unparseable values fall back
    /// to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            port: parse_or(&lookup, "PORT", defaults.port),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.db_max_connections,
            ),
            registry_key: lookup("REGISTRY_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(defaults.registry_key),
            mailbox: parse_or(&lookup, "AUTHORITY_MAILBOX", defaults.mailbox).max(1),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {name}={raw:?}");
            default
        }),
        None => default,
    }
}
