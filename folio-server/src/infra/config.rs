//! Environment-driven runtime configuration.
//!
//! Everything is read from process environment variables, with a `.env` file
//! loaded first when present. No configuration file format is involved.

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9092;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid FOLIO_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub demo: bool,
    pub env_file_loaded: bool,
}

impl Config {
    /// Composes the runtime configuration from the environment.
    ///
    /// `FOLIO_HOST` and `FOLIO_PORT` default to `0.0.0.0:9092`. A missing
    /// database URL is not an error here; whether one is required depends on
    /// the selected backend.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file_loaded = dotenvy::dotenv().is_ok();

        let host = env::var("FOLIO_HOST")
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("FOLIO_PORT") {
            Ok(raw) => {
                let trimmed = raw.trim();
                trimmed.parse().map_err(|source| ConfigError::InvalidPort {
                    value: trimmed.to_string(),
                    source,
                })?
            }
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                url: resolve_database_url(),
            },
            demo: parse_bool_var("FOLIO_DEMO").unwrap_or(false),
            env_file_loaded,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Resolve the effective PostgreSQL connection URL.
///
/// `DATABASE_URL` wins when set and non-empty. Otherwise `PGDATABASE` and
/// then `DATABASE_NAME` name a database reachable over the local socket,
/// yielding a plain `postgresql:///<db>` URL.
pub fn resolve_database_url() -> Option<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    let database = env::var("PGDATABASE")
        .or_else(|_| env::var("DATABASE_NAME"))
        .ok()?
        .trim()
        .to_owned();

    if database.is_empty() {
        return None;
    }

    Some(format!("postgresql:///{database}"))
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool_var(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|raw| parse_bool(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_env_style_forms() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    // Single test so the env mutations cannot interleave with each other.
    #[test]
    fn database_url_resolution_prefers_explicit_url() {
        unsafe {
            std::env::set_var("DATABASE_URL", "postgresql://folio@db/catalog");
            std::env::set_var("PGDATABASE", "ignored");
        }
        assert_eq!(
            resolve_database_url().as_deref(),
            Some("postgresql://folio@db/catalog")
        );

        unsafe {
            std::env::set_var("DATABASE_URL", "   ");
        }
        assert_eq!(resolve_database_url().as_deref(), Some("postgresql:///ignored"));

        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("PGDATABASE");
            std::env::set_var("DATABASE_NAME", "catalog");
        }
        assert_eq!(resolve_database_url().as_deref(), Some("postgresql:///catalog"));

        unsafe {
            std::env::remove_var("DATABASE_NAME");
        }
        assert_eq!(resolve_database_url(), None);
    }
}
