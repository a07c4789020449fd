use std::env::{self, VarError};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{invalid_input_error, Error};
use crate::external::google_maps::DEFAULT_API_BASE;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LISTEN_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres connection string. Without it orders live in process memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    /// Webhook receiving travel times. Without it they are only logged.
    pub publish_url: Option<String>,
    pub http_timeout: Duration,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let optional = |key: &str| match lookup(key) {
            Ok(value) if !value.trim().is_empty() => Ok(Some(value)),
            Ok(_) | Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(Error::from(err)),
        };

        let http_timeout_secs = parse_or(
            optional("HTTP_TIMEOUT_SECS")?,
            "HTTP_TIMEOUT_SECS",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url: optional("DATABASE_URL")?,
            database_max_connections: parse_or(
                optional("DATABASE_MAX_CONNECTIONS")?,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            google_maps_api_base: optional("GOOGLE_MAPS_API_BASE")?
                .unwrap_or_else(|| DEFAULT_API_BASE.into()),
            google_maps_api_key: lookup("GOOGLE_MAPS_API_KEY")?,
            publish_url: optional("PUBLISH_URL")?,
            http_timeout: Duration::from_secs(http_timeout_secs),
            listen_addr: parse_or(
                optional("LISTEN_ADDR")?,
                "LISTEN_ADDR",
                SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
            )?,
        })
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T, Error> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| invalid_input_error(format!("invalid value for {}: {}", key, value))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ENV_VAR, INVALID_INPUT};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[("GOOGLE_MAPS_API_KEY", "key")])).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.google_maps_api_base, "maps.googleapis.com");
        assert_eq!(config.google_maps_api_key, "key");
        assert_eq!(config.publish_url, None);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "key"),
            ("DATABASE_URL", "postgresql://localhost/orders"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("PUBLISH_URL", "http://eta.internal/travel-times"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("LISTEN_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgresql://localhost/orders")
        );
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(
            config.publish_url.as_deref(),
            Some("http://eta.internal/travel-times")
        );
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn api_key_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.code, ENV_VAR);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "key"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();

        assert_eq!(err.code, INVALID_INPUT);
    }
}
